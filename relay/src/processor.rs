use anyhow::{Context, Result};
use relay_client::{ComplimentClient, TelegramClient};
use tracing::instrument;

use crate::InboundUpdate;

/// Runs the fetch-and-reply flow for one update. Holds no per-request state,
/// so a single instance is cloned into every handler.
#[derive(Debug, Clone)]
pub struct Processor {
    compliments: ComplimentClient,
    telegram: TelegramClient,
}

impl Processor {
    pub fn new(compliments: ComplimentClient, telegram: TelegramClient) -> Self {
        Self {
            compliments,
            telegram,
        }
    }

    #[instrument(skip_all, fields(chat_id = update.message.chat.id))]
    pub async fn process_update(&self, update: &InboundUpdate) -> Result<String> {
        let compliment = self
            .compliments
            .fetch()
            .await
            .context("could not fetch compliment")?;

        self.telegram
            .send_message(update.message.chat.id, &compliment.compliment)
            .await
            .context("could not send message")?;

        Ok(compliment.compliment)
    }
}
