use std::fmt::Debug;
use std::time::Duration;

use reqwest::StatusCode;
use tracing::instrument;

use crate::{ClientError, Result};

/// Body of the Bot API `sendMessage` call.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OutboundSendRequest {
    pub chat_id: i64,
    pub text: String,
}

#[derive(Clone)]
pub struct TelegramClient {
    client: reqwest::Client,
    base_url: String,
    bot_key: Option<String>,
}

impl Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("base_url", &self.base_url)
            .field("bot_key", &self.bot_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl TelegramClient {
    /// A missing `bot_key` is not an error here; every `send_message` call
    /// fails instead.
    pub fn new(base_url: &str, bot_key: Option<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            bot_key: bot_key.filter(|key| !key.is_empty()),
        })
    }

    pub fn has_bot_key(&self) -> bool {
        self.bot_key.is_some()
    }

    fn build_url(&self, bot_key: &str, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, bot_key, method)
    }

    #[instrument(skip(self, text))]
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        let bot_key = self.bot_key.as_deref().ok_or(ClientError::MissingBotKey)?;

        let request = OutboundSendRequest {
            chat_id,
            text: text.to_owned(),
        };

        let response = self
            .client
            .post(self.build_url(bot_key, "sendMessage"))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ClientError::UnexpectedStatus(status));
        }

        Ok(())
    }
}
