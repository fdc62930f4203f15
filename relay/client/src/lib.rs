//! Outbound HTTP clients used by the relay: the compliment provider and the
//! Telegram Bot API `sendMessage` endpoint.

mod compliment;
mod telegram;

pub use compliment::{ComplimentClient, ComplimentResponse};
pub use telegram::{OutboundSendRequest, TelegramClient};

use reqwest::StatusCode;
use thiserror::Error;

pub const DEFAULT_COMPLIMENT_URL: &str = "https://complimentr.com/api";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("$BOT_KEY must be set")]
    MissingBotKey,
    #[error("request timed out")]
    Timeout(#[source] reqwest::Error),
    #[error("transport error")]
    Transport(#[source] reqwest::Error),
    #[error("could not decode response body")]
    Decode(#[source] reqwest::Error),
    #[error("unexpected status: {0}")]
    UnexpectedStatus(StatusCode),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        // The send-message URL carries the bot key in its path.
        let err = err.without_url();
        if err.is_timeout() {
            ClientError::Timeout(err)
        } else if err.is_decode() {
            ClientError::Decode(err)
        } else {
            ClientError::Transport(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
