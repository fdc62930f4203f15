pub mod processor;
pub mod webhook;

pub use processor::Processor;
pub use webhook::app;

/// Subset of a Telegram webhook `Update` the relay needs. Any other fields
/// in the payload are ignored.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct InboundUpdate {
    pub message: InboundMessage,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct InboundMessage {
    /// Empty for stickers, voice notes and captionless media.
    #[serde(default)]
    pub text: String,
    pub chat: Chat,
}

#[derive(serde::Deserialize, Debug, Clone, Copy)]
pub struct Chat {
    pub id: i64,
}
