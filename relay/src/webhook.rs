use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    routing::post,
    Router,
};
use tracing::instrument;

use crate::{InboundUpdate, Processor};

/// Webhook router. Updates are accepted on any path and of any size; an
/// oversized body fails to decode like any other malformed one.
pub fn app(processor: Processor) -> Router {
    Router::new()
        .route("/", post(message_handler))
        .route("/*path", post(message_handler))
        .layer(DefaultBodyLimit::disable())
        .with_state(processor)
}

// Failures are logged only; the webhook caller always gets 200.
#[instrument(skip_all, fields(chat_id, user_text))]
async fn message_handler(State(processor): State<Processor>, body: Bytes) -> StatusCode {
    let span = tracing::Span::current();

    let update: InboundUpdate = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            tracing::error!("could not decode request body: {}", e);
            return StatusCode::OK;
        }
    };

    span.record("chat_id", update.message.chat.id);
    span.record("user_text", update.message.text.as_str());

    match processor.process_update(&update).await {
        Ok(reply_text) => tracing::info!(reply_text = %reply_text, "reply sent"),
        Err(e) => tracing::error!("error in sending reply: {:#}", e),
    }

    StatusCode::OK
}
