use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;

use relay::Processor;
use relay_client::{
    ComplimentClient, TelegramClient, DEFAULT_COMPLIMENT_URL, DEFAULT_TELEGRAM_API_URL,
};

#[derive(Parser, Debug)]
#[clap(about = "Replies to every Telegram message with a compliment")]
struct Args {
    #[clap(long, env = "PORT")]
    port: u16,
    #[clap(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,
    #[clap(long, env = "BOT_KEY", hide_env_values = true)]
    bot_key: Option<String>,
    #[clap(long, env = "COMPLIMENT_URL", default_value = DEFAULT_COMPLIMENT_URL)]
    compliment_url: String,
    #[clap(long, env = "TELEGRAM_API_URL", default_value = DEFAULT_TELEGRAM_API_URL)]
    telegram_api_url: String,
    #[clap(long, env = "REQUEST_TIMEOUT_MS", default_value = "2000")]
    request_timeout_ms: u64,
}

impl Args {
    fn timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();
    tracing::info!(
        port = args.port,
        host = %args.host,
        compliment_url = %args.compliment_url,
        telegram_api_url = %args.telegram_api_url,
        request_timeout_ms = args.request_timeout_ms,
        "Starting compliment relay"
    );

    let compliments = ComplimentClient::new(&args.compliment_url, args.timeout())?;
    let telegram = TelegramClient::new(
        &args.telegram_api_url,
        args.bot_key.clone(),
        args.timeout(),
    )?;
    if !telegram.has_bot_key() {
        tracing::warn!("$BOT_KEY is not set, every reply will fail");
    }

    let app = relay::app(Processor::new(compliments, telegram));

    let listener = TcpListener::bind((args.host.as_str(), args.port))
        .await
        .with_context(|| format!("could not bind {}:{}", args.host, args.port))?;

    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Server shutdown");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Error setting Ctrl-C handler: {:?}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Ctrl-C received, shutting down");
}
