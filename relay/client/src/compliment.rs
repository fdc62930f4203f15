use std::time::Duration;

use reqwest::StatusCode;
use tracing::instrument;

use crate::{ClientError, Result};

#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ComplimentResponse {
    pub compliment: String,
}

#[derive(Debug, Clone)]
pub struct ComplimentClient {
    client: reqwest::Client,
    url: String,
}

impl ComplimentClient {
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.to_owned(),
        })
    }

    /// Fetches a single compliment. Nothing is cached between calls.
    #[instrument(skip_all, fields(url = %self.url))]
    pub async fn fetch(&self) -> Result<ComplimentResponse> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ClientError::UnexpectedStatus(status));
        }

        let compliment: ComplimentResponse = response.json().await?;
        tracing::debug!("Compliment: {}", compliment.compliment);
        Ok(compliment)
    }
}
