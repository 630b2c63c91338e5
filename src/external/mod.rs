use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::models::{CoinQuery, CoinQuote, SkillError};

/// Client for the public ticker endpoint (`{base}/ticker/{coin}`).
pub struct TickerClient {
    client: Client,
    base_url: String,
}

impl TickerClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SkillError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(TickerClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn ticker_url(&self, query: &CoinQuery) -> String {
        format!("{}/ticker/{}", self.base_url, query.coin_identifier)
    }

    /// One GET, no retry. The body is a JSON array and only its first entry is used.
    pub async fn fetch_quote(&self, query: &CoinQuery) -> Result<CoinQuote, SkillError> {
        let url = self.ticker_url(query);
        debug!("Fetching ticker {url}");

        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_ticker_body(&body)
    }
}

pub fn parse_ticker_body(body: &str) -> Result<CoinQuote, SkillError> {
    let entries: Vec<CoinQuote> = serde_json::from_str(body)
        .map_err(|e| SkillError::MalformedQuoteData(e.to_string()))?;
    entries
        .into_iter()
        .next()
        .ok_or_else(|| SkillError::MalformedQuoteData("ticker returned no entries".to_string()))
}
