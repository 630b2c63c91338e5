use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TICKER_BASE_URL: &str = "https://api.coinmarketcap.com/v1";
const DEFAULT_TICKER_TIMEOUT_SECS: u64 = 10;
const DEFAULT_CARD_TITLE: &str = "CoinCheck";
const DEFAULT_LOG_LEVEL: &str = "coin_check=debug,tower_http=debug";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub ticker_base_url: String,
    pub ticker_timeout: Duration,
    pub card_title: String,
    pub log_level: String,
    pub phrases: Phrases,
}

/// Everything the skill says out loud.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Phrases {
    pub welcome: String,
    pub welcome_reprompt: String,
    pub help: String,
    pub goodbye: String,
    pub which_coin: String,
    pub apology: String,
}

impl Default for Phrases {
    fn default() -> Self {
        Self {
            welcome: "I am Coin Check. Which coin do you want information for?".to_string(),
            welcome_reprompt: "With Coin Check, you can get data for any cryptocurrency supported by CoinMarketCap.com.  For example, you could say Bitcoin, or Ethereum.. Now, which coin do you want, player?".to_string(),
            help: "You can ask Coin Check to check on a coin for you. Which coin do you want?"
                .to_string(),
            goodbye: "Stay thirsty, my friends.".to_string(),
            which_coin: "Which coin do you want information for?".to_string(),
            apology: "There was an error of some sort. I'm sorry I wasted your time. I'm just a machine."
                .to_string(),
        }
    }
}

impl Phrases {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("invalid phrases document")
    }
}

impl Config {
    /// Reads `.env` (when present) and then the process environment.
    pub fn init() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let ticker_timeout = match var("TICKER_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("TICKER_TIMEOUT_SECS is not a number: {raw}"))?,
            None => DEFAULT_TICKER_TIMEOUT_SECS,
        };

        let phrases = match var("PHRASES_FILE") {
            Some(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("unable to read phrases file {path}"))?;
                Phrases::from_json(&raw)?
            }
            None => Phrases::default(),
        };

        Ok(Self {
            bind_addr: var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            ticker_base_url: var("TICKER_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_TICKER_BASE_URL.to_string()),
            ticker_timeout: Duration::from_secs(ticker_timeout),
            card_title: var("CARD_TITLE").unwrap_or_else(|| DEFAULT_CARD_TITLE.to_string()),
            log_level: var("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            phrases,
        })
    }
}
