use serde::{Deserialize, Serialize};

/// The coin a user asked about, shaped for the ticker's URL path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinQuery {
    pub coin_identifier: String,
}

impl CoinQuery {
    /// "bitcoin cash" becomes "bitcoin-cash". Case is left alone.
    pub fn from_slot(value: &str) -> Self {
        Self {
            coin_identifier: value.trim().replace(' ', "-"),
        }
    }
}

/// One ticker entry. The numbers stay as the decimal strings the API sends,
/// they are only ever read back out loud.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CoinQuote {
    pub name: String,
    pub price_usd: String,
    pub percent_change_1h: String,
    pub percent_change_24h: String,
    pub percent_change_7d: String,
}
