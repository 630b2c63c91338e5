pub mod coin;
pub mod dto;
pub mod error;
pub use coin::{CoinQuery, CoinQuote};
pub use error::{Error, SkillError};
