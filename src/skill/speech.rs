use crate::models::{CoinQuote, SkillError};

/// Reads a decimal price the way a person would say it: "345.12345" becomes
/// "345 dollars and 12.345 cents". Needs a `.` followed by at least two digits.
pub fn format_usd_amount(usd: &str) -> Result<String, SkillError> {
    let malformed = || SkillError::MalformedQuoteData(format!("unexpected USD amount {usd:?}"));

    let (dollars, fraction) = usd.split_once('.').ok_or_else(malformed)?;
    let cents = fraction.get(..2).ok_or_else(malformed)?;
    let rest = fraction.get(2..).ok_or_else(malformed)?;

    Ok(format!("{dollars} dollars and {cents}.{rest} cents"))
}

pub fn quote_speech(quote: &CoinQuote) -> Result<String, SkillError> {
    let value = format_usd_amount(&quote.price_usd)?;
    Ok(format!(
        "Here is the current information for {}. \
         The current value is {}. \
         The percent change in the past one hour is {} percent. \
         The percent change in the past 24 hours is {} percent. \
         The percent change in the past 7 days is {} percent. ",
        quote.name,
        value,
        quote.percent_change_1h,
        quote.percent_change_24h,
        quote.percent_change_7d
    ))
}
