use chrono::NaiveDate;
use regex::Regex;

use crate::transaction::{parse_amount_to_cents, ParseError, TransactionDetails};

/// Extraction patterns for one payee's message layout.
///
/// Year, month and day are three independent single-capture patterns rather
/// than one composite, because templates place the date digits with varying
/// adjacency (dot-separated reversed dates, slashed timestamps, ISO stamps).
/// The amount pattern anchors on a template-specific label and captures the
/// first dot-separated two-decimal literal after it. The memo pattern is
/// optional best-effort enrichment.
pub struct ExtractorConfig {
    pub year: Regex,
    pub month: Regex,
    pub day: Regex,
    pub amount: Regex,
    pub memo: Option<Regex>,
}

pub(crate) fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Reads date, amount and optional memo from decoded message text.
///
/// A sub-pattern that fails to match leaves an empty date component, so the
/// composed `YYYY-MM-DD` string fails calendar validation and the error
/// carries the attempted composite for diagnosis. Nothing is defaulted.
pub fn extract(
    message_text: &str,
    config: &ExtractorConfig,
) -> Result<TransactionDetails, ParseError> {
    let year = first_capture(&config.year, message_text).unwrap_or_default();
    let month = first_capture(&config.month, message_text).unwrap_or_default();
    let day = first_capture(&config.day, message_text).unwrap_or_default();
    let composed = format!("{year}-{month}-{day}");
    let date = NaiveDate::parse_from_str(&composed, "%Y-%m-%d")
        .map_err(|_| ParseError::DateParse {
            composed: composed.clone(),
        })?;

    let raw_amount = first_capture(&config.amount, message_text).unwrap_or_default();
    let amount_cents = parse_amount_to_cents(&raw_amount).ok_or_else(|| {
        ParseError::AmountParse {
            raw: raw_amount.clone(),
        }
    })?;

    let memo = config
        .memo
        .as_ref()
        .and_then(|re| first_capture(re, message_text))
        .map(|m| m.trim().to_string());

    Ok(TransactionDetails {
        date,
        amount_cents,
        memo,
    })
}
