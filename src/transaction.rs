use std::fmt;

use chrono::NaiveDate;
use serde_json::{json, Value};
use thiserror::Error;

/// Closed set of senders receipts are accepted from. Resolution either
/// produces one of these or fails; there is no unknown-payee value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Payee {
    BoltFood,
    Wolt,
    UberEats,
    Uber,
    Upc,
}

impl Payee {
    /// Display name as it appears in the sender header and in the ledger.
    pub fn name(&self) -> &'static str {
        match self {
            Payee::BoltFood => "Bolt Food",
            Payee::Wolt => "Wolt",
            Payee::UberEats => "Uber Eats",
            Payee::Uber => "Uber",
            Payee::Upc => "UPC",
        }
    }
}

impl fmt::Display for Payee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fields read from a single message before the payee is attached.
/// Amounts are integer cents; receipts are never negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDetails {
    pub date: NaiveDate,
    pub amount_cents: i64,
    pub memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub payee: Payee,
    pub date: NaiveDate,
    pub amount_cents: i64,
    pub memo: Option<String>,
}

impl Transaction {
    pub fn to_json(&self) -> Value {
        json!({
            "date": self.date.format("%Y-%m-%d").to_string(),
            "amount": format_amount_cents(self.amount_cents),
            "payee": self.payee.name(),
            "memo": self.memo,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no payee rule matched sender '{sender}' or subject '{subject}'")]
    UnresolvedPayee { sender: String, subject: String },
    #[error("cannot parse date string '{composed}'")]
    DateParse { composed: String },
    #[error("cannot parse amount string '{raw}'")]
    AmountParse { raw: String },
}

/// Parses a captured amount literal (dot separator, exactly two decimal
/// digits, optional digit-group spaces) into cents. Signs and comma
/// decimals are rejected.
pub fn parse_amount_to_cents(raw: &str) -> Option<i64> {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let (int_part, frac_part) = cleaned.split_once('.')?;
    if int_part.is_empty() || frac_part.len() != 2 {
        return None;
    }
    if !int_part.chars().all(|c| c.is_ascii_digit())
        || !frac_part.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }
    let int_val = int_part.parse::<i64>().ok()?;
    let frac_val = frac_part.parse::<i64>().ok()?;
    int_val.checked_mul(100)?.checked_add(frac_val)
}

pub fn format_amount_cents(cents: i64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}
