use std::sync::OnceLock;

use regex::Regex;

use crate::extractor::first_capture;
use crate::transaction::{ParseError, Payee};

fn sender_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"From: (.*) <").expect("invalid sender regex"))
}

fn subject_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Subject: (.*)").expect("invalid subject regex"))
}

/// Senders that use a dedicated notification address; the display name alone
/// identifies the payee.
const KNOWN_SENDERS: [(&str, Payee); 5] = [
    ("Bolt Food", Payee::BoltFood),
    ("Wolt", Payee::Wolt),
    ("Uber Eats", Payee::UberEats),
    ("Uber", Payee::Uber),
    ("UPC", Payee::Upc),
];

/// Subject fallback rules, evaluated top to bottom, first match wins.
/// Ordering invariant: a product line must precede the base brand whose name
/// it contains — every "Uber Eats" subject also contains "Uber".
const SUBJECT_RULES: [(&str, Payee); 5] = [
    ("Uber Eats", Payee::UberEats),
    ("Uber", Payee::Uber),
    ("Bolt Food", Payee::BoltFood),
    ("Wolt", Payee::Wolt),
    ("UPC", Payee::Upc),
];

/// Identifies which known payee produced a forwarded message, from the
/// `From:` display name first and the `Subject:` line second. No match is a
/// hard failure; a transaction is never attributed to a guessed payee.
pub fn resolve_payee(message_text: &str) -> Result<Payee, ParseError> {
    let sender = first_capture(sender_re(), message_text)
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    if let Some((_, payee)) = KNOWN_SENDERS.iter().find(|(name, _)| *name == sender) {
        return Ok(*payee);
    }

    let subject = first_capture(subject_re(), message_text)
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    for (needle, payee) in SUBJECT_RULES {
        if subject.contains(needle) {
            return Ok(payee);
        }
    }

    Err(ParseError::UnresolvedPayee { sender, subject })
}
