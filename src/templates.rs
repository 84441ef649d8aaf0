use std::sync::OnceLock;

use regex::Regex;

use crate::extractor::ExtractorConfig;
use crate::transaction::Payee;

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("invalid template regex")
}

/// Bolt Food receipts prefix the delivery date and the address lines with a
/// U+00AD soft hyphen; the date reads `DD.MM.YYYY`.
fn bolt_food() -> &'static ExtractorConfig {
    static CONFIG: OnceLock<ExtractorConfig> = OnceLock::new();
    CONFIG.get_or_init(|| ExtractorConfig {
        year: re("\u{AD}\\d+\\.\\d+\\.(\\d+)"),
        month: re("\u{AD}\\d+\\.(\\d+)\\."),
        day: re("\u{AD}(\\d+)\\."),
        amount: re(r"Total charged:[\s\S]*?(\d+[\d\s]*\.\d\d)"),
        memo: Some(re("From (.*) \u{AD}")),
    })
}

fn wolt() -> &'static ExtractorConfig {
    static CONFIG: OnceLock<ExtractorConfig> = OnceLock::new();
    CONFIG.get_or_init(|| ExtractorConfig {
        year: re(r"Delivery time \d+\.\d+\.(\d+)"),
        month: re(r"Delivery time \d+\.(\d+)"),
        day: re(r"Delivery time (\d+)\."),
        amount: re(r"Total in PLN[\s\S]*?(\d+[\d\s]*\.\d\d)"),
        memo: Some(re(r"Venue (.*)")),
    })
}

/// Uber ride receipts carry the date only inside the payment timestamp,
/// `DD/MM/YYYY HH:MM`.
fn uber() -> &'static ExtractorConfig {
    static CONFIG: OnceLock<ExtractorConfig> = OnceLock::new();
    CONFIG.get_or_init(|| ExtractorConfig {
        year: re(r"(\d+) \d\d:\d\d"),
        month: re(r"(\d+)/\d+ \d\d:\d\d"),
        day: re(r"(\d+)/\d+/\d+ \d\d:\d\d"),
        amount: re(r"Total PLN (\d+\.\d\d)"),
        memo: None,
    })
}

fn uber_eats() -> &'static ExtractorConfig {
    static CONFIG: OnceLock<ExtractorConfig> = OnceLock::new();
    CONFIG.get_or_init(|| ExtractorConfig {
        year: re(r"(\d+) \d\d:\d\d"),
        month: re(r"(\d+)/\d+ \d\d:\d\d"),
        day: re(r"(\d+)/\d+/\d+ \d\d:\d\d"),
        amount: re(r"Total PLN (\d+\.\d\d)"),
        memo: Some(re(r"Here's your receipt for (.*)\.")),
    })
}

/// UPC payment confirmations (sent via the Blue Media gateway) put the total
/// on the line directly below the label.
fn upc() -> &'static ExtractorConfig {
    static CONFIG: OnceLock<ExtractorConfig> = OnceLock::new();
    CONFIG.get_or_init(|| ExtractorConfig {
        year: re(r"Data transakcji: (\d+)"),
        month: re(r"Data transakcji: \d+-(\d+)"),
        day: re(r"Data transakcji: \d+-\d+-(\d+)"),
        amount: re("Łączna kwota:\r?\n(\\d+\\.\\d\\d)"),
        memo: None,
    })
}

/// Template registry. Keyed by the closed payee enum, so a resolved payee
/// without a template cannot be constructed.
pub fn template_for(payee: Payee) -> &'static ExtractorConfig {
    match payee {
        Payee::BoltFood => bolt_food(),
        Payee::Wolt => wolt(),
        Payee::UberEats => uber_eats(),
        Payee::Uber => uber(),
        Payee::Upc => upc(),
    }
}
