mod extractor;
mod memo_rules;
mod message_source;
mod normalizer;
mod resolver;
mod templates;
#[cfg(test)]
mod test_fixtures;
mod transaction;
mod ynab;

pub use extractor::{extract, ExtractorConfig};
pub use memo_rules::{MemoAbbreviations, MEMO_RULES_FILE};
pub use message_source::{collect_eml_files, read_message_text, MessageError};
pub use normalizer::parse_transaction;
pub use resolver::resolve_payee;
pub use templates::template_for;
pub use transaction::{
    format_amount_cents, parse_amount_to_cents, ParseError, Payee, Transaction,
    TransactionDetails,
};
pub use ynab::{import_id, milliunits, LedgerClient, LedgerConfig, LedgerError};
