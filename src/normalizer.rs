use crate::extractor::extract;
use crate::memo_rules::MemoAbbreviations;
use crate::resolver::resolve_payee;
use crate::templates::template_for;
use crate::transaction::{ParseError, Transaction};

/// Turns one decoded message text into a ledger-ready transaction:
/// resolve the payee, extract fields with that payee's template, then
/// shorten the memo through the abbreviation table. Any failure is terminal
/// for the invocation; there is no partial result.
pub fn parse_transaction(
    message_text: &str,
    memos: &MemoAbbreviations,
) -> Result<Transaction, ParseError> {
    let payee = resolve_payee(message_text)?;
    let details = extract(message_text, template_for(payee))?;

    Ok(Transaction {
        payee,
        date: details.date,
        amount_cents: details.amount_cents,
        memo: details.memo.map(|memo| memos.abbreviate(memo)),
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::test_fixtures::{BOLT_FOOD_RECEIPT, UPC_RECEIPT, WOLT_RECEIPT};
    use crate::transaction::Payee;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn parses_receipt_end_to_end() {
        let transaction = parse_transaction(BOLT_FOOD_RECEIPT, &MemoAbbreviations::builtin())
            .expect("transaction");
        assert_eq!(
            transaction,
            Transaction {
                payee: Payee::BoltFood,
                date: date(2022, 6, 17),
                amount_cents: 3500,
                memo: Some("United India".to_string()),
            }
        );
    }

    #[test]
    fn abbreviates_known_verbose_memo() {
        let text = BOLT_FOOD_RECEIPT.replace("United India", "Salad Story - Al. KEN");
        let transaction =
            parse_transaction(&text, &MemoAbbreviations::builtin()).expect("transaction");
        assert_eq!(transaction.memo.as_deref(), Some("Salad Story"));
    }

    #[test]
    fn keeps_memo_without_table_entry() {
        let transaction =
            parse_transaction(WOLT_RECEIPT, &MemoAbbreviations::builtin()).expect("transaction");
        assert_eq!(
            transaction.memo.as_deref(),
            Some("Bajgle i Bąble Breakfast & Coffee bar")
        );
    }

    #[test]
    fn memoless_template_yields_no_memo() {
        let transaction =
            parse_transaction(UPC_RECEIPT, &MemoAbbreviations::builtin()).expect("transaction");
        assert_eq!(transaction.payee, Payee::Upc);
        assert_eq!(transaction.memo, None);
    }

    #[test]
    fn comma_decimal_amount_is_a_terminal_failure() {
        let text = BOLT_FOOD_RECEIPT.replace("35.00 ZŁ", "35,00 ZŁ");
        let err = parse_transaction(&text, &MemoAbbreviations::builtin())
            .expect_err("amount failure");
        assert!(matches!(err, ParseError::AmountParse { .. }));
    }

    #[test]
    fn unresolved_payee_is_a_terminal_failure() {
        let err = parse_transaction("Subject: weekly newsletter\n", &MemoAbbreviations::builtin())
            .expect_err("resolution failure");
        assert!(matches!(err, ParseError::UnresolvedPayee { .. }));
    }
}
