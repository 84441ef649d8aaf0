use std::collections::HashMap;
use std::path::Path;

/// File looked up under the optional rules directory. Columns: memo,abbreviation.
pub const MEMO_RULES_FILE: &str = "memo_abbreviations.csv";

/// Verbose venue names that should be shortened for ledger display.
const BUILTIN_ABBREVIATIONS: [(&str, &str); 1] = [("Salad Story - Al. KEN", "Salad Story")];

/// Exact-match memo substitution table. Not a rule engine: lookups that miss
/// pass the extracted memo through unchanged.
#[derive(Debug, Clone)]
pub struct MemoAbbreviations {
    map: HashMap<String, String>,
}

impl MemoAbbreviations {
    pub fn builtin() -> Self {
        MemoAbbreviations {
            map: BUILTIN_ABBREVIATIONS
                .into_iter()
                .map(|(memo, short)| (memo.to_string(), short.to_string()))
                .collect(),
        }
    }

    /// Built-in table extended by `memo_abbreviations.csv` from the rules
    /// directory when present. A missing or unreadable file leaves the
    /// built-ins as-is.
    pub fn load(rules_dir: &Path) -> Self {
        let mut table = Self::builtin();
        let Ok(mut rdr) = csv::Reader::from_path(rules_dir.join(MEMO_RULES_FILE)) else {
            return table;
        };
        for row in rdr.deserialize::<HashMap<String, String>>().flatten() {
            let memo = row
                .get("memo")
                .map(|s| s.trim().to_string())
                .unwrap_or_default();
            let short = row
                .get("abbreviation")
                .map(|s| s.trim().to_string())
                .unwrap_or_default();
            if memo.is_empty() || short.is_empty() {
                continue;
            }
            table.map.insert(memo, short);
        }
        table
    }

    pub fn abbreviate(&self, memo: String) -> String {
        match self.map.get(&memo) {
            Some(short) => short.clone(),
            None => memo,
        }
    }
}
