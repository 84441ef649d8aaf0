use std::path::{Path, PathBuf};

use anyhow::bail;
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing::{error, info};

use ynab_mail_import::{
    collect_eml_files, parse_transaction, read_message_text, LedgerClient, LedgerConfig,
    MemoAbbreviations, Transaction,
};

const FAILURE_SAMPLE_LIMIT: usize = 20;

#[derive(Parser)]
#[command(
    name = "ynab-mail-import",
    about = "Parses forwarded receipt emails into YNAB transactions",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse messages and print the resulting transactions without submitting.
    Preview {
        /// An .eml file or a directory containing .eml files.
        #[arg(short, long)]
        input: PathBuf,
        /// Directory with optional rule files (memo_abbreviations.csv).
        #[arg(long)]
        rules_dir: Option<PathBuf>,
    },
    /// Parse messages and create the transactions in the configured budget.
    Import {
        /// An .eml file or a directory containing .eml files.
        #[arg(short, long)]
        input: PathBuf,
        /// Directory with optional rule files (memo_abbreviations.csv).
        #[arg(long)]
        rules_dir: Option<PathBuf>,
    },
}

struct BatchOutcome {
    input_files_count: usize,
    transactions: Vec<Transaction>,
    failed_count: usize,
    failures: Vec<Value>,
}

impl BatchOutcome {
    fn summary(&self) -> Value {
        json!({
            "input_files_count": self.input_files_count,
            "parsed_count": self.transactions.len(),
            "failed_count": self.failed_count,
            "failures": self.failures,
        })
    }
}

fn load_memos(rules_dir: Option<&Path>) -> MemoAbbreviations {
    match rules_dir {
        Some(dir) => MemoAbbreviations::load(dir),
        None => MemoAbbreviations::builtin(),
    }
}

/// Parses every message under `input`. Per-file failures never abort the
/// batch; they are collected into the summary. An empty result is an error.
fn parse_batch(input: &Path, memos: &MemoAbbreviations) -> anyhow::Result<BatchOutcome> {
    let files = collect_eml_files(input)?;
    let mut transactions = Vec::new();
    let mut failures = Vec::new();
    let mut failed_count = 0usize;

    for file in &files {
        let result = read_message_text(file)
            .map_err(anyhow::Error::new)
            .and_then(|text| parse_transaction(&text, memos).map_err(anyhow::Error::new));
        match result {
            Ok(transaction) => {
                info!(
                    file = %file.display(),
                    transaction = %transaction.to_json(),
                    "parsed message"
                );
                transactions.push(transaction);
            }
            Err(err) => {
                error!(file = %file.display(), error = %err, "failed to parse message");
                failed_count += 1;
                if failures.len() < FAILURE_SAMPLE_LIMIT {
                    failures.push(json!({
                        "file": file.display().to_string(),
                        "error": err.to_string(),
                    }));
                }
            }
        }
    }

    if transactions.is_empty() {
        bail!(
            "no transactions parsed from {} ({} file(s), {} failed)",
            input.display(),
            files.len(),
            failed_count
        );
    }

    Ok(BatchOutcome {
        input_files_count: files.len(),
        transactions,
        failed_count,
        failures,
    })
}

fn preview(input: &Path, rules_dir: Option<&Path>) -> anyhow::Result<()> {
    let memos = load_memos(rules_dir);
    let outcome = parse_batch(input, &memos)?;

    let mut summary = outcome.summary();
    summary["transactions"] = Value::Array(
        outcome
            .transactions
            .iter()
            .map(Transaction::to_json)
            .collect(),
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn import(input: &Path, rules_dir: Option<&Path>) -> anyhow::Result<()> {
    let memos = load_memos(rules_dir);
    let outcome = parse_batch(input, &memos)?;

    let client = LedgerClient::new(LedgerConfig::from_env()?);
    let mut saved_count = 0usize;
    let mut save_failures = Vec::new();
    for transaction in &outcome.transactions {
        match client.save_transaction(transaction) {
            Ok(()) => {
                info!(transaction = %transaction.to_json(), "saved transaction");
                saved_count += 1;
            }
            Err(err) => {
                error!(
                    transaction = %transaction.to_json(),
                    error = %err,
                    "failed to save transaction"
                );
                if save_failures.len() < FAILURE_SAMPLE_LIMIT {
                    save_failures.push(err.to_string());
                }
            }
        }
    }

    let mut summary = outcome.summary();
    summary["saved_count"] = json!(saved_count);
    summary["save_failures"] = json!(save_failures);
    println!("{}", serde_json::to_string_pretty(&summary)?);

    if saved_count == 0 {
        bail!("no transactions saved to the ledger");
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Preview { input, rules_dir } => preview(&input, rules_dir.as_deref()),
        Commands::Import { input, rules_dir } => import(&input, rules_dir.as_deref()),
    }
}
