use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use sha1::{Digest, Sha1};
use thiserror::Error;

use crate::transaction::Transaction;

const DEFAULT_API_URL: &str = "https://api.ynab.com/v1";
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("missing required environment variable {0}")]
    MissingEnv(&'static str),
    #[error("no budget named '{0}' in the remote ledger")]
    UnknownBudget(String),
    #[error("no account named '{account}' in budget '{budget}'")]
    UnknownAccount { account: String, budget: String },
    #[error("ledger API returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("ledger request failed: {0}")]
    Transport(String),
}

/// Everything needed to reach the ledger, read once from the environment.
/// Budget and account are configured by their human-readable names and
/// resolved to ids per invocation.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    pub access_token: String,
    pub budget_name: String,
    pub account_name: String,
    pub api_url: String,
}

fn require_env(name: &'static str) -> Result<String, LedgerError> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(LedgerError::MissingEnv(name))
}

impl LedgerConfig {
    pub fn from_env() -> Result<Self, LedgerError> {
        Ok(LedgerConfig {
            access_token: require_env("YNAB_ACCESS_TOKEN")?,
            budget_name: require_env("YNAB_BUDGET_NAME")?,
            account_name: require_env("YNAB_ACCOUNT_NAME")?,
            api_url: std::env::var("YNAB_API_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }
}

#[derive(Debug, Deserialize)]
struct NamedRef {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct BudgetsData {
    budgets: Vec<NamedRef>,
}

#[derive(Debug, Deserialize)]
struct BudgetsResponse {
    data: BudgetsData,
}

#[derive(Debug, Deserialize)]
struct AccountsData {
    accounts: Vec<NamedRef>,
}

#[derive(Debug, Deserialize)]
struct AccountsResponse {
    data: AccountsData,
}

/// The ledger stores amounts in milliunits: one currency unit is 1000.
pub fn milliunits(amount_cents: i64) -> i64 {
    amount_cents * 10
}

/// Stable id for remote-side dedup; resubmitting the same parsed message
/// must not create a second transaction.
pub fn import_id(transaction: &Transaction) -> String {
    let mut hasher = Sha1::new();
    hasher.update(
        format!(
            "{}|{}|{}",
            transaction.payee.name(),
            transaction.date.format("%Y-%m-%d"),
            transaction.amount_cents
        )
        .as_bytes(),
    );
    let hex = format!("{:x}", hasher.finalize());
    format!("mail:{}", &hex[..24])
}

fn save_transaction_payload(account_id: &str, transaction: &Transaction) -> Value {
    json!({
        "transaction": {
            "account_id": account_id,
            "date": transaction.date.format("%Y-%m-%d").to_string(),
            "amount": milliunits(transaction.amount_cents),
            "payee_name": transaction.payee.name(),
            "memo": transaction.memo,
            "import_id": import_id(transaction),
        }
    })
}

pub struct LedgerClient {
    agent: ureq::Agent,
    config: LedgerConfig,
}

impl LedgerClient {
    pub fn new(config: LedgerConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .timeout_read(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .timeout_write(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build();
        LedgerClient { agent, config }
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, LedgerError> {
        let url = format!("{}{}", self.config.api_url, path);
        let response = self
            .agent
            .get(&url)
            .set("authorization", &format!("Bearer {}", self.config.access_token))
            .call();
        match response {
            Ok(resp) => resp
                .into_json::<T>()
                .map_err(|e| LedgerError::Transport(e.to_string())),
            Err(ureq::Error::Status(status, resp)) => Err(LedgerError::Api {
                status,
                body: resp.into_string().unwrap_or_default(),
            }),
            Err(err) => Err(LedgerError::Transport(err.to_string())),
        }
    }

    fn budget_id(&self) -> Result<String, LedgerError> {
        let response: BudgetsResponse = self.get_json("/budgets")?;
        response
            .data
            .budgets
            .into_iter()
            .find(|b| b.name == self.config.budget_name)
            .map(|b| b.id)
            .ok_or_else(|| LedgerError::UnknownBudget(self.config.budget_name.clone()))
    }

    fn account_id(&self, budget_id: &str) -> Result<String, LedgerError> {
        let response: AccountsResponse =
            self.get_json(&format!("/budgets/{budget_id}/accounts"))?;
        response
            .data
            .accounts
            .into_iter()
            .find(|a| a.name == self.config.account_name)
            .map(|a| a.id)
            .ok_or_else(|| LedgerError::UnknownAccount {
                account: self.config.account_name.clone(),
                budget: self.config.budget_name.clone(),
            })
    }

    /// Creates the transaction in the configured budget and account.
    pub fn save_transaction(&self, transaction: &Transaction) -> Result<(), LedgerError> {
        let budget_id = self.budget_id()?;
        let account_id = self.account_id(&budget_id)?;
        let url = format!(
            "{}/budgets/{budget_id}/transactions",
            self.config.api_url
        );
        let response = self
            .agent
            .post(&url)
            .set("authorization", &format!("Bearer {}", self.config.access_token))
            .send_json(save_transaction_payload(&account_id, transaction));
        match response {
            Ok(_) => Ok(()),
            Err(ureq::Error::Status(status, resp)) => Err(LedgerError::Api {
                status,
                body: resp.into_string().unwrap_or_default(),
            }),
            Err(err) => Err(LedgerError::Transport(err.to_string())),
        }
    }
}
