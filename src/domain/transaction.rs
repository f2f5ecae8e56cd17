use super::amount::Amount;
use serde::{Deserialize, Serialize};

/// A single money transfer between two clients, with its compliance issue state.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub mt_id: u64,
    pub amount: Amount,
    pub sender_full_name: String,
    #[serde(default)]
    pub sender_age: Option<u32>,
    #[serde(default)]
    pub beneficiary_full_name: Option<String>,
    #[serde(default)]
    pub beneficiary_age: Option<u32>,
    #[serde(default)]
    pub issue_id: Option<u64>,
    pub issue_solved: bool,
    #[serde(default)]
    pub issue_message: Option<String>,
}

impl Transaction {
    /// Whether `client` takes part in this transaction, as sender or beneficiary.
    pub fn involves(&self, client: &str) -> bool {
        self.sender_full_name == client || self.beneficiary_full_name.as_deref() == Some(client)
    }

    /// An issue is open when one is attached and it has not been solved.
    pub fn has_open_issue(&self) -> bool {
        self.issue_id.is_some() && !self.issue_solved
    }
}
