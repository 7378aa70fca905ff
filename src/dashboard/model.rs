use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

/// Payee shown in the recipients strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub name: String,
    /// Avatar URL; empty when the recipient has no picture.
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub is_online: bool,
}

/// One row of the transaction history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Display title such as "Restaurant" or "Transfer".
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    /// Positive for income, negative for spending.
    pub amount: f64,
    /// Icon name, see [`TransactionIcon`](super::TransactionIcon).
    pub icon: String,
}

/// Decoded dashboard asset. Read once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankData {
    pub balance: f64,
    pub recipients: Vec<Recipient>,
    pub transactions: Vec<Transaction>,
}

impl BankData {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let data: Self = serde_json::from_str(input)?;
        data.validate()?;
        debug!(
            recipients = data.recipients.len(),
            transactions = data.transactions.len(),
            "dashboard data decoded"
        );
        Ok(data)
    }

    pub fn from_json_path(path: &Path) -> ChartResult<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.balance.is_finite() {
            return Err(ChartError::InvalidData(
                "balance must be finite".to_owned(),
            ));
        }
        if let Some(position) = self
            .transactions
            .iter()
            .position(|transaction| !transaction.amount.is_finite())
        {
            return Err(ChartError::InvalidData(format!(
                "transaction {position} amount must be finite"
            )));
        }
        Ok(())
    }
}
