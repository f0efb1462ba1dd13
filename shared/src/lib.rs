use serde::{Deserialize, Serialize};
use std::fmt;

pub mod dates;
pub mod error;
pub mod filters;
pub mod format;
pub mod resource;
pub mod revenue;

pub use error::{ApiError, ApiErrorKind, UNKNOWN_ERROR_MESSAGE};
pub use filters::{apply_filters, DateRange, QuickFilter, TransactionFilters};
pub use resource::{RequestTicket, ResourcePhase, ResourceState};
pub use revenue::{aggregate_revenue, ChartPoint, RevenueSeries};

/// Profile of the signed-in merchant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    /// Avatar initials, e.g. "JD" for John Doe
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|name| name.trim().chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// Wallet balances as reported by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub balance: f64,
    pub total_payout: f64,
    pub total_revenue: f64,
    pub pending_payout: f64,
    pub ledger_balance: f64,
}

/// Direction of money movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Deposit, TransactionType::Withdrawal];

    /// Name used on the wire and in filter sets
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Withdrawal => "withdrawal",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settlement state of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Successful,
    Pending,
    Failed,
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 3] = [
        TransactionStatus::Successful,
        TransactionStatus::Pending,
        TransactionStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Successful => "successful",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Customer and product details attached to store transactions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionMetadata {
    #[serde(default)]
    pub name: String,
    /// Free-form category such as "digital_product" or "coffee"
    #[serde(rename = "type", default)]
    pub metadata_type: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
}

/// A single wallet transaction, immutable once fetched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TransactionMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_reference: Option<String>,
    pub status: TransactionStatus,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// ISO-8601 timestamp or calendar date, exactly as the API sent it
    pub date: String,
}

impl Transaction {
    /// Type used for filtering: the metadata category when metadata carries a
    /// non-empty one, otherwise the top-level deposit/withdrawal type.
    pub fn effective_type(&self) -> &str {
        match &self.metadata {
            Some(metadata) if !metadata.metadata_type.is_empty() => metadata.metadata_type.as_str(),
            _ => self.transaction_type.as_str(),
        }
    }

    pub fn is_successful_deposit(&self) -> bool {
        self.status == TransactionStatus::Successful
            && self.transaction_type == TransactionType::Deposit
    }

    /// Row heading for the transaction list
    pub fn title(&self) -> String {
        if let Some(product_name) = self.metadata.as_ref().and_then(|m| m.product_name.as_ref()) {
            return product_name.clone();
        }
        match self.transaction_type {
            TransactionType::Withdrawal => "Cash withdrawal".to_string(),
            TransactionType::Deposit => "Payment received".to_string(),
        }
    }

    /// Customer name when known; `None` means the status badge is shown instead
    pub fn customer_name(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .map(|m| m.name.as_str())
            .filter(|name| !name.is_empty())
    }
}
