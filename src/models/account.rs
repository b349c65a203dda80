use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// AccountStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Active,
    Matured,
    Closed,
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccountStatus::Active => "ACTIVE",
            AccountStatus::Matured => "MATURED",
            AccountStatus::Closed => "CLOSED",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Account
// ---------------------------------------------------------------------------

/// A deposit account as returned by the account endpoints. Read-only:
/// balances and status are mutated only by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub account_number: String,
    /// e.g. `FIXED_DEPOSIT`, `RECURRING_DEPOSIT`, `SAVINGS`.
    pub account_type: String,
    pub balance: f64,
    pub principal_amount: f64,
    pub interest_rate: f64,
    pub maturity_date: String,
    pub status: AccountStatus,
    pub created_at: String,
    pub product_name: String,
    // Owning customer reference; present on detail and staff views.
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
}

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Interest,
    Maturity,
}

/// A ledger entry on an account, with the running balance after it was
/// applied. Fetched on demand, never mutated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: f64,
    pub description: String,
    pub timestamp: String,
    pub balance: f64,
}
