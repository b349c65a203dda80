use serde::{Deserialize, Serialize};

/// Aggregate figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_accounts: u64,
    pub total_balance: f64,
    pub active_products: u64,
    pub recent_transactions: u64,
}
