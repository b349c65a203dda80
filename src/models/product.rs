use crate::error::{BankSdkError, Result};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

/// A banking product (fixed deposit scheme, recurring deposit, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub interest_rate: f64,
    pub min_amount: f64,
    pub max_amount: f64,
    /// Tenure in years.
    pub tenure: u32,
    pub category: String,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

// ---------------------------------------------------------------------------
// ProductInput
// ---------------------------------------------------------------------------

/// Create/update body for a product. Validated client-side before any
/// request is issued; the backend is still the final authority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub interest_rate: f64,
    pub min_amount: f64,
    pub max_amount: f64,
    pub tenure: u32,
    pub category: String,
    pub is_active: bool,
}

impl ProductInput {
    /// Check the submit preconditions, including `min_amount < max_amount`.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().len() < 2 {
            return Err(invalid("product name must be at least 2 characters"));
        }
        if self.description.trim().len() < 10 {
            return Err(invalid("description must be at least 10 characters"));
        }
        if self.interest_rate < 0.1 {
            return Err(invalid("interest rate must be at least 0.1%"));
        }
        if self.min_amount < 1000.0 {
            return Err(invalid("minimum amount must be at least ₹1,000"));
        }
        if self.max_amount < 1000.0 {
            return Err(invalid("maximum amount must be at least ₹1,000"));
        }
        if self.min_amount >= self.max_amount {
            return Err(invalid(
                "maximum amount must be greater than minimum amount",
            ));
        }
        if self.tenure < 1 {
            return Err(invalid("tenure must be at least 1 year"));
        }
        if self.category.trim().is_empty() {
            return Err(invalid("category must not be empty"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> BankSdkError {
    BankSdkError::InvalidArgument(message.to_string())
}
