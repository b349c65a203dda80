use crate::error::{BankSdkError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// CompoundingFrequency
// ---------------------------------------------------------------------------

/// How often interest is added to principal before the next accrual period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompoundingFrequency {
    Monthly,
    Quarterly,
    Yearly,
}

impl CompoundingFrequency {
    pub fn periods_per_year(self) -> u32 {
        match self {
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Yearly => 1,
        }
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompoundingFrequency::Monthly => "monthly",
            CompoundingFrequency::Quarterly => "quarterly",
            CompoundingFrequency::Yearly => "yearly",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// CalculationRequest
// ---------------------------------------------------------------------------

/// Inputs for a fixed-deposit maturity calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    /// Principal amount in rupees.
    pub principal: f64,
    /// Tenure in whole years.
    pub tenure: u32,
    /// Nominal annual rate, percent.
    pub interest_rate: f64,
    pub compounding_frequency: CompoundingFrequency,
}

impl CalculationRequest {
    /// Reject inputs below the product minimums before submission.
    pub fn validate(&self) -> Result<()> {
        if self.principal < 1000.0 {
            return Err(BankSdkError::InvalidArgument(
                "minimum principal is ₹1,000".to_string(),
            ));
        }
        if self.tenure < 1 {
            return Err(BankSdkError::InvalidArgument(
                "minimum tenure is 1 year".to_string(),
            ));
        }
        if self.interest_rate < 1.0 {
            return Err(BankSdkError::InvalidArgument(
                "interest rate must be at least 1%".to_string(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// CalculationResult
// ---------------------------------------------------------------------------

/// Result of a maturity calculation. Ephemeral, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub principal: f64,
    pub interest_earned: f64,
    pub maturity_amount: f64,
    /// Annualized rate implied by the maturity amount, percent.
    pub effective_rate: f64,
    pub tenure: u32,
    pub compounding_frequency: CompoundingFrequency,
}
