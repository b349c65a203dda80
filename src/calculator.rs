//! Fixed-deposit maturity-value computation.
//!
//! Local twin of `POST /api/fd/calculate`: standard compound-interest growth
//! with n periods per year, per-period rate R/(100·n) and T·n total periods.
//! Amounts stay within ordinary currency magnitudes, so `f64` is sufficient
//! and no overflow path exists.

use crate::error::Result;
use crate::models::{CalculationRequest, CalculationResult};

/// Compute interest earned, maturity amount and effective annual rate for
/// the given inputs.
///
/// maturity = P · (1 + R/(100·n))^(T·n)
/// effective rate = ((maturity/P)^(1/T) − 1) · 100
///
/// Inputs below the product minimums (principal ≥ 1000, tenure ≥ 1,
/// rate ≥ 1%) are rejected before any arithmetic.
pub fn calculate(request: &CalculationRequest) -> Result<CalculationResult> {
    request.validate()?;

    let principal = request.principal;
    let years = f64::from(request.tenure);
    let periods_per_year = f64::from(request.compounding_frequency.periods_per_year());

    let per_period_rate = request.interest_rate / (100.0 * periods_per_year);
    let total_periods = years * periods_per_year;

    let maturity_amount = principal * (1.0 + per_period_rate).powf(total_periods);
    let interest_earned = maturity_amount - principal;
    let effective_rate = ((maturity_amount / principal).powf(1.0 / years) - 1.0) * 100.0;

    Ok(CalculationResult {
        principal,
        interest_earned,
        maturity_amount,
        effective_rate,
        tenure: request.tenure,
        compounding_frequency: request.compounding_frequency,
    })
}
