//! Fixed-deposit calculation, server-side or local.

use crate::calculator;
use crate::config;
use crate::error::Result;
use crate::models::{CalculationRequest, CalculationResult};

/// Interface to the FD calculator.
///
/// [`calculate`](Self::calculate) goes through the backend;
/// [`calculate_offline`](Self::calculate_offline) runs the same contract
/// locally with no network. The two are intentionally separate so a caller
/// always knows which implementation produced a figure.
pub struct FdQuery<'a> {
    conn: &'a crate::connection::Connection,
}

impl<'a> FdQuery<'a> {
    pub fn new(conn: &'a crate::connection::Connection) -> Self {
        Self { conn }
    }

    /// Submit the calculation to the backend. Inputs below the product
    /// minimums are rejected before submission.
    pub fn calculate(&self, request: &CalculationRequest) -> Result<CalculationResult> {
        request.validate()?;
        self.conn.post(config::FD_CALCULATE_PATH, request)
    }

    /// Run the calculation locally, without touching the network.
    pub fn calculate_offline(&self, request: &CalculationRequest) -> Result<CalculationResult> {
        calculator::calculate(request)
    }
}
