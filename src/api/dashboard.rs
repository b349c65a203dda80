//! Dashboard aggregates.

use crate::config;
use crate::error::Result;
use crate::models::DashboardStats;

pub struct DashboardQuery<'a> {
    conn: &'a crate::connection::Connection,
}

impl<'a> DashboardQuery<'a> {
    pub fn new(conn: &'a crate::connection::Connection) -> Self {
        Self { conn }
    }

    /// Fetch the aggregate figures for the current session.
    pub fn stats(&self) -> Result<DashboardStats> {
        self.conn.require_session()?;
        self.conn.get(config::DASHBOARD_STATS_PATH)
    }
}
