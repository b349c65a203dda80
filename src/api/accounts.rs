//! Account queries. Accounts are read-only on this side of the API.

use crate::config;
use crate::error::Result;
use crate::models::{Account, Transaction};

/// Query interface for deposit accounts and their transaction history.
pub struct AccountQuery<'a> {
    conn: &'a crate::connection::Connection,
}

impl<'a> AccountQuery<'a> {
    pub fn new(conn: &'a crate::connection::Connection) -> Self {
        Self { conn }
    }

    /// List the accounts visible to the current session: staff roles see
    /// every account, customers see their own.
    pub fn list(&self) -> Result<Vec<Account>> {
        let user = self.conn.require_session()?;
        if user.role.can_view_all_accounts() {
            self.conn.get(config::ACCOUNTS_PATH)
        } else {
            self.conn.get(config::MY_ACCOUNTS_PATH)
        }
    }

    /// List every account. Staff only.
    pub fn list_all(&self) -> Result<Vec<Account>> {
        self.conn.require_staff("listing all accounts")?;
        self.conn.get(config::ACCOUNTS_PATH)
    }

    /// List the current user's own accounts.
    pub fn my(&self) -> Result<Vec<Account>> {
        self.conn.require_session()?;
        self.conn.get(config::MY_ACCOUNTS_PATH)
    }

    /// Fetch a single account by id.
    pub fn get(&self, id: &str) -> Result<Account> {
        self.conn.get(&config::account_path(id))
    }

    /// Fetch the transaction history for an account.
    pub fn transactions(&self, id: &str) -> Result<Vec<Transaction>> {
        self.conn.get(&config::account_transactions_path(id))
    }
}
