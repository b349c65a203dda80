//! Client SDK for the FD banking platform.
//!
//! Talks to the platform gateway's REST API: authentication, dashboard
//! aggregates, deposit accounts, the product catalogue and the
//! fixed-deposit calculator. The session is a bearer token decoded locally
//! into identity + role, persisted between runs, and attached to every
//! request. List filtering/sorting and the FD maturity math are available
//! as pure local computations as well.
//!
//! # Quick start
//!
//! ```no_run
//! use fdbank_sdk::FdBankSdk;
//!
//! let sdk = FdBankSdk::builder()
//!     .base_url("https://bank.example.com")
//!     .build()
//!     .unwrap();
//!
//! let user = sdk.auth().login("jane@example.com", "secret").unwrap();
//! println!("hello {}", user.full_name());
//!
//! let products = sdk.products().list().unwrap();
//! let accounts = sdk.accounts().list().unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod api;
pub mod calculator;
pub mod config;
pub mod connection;
pub mod currency;
pub mod error;
pub mod listing;
pub mod models;
pub mod session;

#[cfg(feature = "async")]
pub use async_client::AsyncFdBankSdk;
pub use connection::Connection;
pub use error::{BankSdkError, Result};
pub use session::SessionStore;

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// FdBankSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`FdBankSdk`] instance.
///
/// Use [`FdBankSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](FdBankSdkBuilder::build) to create the SDK.
pub struct FdBankSdkBuilder {
    base_url: String,
    timeout: Duration,
    session_file: Option<PathBuf>,
}

impl Default for FdBankSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            session_file: None,
        }
    }
}

impl FdBankSdkBuilder {
    /// Set the gateway base URL. Defaults to the local gateway.
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom session-token file.
    ///
    /// If not set, the platform-appropriate config directory is used
    /// (e.g. `~/.config/fdbank-sdk/session.token` on Linux).
    pub fn session_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.session_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Build the SDK, restoring any persisted session.
    ///
    /// A stored token that no longer decodes is discarded silently; the SDK
    /// then starts unauthenticated, exactly as if no token had been stored.
    /// No network traffic happens here.
    pub fn build(self) -> Result<FdBankSdk> {
        let store = SessionStore::new(self.session_file)?;
        let conn = Connection::new(self.base_url, self.timeout, store);
        Ok(FdBankSdk { conn })
    }
}

// ---------------------------------------------------------------------------
// FdBankSdk
// ---------------------------------------------------------------------------

/// The main entry point for the banking SDK.
///
/// Wraps a [`Connection`] (which owns the HTTP client and the
/// [`SessionStore`]) and exposes the endpoint interfaces as lightweight
/// borrowing wrappers.
///
/// Created via [`FdBankSdk::builder()`].
pub struct FdBankSdk {
    conn: Connection,
}

impl FdBankSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> FdBankSdkBuilder {
        FdBankSdkBuilder::default()
    }

    // -- Endpoint accessors ------------------------------------------------

    /// Access login, registration and logout.
    pub fn auth(&self) -> api::auth::AuthApi<'_> {
        api::auth::AuthApi::new(&self.conn)
    }

    /// Access the account query interface.
    ///
    /// Listing is role-routed: staff sessions see every account, customer
    /// sessions see their own.
    pub fn accounts(&self) -> api::accounts::AccountQuery<'_> {
        api::accounts::AccountQuery::new(&self.conn)
    }

    /// Access the product query interface. Mutations are staff-only.
    pub fn products(&self) -> api::products::ProductQuery<'_> {
        api::products::ProductQuery::new(&self.conn)
    }

    /// Access the fixed-deposit calculator.
    pub fn fd(&self) -> api::fd::FdQuery<'_> {
        api::fd::FdQuery::new(&self.conn)
    }

    /// Access the dashboard aggregates.
    pub fn dashboard(&self) -> api::dashboard::DashboardQuery<'_> {
        api::dashboard::DashboardQuery::new(&self.conn)
    }

    // -- Session state -----------------------------------------------------

    /// The identity of the current session, if any.
    pub fn current_user(&self) -> Option<models::User> {
        self.conn.session.borrow().user().cloned()
    }

    /// Whether a session is currently established.
    pub fn is_authenticated(&self) -> bool {
        self.conn.session.borrow().is_authenticated()
    }

    /// The raw bearer token of the current session, if any.
    pub fn token(&self) -> Option<String> {
        self.conn.session.borrow().token().map(str::to_string)
    }

    /// Clear the session immediately (memory and disk).
    pub fn logout(&self) {
        self.conn.session.borrow_mut().clear();
    }

    // -- Advanced ----------------------------------------------------------

    /// Return a reference to the underlying [`Connection`] for advanced usage.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for FdBankSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.conn.session.borrow();
        match session.user() {
            Some(user) => write!(
                f,
                "FdBankSdk(base_url={}, user={}, role={})",
                self.conn.base_url(),
                user.email,
                user.role
            ),
            None => write!(
                f,
                "FdBankSdk(base_url={}, unauthenticated)",
                self.conn.base_url()
            ),
        }
    }
}
