//! Async wrapper around [`FdBankSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//! Requests are short-lived and serialized through the wrapped SDK, so one
//! outstanding call at a time is the intended shape.
//!
//! # Example
//!
//! ```no_run
//! # use fdbank_sdk::AsyncFdBankSdk;
//! # async fn example() -> fdbank_sdk::Result<()> {
//! let sdk = AsyncFdBankSdk::builder().build().await?;
//!
//! let user = sdk.run(|s| s.auth().login("jane@example.com", "secret")).await?;
//!
//! let products = sdk.run(|s| s.products().list()).await?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{BankSdkError, Result};
use crate::models::{DashboardStats, User};
use crate::FdBankSdk;

// ---------------------------------------------------------------------------
// AsyncFdBankSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncFdBankSdk`] instance.
pub struct AsyncFdBankSdkBuilder {
    base_url: Option<String>,
    timeout: Duration,
    session_file: Option<PathBuf>,
}

impl Default for AsyncFdBankSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            session_file: None,
        }
    }
}

impl AsyncFdBankSdkBuilder {
    /// Set the gateway base URL.
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom session-token file.
    pub fn session_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.session_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Build the async SDK, restoring any persisted session.
    ///
    /// Initialization runs on the blocking thread pool so it won't block
    /// the async event loop.
    pub async fn build(self) -> Result<AsyncFdBankSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = FdBankSdk::builder().timeout(self.timeout);
            if let Some(url) = self.base_url {
                builder = builder.base_url(url);
            }
            if let Some(file) = self.session_file {
                builder = builder.session_file(file);
            }
            let sdk = builder.build()?;
            Ok(AsyncFdBankSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| BankSdkError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncFdBankSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`FdBankSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`FdBankSdk`] is
/// protected by a [`Mutex`] since it uses `RefCell` internally.
pub struct AsyncFdBankSdk {
    inner: Arc<Mutex<FdBankSdk>>,
}

impl AsyncFdBankSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncFdBankSdkBuilder {
        AsyncFdBankSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives an `&FdBankSdk` reference and should return a
    /// `Result<T>`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use fdbank_sdk::AsyncFdBankSdk;
    /// # async fn example() -> fdbank_sdk::Result<()> {
    /// # let sdk = AsyncFdBankSdk::builder().build().await?;
    /// let accounts = sdk.run(|s| s.accounts().list()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&FdBankSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| BankSdkError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| BankSdkError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Fetch the dashboard aggregates asynchronously.
    pub async fn stats(&self) -> Result<DashboardStats> {
        self.run(|s| s.dashboard().stats()).await
    }

    /// The identity of the current session, if any.
    pub async fn current_user(&self) -> Result<Option<User>> {
        self.run(|s| Ok(s.current_user())).await
    }

    /// Clear the session immediately.
    pub async fn logout(&self) -> Result<()> {
        self.run(|s| {
            s.logout();
            Ok(())
        })
        .await
    }
}
