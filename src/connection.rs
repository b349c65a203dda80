//! HTTP transport wrapper over the gateway REST API.
//!
//! Owns the lazily built `reqwest` client and the [`SessionStore`]. Every
//! request attaches the bearer token when a session exists; non-2xx
//! responses are turned into typed errors using the backend's JSON error
//! body (`{"message": ...}`) when one is present.

use crate::error::{BankSdkError, Result};
use crate::models::User;
use crate::session::SessionStore;
use log::debug;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::time::Duration;

/// Shape of the backend's error body.
#[derive(serde::Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Wraps the HTTP client and session state shared by the endpoint interfaces.
pub struct Connection {
    base_url: String,
    timeout: Duration,
    client: RefCell<Option<Client>>,
    /// The session store. Exposed so callers can inspect identity state.
    pub session: RefCell<SessionStore>,
}

impl Connection {
    pub fn new(base_url: String, timeout: Duration, session: SessionStore) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            client: RefCell::new(None),
            session: RefCell::new(session),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lazy HTTP client, created on first use. `Client` clones share the
    /// underlying pool.
    fn client(&self) -> Result<Client> {
        let mut slot = self.client.borrow_mut();
        if slot.is_none() {
            let client = Client::builder()
                .timeout(self.timeout)
                .gzip(true)
                .build()?;
            *slot = Some(client);
        }
        Ok(slot.as_ref().cloned().unwrap_or_default())
    }

    // -- Request helpers ---------------------------------------------------

    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self.send(self.client()?.get(self.url(path)), "GET", path)?;
        Ok(resp.json()?)
    }

    pub fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let resp = self.send(self.client()?.post(self.url(path)).json(body), "POST", path)?;
        Ok(resp.json()?)
    }

    pub fn put<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let resp = self.send(self.client()?.put(self.url(path)).json(body), "PUT", path)?;
        Ok(resp.json()?)
    }

    pub fn delete(&self, path: &str) -> Result<()> {
        self.send(self.client()?.delete(self.url(path)), "DELETE", path)?;
        Ok(())
    }

    // -- Session guards ----------------------------------------------------

    /// Return the current user, or `Unauthorized` if no session exists.
    pub fn require_session(&self) -> Result<User> {
        self.session
            .borrow()
            .user()
            .cloned()
            .ok_or_else(|| BankSdkError::Unauthorized("no active session".to_string()))
    }

    /// Require a staff (BANK_OFFICER or ADMIN) session for the named action.
    pub fn require_staff(&self, action: &str) -> Result<User> {
        let user = self.require_session()?;
        if user.role.is_staff() {
            Ok(user)
        } else {
            Err(BankSdkError::Forbidden(format!(
                "{} requires a staff role, session role is {}",
                action, user.role
            )))
        }
    }

    // -- Internals ---------------------------------------------------------

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token if present, send, and map non-2xx statuses.
    fn send(&self, mut req: RequestBuilder, method: &str, path: &str) -> Result<Response> {
        if let Some(token) = self.session.borrow().token() {
            req = req.bearer_auth(token);
        }
        debug!("{} {}{}", method, self.base_url, path);

        let resp = req.send()?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let message = resp
            .text()
            .ok()
            .and_then(|body| serde_json::from_str::<ApiErrorBody>(&body).ok())
            .map(|e| e.message)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });

        Err(BankSdkError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
