//! Login, registration and logout.

use crate::config;
use crate::error::Result;
use crate::models::User;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Registration details for a new customer account.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Deserialize)]
struct AuthResponse {
    token: String,
}

// ---------------------------------------------------------------------------
// AuthApi
// ---------------------------------------------------------------------------

/// Authentication interface. Successful login/register establishes the
/// session (token decoded and persisted) before returning.
pub struct AuthApi<'a> {
    conn: &'a crate::connection::Connection,
}

impl<'a> AuthApi<'a> {
    pub fn new(conn: &'a crate::connection::Connection) -> Self {
        Self { conn }
    }

    /// Authenticate with email and password, returning the decoded identity.
    pub fn login(&self, email: &str, password: &str) -> Result<User> {
        let resp: AuthResponse = self
            .conn
            .post(config::LOGIN_PATH, &LoginRequest { email, password })?;
        self.conn.session.borrow_mut().establish(resp.token)
    }

    /// Register a new customer and establish a session from the issued token.
    pub fn register(&self, registration: &Registration) -> Result<User> {
        let resp: AuthResponse = self.conn.post(config::REGISTER_PATH, registration)?;
        self.conn.session.borrow_mut().establish(resp.token)
    }

    /// Clear the session immediately and synchronously (memory and disk).
    pub fn logout(&self) {
        self.conn.session.borrow_mut().clear();
    }
}
