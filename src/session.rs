//! Bearer-token session store with file persistence.
//!
//! A session is established from the token returned by login/register. The
//! token's JWT payload is decoded locally into a [`User`]. No signature
//! verification happens here: the backend is the authority and the client
//! only needs the identity claims. A persisted token is restored on startup; a token that fails
//! to decode is treated exactly like a missing one and the stored copy is
//! removed.

use crate::error::{BankSdkError, Result};
use crate::models::{Role, User};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use log::{debug, warn};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Identity claims carried in the token payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Claims {
    sub: String,
    email: String,
    first_name: String,
    last_name: String,
    role: Role,
}

/// An established session: the raw bearer token plus the identity decoded
/// from it.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Owns the current session and its on-disk copy.
///
/// State machine: unauthenticated → authenticated (via [`establish`]) →
/// unauthenticated (via [`clear`], or a failed decode on restore).
///
/// [`establish`]: SessionStore::establish
/// [`clear`]: SessionStore::clear
pub struct SessionStore {
    session_file: PathBuf,
    current: Option<Session>,
}

impl SessionStore {
    /// Create a store backed by the given file (or the platform default) and
    /// restore any previously persisted token.
    pub fn new(session_file: Option<PathBuf>) -> Result<Self> {
        let file = session_file.unwrap_or_else(crate::config::default_session_file);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut store = Self {
            session_file: file,
            current: None,
        };
        store.restore();
        Ok(store)
    }

    /// Load and decode the persisted token, if any.
    ///
    /// A missing file means no session. A token that fails to decode is
    /// discarded along with the file; restore never fails the caller.
    fn restore(&mut self) {
        if !self.session_file.exists() {
            return;
        }
        let token = match fs::read_to_string(&self.session_file) {
            Ok(contents) => contents.trim().to_string(),
            Err(e) => {
                warn!("failed to read session file {}: {}", self.session_file.display(), e);
                return;
            }
        };
        if token.is_empty() {
            let _ = fs::remove_file(&self.session_file);
            return;
        }
        match decode_token(&token) {
            Ok(user) => {
                debug!("restored session for {}", user.email);
                self.current = Some(Session { token, user });
            }
            Err(e) => {
                warn!("persisted token did not decode ({}); clearing session", e);
                let _ = fs::remove_file(&self.session_file);
            }
        }
    }

    /// Establish a session from a freshly issued token.
    ///
    /// Decodes the identity claims, persists the token and returns the
    /// decoded [`User`].
    pub fn establish(&mut self, token: String) -> Result<User> {
        let user = decode_token(&token)?;
        fs::write(&self.session_file, &token)?;
        debug!("session established for {} ({})", user.email, user.role);
        self.current = Some(Session {
            token,
            user: user.clone(),
        });
        Ok(user)
    }

    /// Drop the session immediately, removing both the in-memory state and
    /// the persisted token.
    pub fn clear(&mut self) {
        self.current = None;
        if self.session_file.exists() {
            let _ = fs::remove_file(&self.session_file);
        }
        debug!("session cleared");
    }

    pub fn session(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn user(&self) -> Option<&User> {
        self.current.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Path of the backing session file.
    pub fn session_file(&self) -> &PathBuf {
        &self.session_file
    }
}

/// Decode the payload segment of a JWT into a [`User`].
///
/// Accepts `header.payload.signature`, base64url-decodes the payload and
/// parses the identity claims. The signature is not checked.
pub fn decode_token(token: &str) -> Result<User> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => {
            return Err(BankSdkError::Unauthorized(
                "token is not a three-segment JWT".to_string(),
            ))
        }
    };

    let raw = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| BankSdkError::Unauthorized(format!("token payload is not base64url: {e}")))?;

    let claims: Claims = serde_json::from_slice(&raw)
        .map_err(|e| BankSdkError::Unauthorized(format!("token claims did not parse: {e}")))?;

    Ok(User {
        id: claims.sub,
        email: claims.email,
        first_name: claims.first_name,
        last_name: claims.last_name,
        role: claims.role,
    })
}
