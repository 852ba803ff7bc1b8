//! Credential gate
//!
//! The conversion engine never sees credentials. Callers authenticate against
//! a [`CredentialStore`] handle they own and pass the resulting [`Session`]
//! to the service layer as proof of access. Storage and password hashing
//! belong to the store implementation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Minimum accepted password length at registration
pub const MIN_PASSWORD_LEN: usize = 6;

/// Failures raised by the credential gate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Password and confirmation do not match")]
    PasswordMismatch,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Administrator role required")]
    AdminRequired,

    /// Backend failure reported by a store implementation
    #[error("Credential store error: {0}")]
    Store(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => f.write_str("admin"),
            Role::User => f.write_str("user"),
        }
    }
}

/// Proof that a caller passed the credential gate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i64,
    pub username: String,
    pub role: Role,
    pub authenticated_at: DateTime<Utc>,
}

impl Session {
    #[must_use]
    pub fn new<S: Into<String>>(user_id: i64, username: S, role: Role) -> Self {
        Self {
            user_id,
            username: username.into(),
            role,
            authenticated_at: Utc::now(),
        }
    }

    /// Session for a trusted local process that runs without a credential store
    #[must_use]
    pub fn local() -> Self {
        Self::new(0, "local", Role::User)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Fails unless the session belongs to an administrator
pub fn require_admin(session: &Session) -> Result<(), AuthError> {
    if session.is_admin() {
        Ok(())
    } else {
        Err(AuthError::AdminRequired)
    }
}

/// A sign-up request as typed by the user
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub confirmation: String,
}

impl Registration {
    pub fn new<S: Into<String>>(username: S, password: S, confirmation: S) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            confirmation: confirmation.into(),
        }
    }

    /// Check the request before it reaches a store.
    ///
    /// Mismatched confirmation is reported ahead of a short password.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.username.trim().is_empty() {
            return Err(AuthError::EmptyUsername);
        }
        if self.password != self.confirmation {
            return Err(AuthError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(())
    }
}

/// Account listing entry, never carries secrets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub user_id: i64,
    pub username: String,
    pub role: Role,
}

/// Handle to wherever accounts live.
///
/// Implementations own persistence and password hashing. They are passed
/// explicitly to the code that needs them; nothing in this crate holds one
/// globally.
pub trait CredentialStore {
    /// Create a regular user account. Implementations call
    /// [`Registration::validate`] first and report duplicates as
    /// [`AuthError::UsernameTaken`].
    fn register(&mut self, registration: &Registration) -> Result<UserSummary, AuthError>;

    /// Returns `Ok(None)` when the credentials do not match an account
    fn authenticate(&self, username: &str, password: &str) -> Result<Option<Session>, AuthError>;

    fn users(&self) -> Result<Vec<UserSummary>, AuthError>;
}

/// Authenticate and turn a miss into [`AuthError::InvalidCredentials`]
pub fn login<S: CredentialStore + ?Sized>(
    store: &S,
    username: &str,
    password: &str,
) -> Result<Session, AuthError> {
    match store.authenticate(username, password)? {
        Some(session) => {
            tracing::info!(user = %session.username, role = %session.role, "Login succeeded");
            Ok(session)
        }
        None => {
            tracing::warn!(user = username, "Login rejected");
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// List accounts on behalf of an administrator session
pub fn list_users<S: CredentialStore + ?Sized>(
    store: &S,
    session: &Session,
) -> Result<Vec<UserSummary>, AuthError> {
    require_admin(session)?;
    store.users()
}
