//! Authentication — credentials, user profile, session lifecycle.
//!
//! The SDK holds the bearer token internally (injected into HTTP requests by
//! `StockdeckHttp`); consumers see only [`AuthCredentials`] and [`User`].

pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cached view of the current session.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthCredentials {
    pub user_id: i64,
    pub username: String,
    /// From the login response. `None` for sessions restored from a
    /// persisted token, whose expiry the backend does not report.
    pub expires_at: Option<DateTime<Utc>>,
}

impl AuthCredentials {
    /// Whether the cached session is still within its lifetime. A session
    /// with no known expiry counts as live until the backend says otherwise.
    /// For a server-validated check, use `Auth::check_session()`.
    pub fn is_authenticated(&self) -> bool {
        self.expires_at.map_or(true, |t| t > Utc::now())
    }
}

/// The authenticated user's profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(rename = "user_id")]
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Response body for `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    /// Session expiry as a Unix timestamp (seconds).
    pub expires_at: i64,
    pub user: User,
}
