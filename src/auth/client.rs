//! Auth sub-client — login, registration, session validation, logout.

use chrono::{DateTime, TimeZone, Utc};

use crate::auth::{AuthCredentials, LoginRequest, LoginResponse, RegisterRequest, User};
use crate::client::StockdeckClient;
use crate::error::{HttpError, SdkError};
use crate::http::RetryPolicy;

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a StockdeckClient,
}

impl<'a> Auth<'a> {
    /// Login with username and password.
    ///
    /// On success the bearer token is stored internally and injected into
    /// every subsequent request; the full user profile is returned.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, SdkError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let url = format!("{}/auth/login", self.client.http.base_url());
        let resp: LoginResponse = self
            .client
            .http
            .post(&url, &request, RetryPolicy::None)
            .await
            .map_err(|e| match e {
                HttpError::Unauthorized | HttpError::BadRequest(_) => {
                    SdkError::Auth(crate::error::AuthError::LoginFailed(e.to_string()))
                }
                other => other.into(),
            })?;

        self.client
            .http
            .set_auth_token(Some(resp.access_token.clone()))
            .await;

        let credentials = AuthCredentials {
            user_id: resp.user.id,
            username: resp.user.username.clone(),
            expires_at: parse_expires_at(resp.expires_at),
        };
        *self.client.auth_credentials.write().await = Some(credentials);

        Ok(resp.user)
    }

    /// Register a new account. The backend does not log the account in;
    /// call `login()` afterwards.
    pub async fn register(&self, request: &RegisterRequest) -> Result<User, SdkError> {
        let url = format!("{}/auth/register", self.client.http.base_url());
        self.client
            .http
            .post(&url, request, RetryPolicy::None)
            .await
            .map_err(|e| match e {
                HttpError::BadRequest(body) => {
                    SdkError::Auth(crate::error::AuthError::RegistrationFailed(body))
                }
                other => other.into(),
            })
    }

    /// Restore a session from a persisted token: store it, then validate it
    /// against the backend. On failure the token is cleared again.
    pub async fn restore_session(&self, token: &str) -> Result<User, SdkError> {
        self.client
            .http
            .set_auth_token(Some(token.to_string()))
            .await;

        match self.check_session().await {
            Ok(user) => Ok(user),
            Err(e) => {
                self.client.http.clear_auth_token().await;
                Err(e)
            }
        }
    }

    /// Validate the current session and return the user profile.
    ///
    /// On success, refreshes the cached `AuthCredentials`. On failure
    /// (401, expired), clears them and returns the error.
    pub async fn check_session(&self) -> Result<User, SdkError> {
        if !self.client.http.has_auth_token().await {
            return Err(crate::error::AuthError::NotAuthenticated.into());
        }

        let url = format!("{}/users/me", self.client.http.base_url());

        let user: User = match self.client.http.get(&url, RetryPolicy::Idempotent).await {
            Ok(user) => user,
            Err(e) => {
                *self.client.auth_credentials.write().await = None;
                return Err(match e {
                    HttpError::Unauthorized => {
                        crate::error::AuthError::TokenExpired.into()
                    }
                    other => other.into(),
                });
            }
        };

        let mut guard = self.client.auth_credentials.write().await;
        // login recorded the expiry; a restored session has no known one
        let expires_at = guard.as_ref().and_then(|c| c.expires_at);
        *guard = Some(AuthCredentials {
            user_id: user.id,
            username: user.username.clone(),
            expires_at,
        });
        drop(guard);

        Ok(user)
    }

    /// Logout — drops the token and cached credentials. The backend keeps no
    /// server-side session, so this is purely client state.
    pub async fn logout(&self) {
        self.client.http.clear_auth_token().await;
        *self.client.auth_credentials.write().await = None;
        tracing::info!("Session cleared");
    }

    /// Get current auth credentials (if authenticated).
    pub async fn credentials(&self) -> Option<AuthCredentials> {
        self.client.auth_credentials.read().await.clone()
    }

    /// Check if currently authenticated (based on cached credentials).
    ///
    /// For a server-validated check, use `check_session()` instead.
    pub async fn is_authenticated(&self) -> bool {
        self.client
            .auth_credentials
            .read()
            .await
            .as_ref()
            .map(|c| c.is_authenticated())
            .unwrap_or(false)
    }
}

fn parse_expires_at(timestamp: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(timestamp, 0).single()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthError;

    #[tokio::test]
    async fn test_check_session_without_token_fails_fast() {
        // no login happened, so no request goes out
        let client = StockdeckClient::new();
        let result = client.auth().check_session().await;
        assert!(matches!(
            result,
            Err(SdkError::Auth(AuthError::NotAuthenticated))
        ));
        assert!(!client.auth().is_authenticated().await);
    }

    #[test]
    fn test_parse_expires_at() {
        assert!(parse_expires_at(1_740_080_400).is_some());
        assert!(parse_expires_at(i64::MAX).is_none());
    }
}
