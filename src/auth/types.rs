//! Types for the identity provider client.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response from sign-up and sign-in calls. Sign-ups that still need email
/// confirmation come back with a user but no tokens.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<i64>,
    pub refresh_token: Option<String>,
    pub user: Option<AuthUser>,
}

impl AuthResponse {
    /// The session carried by this response, if the provider issued tokens.
    pub fn session(&self) -> Option<Session> {
        let access_token = self.access_token.clone()?;
        Some(Session {
            access_token,
            refresh_token: self.refresh_token.clone(),
            expires_in: self.expires_in,
            user: self.user.clone(),
        })
    }

    /// Whether the account exists but must confirm by email before it can
    /// sign in.
    pub fn requires_confirmation(&self) -> bool {
        self.user.is_some() && self.access_token.is_none()
    }
}

/// The authenticated account as reported by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: Option<String>,
    #[serde(default)]
    pub email_confirmed_at: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// An issued token set for a signed-in account.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<i64>,
    pub user: Option<AuthUser>,
}
