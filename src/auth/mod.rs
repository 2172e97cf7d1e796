//! Identity provider client.

mod session;
mod types;

use reqwest::{Client, StatusCode};
use serde_json::json;

use crate::config::Config;
use crate::error::Error;
use crate::fetch::{Fetch, FetchError};

pub(crate) use session::{current_token, new_shared_session, SharedSession};
pub use types::{AuthResponse, AuthUser, Session};

/// Client for the identity endpoints.
///
/// Writes the shared session slot on sign-in and sign-up and clears it on
/// sign-out; the store client reads the same slot for its bearer token.
pub struct Auth {
    url: String,
    key: String,
    redirect_to: Option<String>,
    client: Client,
    session: SharedSession,
}

impl Auth {
    pub(crate) fn new(config: &Config, client: Client, session: SharedSession) -> Self {
        Self {
            url: config.api_url.clone(),
            key: config.api_key.clone(),
            redirect_to: config.confirmation_redirect(),
            client,
            session,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1{}", self.url, path)
    }

    /// Register a new account with email and password. When a site URL is
    /// configured, it is passed along as the confirmation redirect target.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<AuthResponse, Error> {
        let mut request = Fetch::post(&self.client, &self.endpoint("/signup"))
            .header("apikey", &self.key)
            .json(&json!({ "email": email, "password": password }))
            .map_err(Error::auth_failure)?;

        if let Some(redirect) = &self.redirect_to {
            request = request.query("redirect_to", redirect);
        }

        let response: AuthResponse = request.execute().await.map_err(Error::auth_failure)?;
        self.remember(&response);
        Ok(response)
    }

    /// Sign in with email and password.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthResponse, Error> {
        let response: AuthResponse = Fetch::post(&self.client, &self.endpoint("/token"))
            .query("grant_type", "password")
            .header("apikey", &self.key)
            .json(&json!({ "email": email, "password": password }))
            .map_err(Error::auth_failure)?
            .execute()
            .await
            .map_err(Error::auth_failure)?;

        self.remember(&response);
        Ok(response)
    }

    /// Sign out and clear the shared session. Already being signed out is
    /// not an error.
    pub async fn sign_out(&self) -> Result<(), Error> {
        let Some(token) = current_token(&self.session) else {
            return Ok(());
        };

        Fetch::post(&self.client, &self.endpoint("/logout"))
            .header("apikey", &self.key)
            .bearer_auth(&token)
            .execute_empty()
            .await
            .map_err(Error::auth_failure)?;

        *self.session.lock().unwrap() = None;
        Ok(())
    }

    /// The currently signed-in account, or `None` when there is no usable
    /// session. An expired or revoked token reads as signed out, not as a
    /// failure.
    pub async fn current_user(&self) -> Result<Option<AuthUser>, Error> {
        let Some(token) = current_token(&self.session) else {
            return Ok(None);
        };

        let result = Fetch::get(&self.client, &self.endpoint("/user"))
            .header("apikey", &self.key)
            .bearer_auth(&token)
            .execute::<AuthUser>()
            .await;

        match result {
            Ok(user) => Ok(Some(user)),
            Err(FetchError::Status { status, .. })
                if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN =>
            {
                *self.session.lock().unwrap() = None;
                Ok(None)
            }
            Err(err) => Err(Error::auth_failure(err)),
        }
    }

    /// Get the current session
    pub fn session(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }

    fn remember(&self, response: &AuthResponse) {
        if let Some(session) = response.session() {
            *self.session.lock().unwrap() = Some(session);
        }
    }
}
