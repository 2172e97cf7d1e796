//! Error handling for the profile core.

use std::fmt;

use thiserror::Error;

use crate::fetch::FetchError;

/// Unified error type for the profile core.
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP related errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// The identity provider rejected a sign-in or sign-up
    #[error("authentication error: {0}")]
    Auth(String),

    /// No signed-in user at the point an operation required one
    #[error("not authenticated")]
    NotAuthenticated,

    /// A store read or write failed; carries the store's message verbatim
    #[error("persistence error: {0}")]
    Persistence(String),

    /// A component was driven outside its state machine
    #[error("validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Create a new validation error
    pub fn validation<T: fmt::Display>(msg: T) -> Self {
        Error::Validation(msg.to_string())
    }

    /// Classify a request failure from the identity provider.
    pub(crate) fn auth_failure(err: FetchError) -> Self {
        match err {
            FetchError::Status { message, .. } => Error::Auth(message),
            FetchError::Transport(e) => Error::Http(e),
            FetchError::Json(e) => Error::Json(e),
            FetchError::Url(e) => Error::Url(e),
        }
    }

    /// Classify a request failure from the persistent store.
    pub(crate) fn store_failure(err: FetchError) -> Self {
        match err {
            FetchError::Status { message, .. } => Error::Persistence(message),
            FetchError::Transport(e) => Error::Http(e),
            FetchError::Json(e) => Error::Json(e),
            FetchError::Url(e) => Error::Url(e),
        }
    }
}
