//! Shared session slot handed to every service at bootstrap.

use std::sync::{Arc, Mutex};

use super::types::Session;

/// Session storage shared between the auth client, which writes it, and the
/// store client, which reads the bearer token out of it.
pub(crate) type SharedSession = Arc<Mutex<Option<Session>>>;

pub(crate) fn new_shared_session() -> SharedSession {
    Arc::new(Mutex::new(None))
}

/// The access token of the current session, if one exists.
pub(crate) fn current_token(slot: &SharedSession) -> Option<String> {
    slot.lock().unwrap().as_ref().map(|s| s.access_token.clone())
}
