//! Persistent store client.
//!
//! Speaks the store's REST protocol for the `profiles`, `import_sources`,
//! and `portfolio_items` tables: insert, batch insert, select with equality
//! filters and ordering, update, and delete. Transport and connection
//! handling live in [`fetch`](crate::fetch); everything here is
//! request-shaping.

mod query;

use reqwest::Client;
use serde::Serialize;

use crate::auth::SharedSession;
use crate::config::Config;

pub use query::{DeleteBuilder, InsertBuilder, SelectBuilder, UpdateBuilder};

use query::TableRequest;

/// Client for table operations.
///
/// Shares the session slot with [`Auth`](crate::auth::Auth), so requests run
/// as the signed-in user when a session exists and anonymously otherwise.
#[derive(Clone)]
pub struct Store {
    url: String,
    key: String,
    client: Client,
    session: SharedSession,
}

impl Store {
    pub(crate) fn new(config: &Config, client: Client, session: SharedSession) -> Self {
        Self {
            url: config.api_url.clone(),
            key: config.api_key.clone(),
            client,
            session,
        }
    }

    fn request(&self, table: &str) -> TableRequest {
        let bearer = crate::auth::current_token(&self.session).unwrap_or_else(|| self.key.clone());
        TableRequest {
            url: format!("{}/rest/v1/{}", self.url, table),
            key: self.key.clone(),
            bearer,
            client: self.client.clone(),
        }
    }

    /// Select rows from a table
    pub fn select(&self, table: &str, columns: &str) -> SelectBuilder {
        SelectBuilder::new(self.request(table), columns)
    }

    /// Insert one record into a table
    pub fn insert<T: Serialize>(&self, table: &str, value: T) -> InsertBuilder<T> {
        InsertBuilder::new(self.request(table), value)
    }

    /// Insert a batch of records into a table
    pub fn insert_many<T: Serialize>(&self, table: &str, values: Vec<T>) -> InsertBuilder<Vec<T>> {
        InsertBuilder::new(self.request(table), values)
    }

    /// Update rows in a table
    pub fn update<T: Serialize>(&self, table: &str, value: T) -> UpdateBuilder<T> {
        UpdateBuilder::new(self.request(table), value)
    }

    /// Delete rows from a table
    pub fn delete(&self, table: &str) -> DeleteBuilder {
        DeleteBuilder::new(self.request(table))
    }
}
