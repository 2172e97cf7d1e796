//! Request builders for the store client.

use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::Error;
use crate::fetch::{Fetch, FetchBuilder};

/// Request context cloned into each builder: the table endpoint plus the
/// credentials resolved at builder-creation time.
pub(crate) struct TableRequest {
    pub url: String,
    pub key: String,
    pub bearer: String,
    pub client: Client,
}

impl TableRequest {
    fn get(&self) -> FetchBuilder<'_> {
        Fetch::get(&self.client, &self.url)
            .header("apikey", &self.key)
            .bearer_auth(&self.bearer)
    }

    fn post(&self) -> FetchBuilder<'_> {
        Fetch::post(&self.client, &self.url)
            .header("apikey", &self.key)
            .bearer_auth(&self.bearer)
    }

    fn patch(&self) -> FetchBuilder<'_> {
        Fetch::patch(&self.client, &self.url)
            .header("apikey", &self.key)
            .bearer_auth(&self.bearer)
    }

    fn delete(&self) -> FetchBuilder<'_> {
        Fetch::delete(&self.client, &self.url)
            .header("apikey", &self.key)
            .bearer_auth(&self.bearer)
    }
}

fn with_params<'a>(mut builder: FetchBuilder<'a>, params: &[(String, String)]) -> FetchBuilder<'a> {
    for (key, value) in params {
        builder = builder.query(key, value);
    }
    builder
}

/// Builder for SELECT queries
pub struct SelectBuilder {
    request: TableRequest,
    params: Vec<(String, String)>,
}

impl SelectBuilder {
    pub(crate) fn new(request: TableRequest, columns: &str) -> Self {
        Self {
            request,
            params: vec![("select".to_string(), columns.to_string())],
        }
    }

    /// Keep rows where `column` equals `value`
    pub fn eq<T: ToString>(mut self, column: &str, value: T) -> Self {
        self.params
            .push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    /// Order the results by a column
    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        let direction = if ascending { "asc" } else { "desc" };
        self.params
            .push(("order".to_string(), format!("{}.{}", column, direction)));
        self
    }

    /// Limit the number of rows returned
    pub fn limit(mut self, count: u32) -> Self {
        self.params.push(("limit".to_string(), count.to_string()));
        self
    }

    /// Run the query and parse every row
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>, Error> {
        with_params(self.request.get(), &self.params)
            .execute()
            .await
            .map_err(Error::store_failure)
    }

    /// Run the query expecting at most one row
    pub async fn fetch_optional<T: DeserializeOwned>(self) -> Result<Option<T>, Error> {
        let rows: Vec<T> = self.limit(1).fetch().await?;
        Ok(rows.into_iter().next())
    }
}

/// Builder for INSERT requests, single record or batch
pub struct InsertBuilder<T: Serialize> {
    request: TableRequest,
    value: T,
}

impl<T: Serialize> InsertBuilder<T> {
    pub(crate) fn new(request: TableRequest, value: T) -> Self {
        Self { request, value }
    }

    /// Insert without asking for the created representation
    pub async fn execute(self) -> Result<(), Error> {
        self.request
            .post()
            .json(&self.value)
            .map_err(Error::store_failure)?
            .execute_empty()
            .await
            .map_err(Error::store_failure)
    }

    /// Insert and return the created row
    pub async fn fetch_created<R: DeserializeOwned>(self) -> Result<R, Error> {
        let rows: Vec<R> = self
            .request
            .post()
            .header("Prefer", "return=representation")
            .json(&self.value)
            .map_err(Error::store_failure)?
            .execute()
            .await
            .map_err(Error::store_failure)?;

        rows.into_iter()
            .next()
            .ok_or_else(|| Error::Persistence("insert returned no rows".to_string()))
    }
}

/// Builder for UPDATE requests
pub struct UpdateBuilder<T: Serialize> {
    request: TableRequest,
    value: T,
    params: Vec<(String, String)>,
}

impl<T: Serialize> UpdateBuilder<T> {
    pub(crate) fn new(request: TableRequest, value: T) -> Self {
        Self {
            request,
            value,
            params: Vec::new(),
        }
    }

    /// Restrict the update to rows where `column` equals `value`
    pub fn eq<V: ToString>(mut self, column: &str, value: V) -> Self {
        self.params
            .push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    /// Apply the update and return the updated row
    pub async fn fetch_updated<R: DeserializeOwned>(self) -> Result<R, Error> {
        let rows: Vec<R> = with_params(self.request.patch(), &self.params)
            .header("Prefer", "return=representation")
            .json(&self.value)
            .map_err(Error::store_failure)?
            .execute()
            .await
            .map_err(Error::store_failure)?;

        rows.into_iter()
            .next()
            .ok_or_else(|| Error::Persistence("update matched no rows".to_string()))
    }
}

/// Builder for DELETE requests
pub struct DeleteBuilder {
    request: TableRequest,
    params: Vec<(String, String)>,
}

impl DeleteBuilder {
    pub(crate) fn new(request: TableRequest) -> Self {
        Self {
            request,
            params: Vec::new(),
        }
    }

    /// Restrict the delete to rows where `column` equals `value`
    pub fn eq<V: ToString>(mut self, column: &str, value: V) -> Self {
        self.params
            .push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    /// Execute the delete
    pub async fn execute(self) -> Result<(), Error> {
        with_params(self.request.delete(), &self.params)
            .execute_empty()
            .await
            .map_err(Error::store_failure)
    }
}
