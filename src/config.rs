//! Configuration for the application core.

use std::time::Duration;

/// Connection settings for the backend collaborators, assembled once at
/// bootstrap and handed to [`App::new`](crate::App::new).
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend project
    pub api_url: String,

    /// Anonymous API key
    pub api_key: String,

    /// Public site URL; when set, sign-up confirmations redirect to its root
    pub site_url: Option<String>,

    /// Timeout applied to every backend request
    pub request_timeout: Duration,
}

impl Config {
    /// Create a new configuration
    ///
    /// # Example
    ///
    /// ```
    /// use breadbutter_core::config::Config;
    ///
    /// let config = Config::new("https://your-project.example.co", "your-anon-key")
    ///     .with_site_url("https://breadbutter.example");
    /// ```
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            site_url: None,
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Set the public site URL used as the sign-up confirmation redirect
    pub fn with_site_url(mut self, value: impl Into<String>) -> Self {
        self.site_url = Some(value.into());
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Duration) -> Self {
        self.request_timeout = value;
        self
    }

    /// The confirmation redirect target: the site root.
    pub(crate) fn confirmation_redirect(&self) -> Option<String> {
        self.site_url
            .as_ref()
            .map(|site| format!("{}/", site.trim_end_matches('/')))
    }
}
