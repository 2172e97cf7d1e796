//! Core services for the BreadButter talent profile builder and directory.
//!
//! Independent contributors register an account and publish a searchable
//! talent profile assembled from links to external sources; viewers browse
//! and filter a directory of published profiles. This crate owns the data
//! model, the profile creation wizard, the directory filter engine, and the
//! profile edit surface, and talks to the identity provider and persistent
//! store over HTTP. Presentation is a consumer of this crate.

pub mod auth;
pub mod config;
pub mod directory;
pub mod editor;
pub mod error;
mod fetch;
pub mod profile;
pub mod store;
pub mod wizard;

use reqwest::Client;

use crate::auth::Auth;
use crate::config::Config;
use crate::error::Error;
use crate::store::Store;

/// Owns the backend handles. Constructed once at bootstrap; components
/// receive the handles they need instead of reaching for globals.
pub struct App {
    config: Config,
    auth: Auth,
    store: Store,
}

impl App {
    /// Wire up the service handles from one configuration.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use breadbutter_core::{config::Config, App};
    ///
    /// let config = Config::new("https://your-project.example.co", "your-anon-key");
    /// let app = App::new(config).unwrap();
    /// let wizard = breadbutter_core::wizard::ProfileWizard::new();
    /// # let _ = (app, wizard);
    /// ```
    pub fn new(config: Config) -> Result<Self, Error> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        let session = auth::new_shared_session();

        let auth = Auth::new(&config, client.clone(), session.clone());
        let store = Store::new(&config, client, session);

        Ok(Self {
            config,
            auth,
            store,
        })
    }

    /// The identity provider client
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// The persistent store client
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// The configuration this app was built from
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::directory::{Directory, ProfessionFilter};
    pub use crate::editor::ProfileEditor;
    pub use crate::error::Error;
    pub use crate::profile::{Profile, SourceType};
    pub use crate::wizard::{ProfileWizard, WizardStep};
    pub use crate::App;
}
