//! Profile creation wizard: a short linear state machine that collects the
//! basic fields, then the import sources, then commits both.

mod registry;

use tracing::{debug, info};

use crate::auth::Auth;
use crate::error::Error;
use crate::profile::{NewImportSource, NewProfile, Profile, SourceType};
use crate::store::Store;

pub use registry::{SourceLink, SourceRegistry};

/// Where the wizard currently is.
///
/// `Committed` is terminal: callers are expected to discard the wizard once
/// it reports completion. A failed submission goes back to
/// `CollectingSources` with the draft intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    CollectingBasics,
    CollectingSources,
    Submitting,
    Committed,
}

/// The basic fields collected on the first step.
#[derive(Debug, Clone, Default)]
pub struct ProfileBasics {
    pub name: String,
    pub profession: String,
    pub bio: String,
    pub location: String,
}

/// Collects a profile draft and commits it as one profile row plus a batch
/// of import sources.
#[derive(Debug, Default)]
pub struct ProfileWizard {
    step: WizardStep,
    basics: ProfileBasics,
    sources: SourceRegistry,
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::CollectingBasics
    }
}

impl ProfileWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn basics(&self) -> &ProfileBasics {
        &self.basics
    }

    pub fn basics_mut(&mut self) -> &mut ProfileBasics {
        &mut self.basics
    }

    pub fn sources(&self) -> &SourceRegistry {
        &self.sources
    }

    /// The basics step can advance once name and profession are filled in.
    pub fn can_advance(&self) -> bool {
        !self.basics.name.trim().is_empty() && !self.basics.profession.trim().is_empty()
    }

    /// Move from basics to sources. Returns whether the transition was
    /// taken; a failing guard leaves the wizard where it was.
    pub fn advance(&mut self) -> bool {
        if self.step == WizardStep::CollectingBasics && self.can_advance() {
            self.step = WizardStep::CollectingSources;
            true
        } else {
            false
        }
    }

    /// Unconditional back transition. Entered basics and staked sources are
    /// kept.
    pub fn back(&mut self) {
        if self.step == WizardStep::CollectingSources {
            self.step = WizardStep::CollectingBasics;
        }
    }

    /// Stake a source link for later import.
    pub fn add_source(&mut self, source_type: SourceType, url: impl Into<String>) {
        self.sources.add(source_type, url);
    }

    /// Withdraw a staked source link.
    pub fn remove_source(&mut self, source_type: SourceType) {
        self.sources.remove(source_type);
    }

    /// Commit the draft: resolve the signed-in user, insert the profile
    /// row, then batch-insert the staked sources.
    ///
    /// The two writes are not atomic. A profile whose source batch failed
    /// stays persisted with zero sources; the error is returned and the
    /// draft is kept so the whole submission can be retried.
    pub async fn commit(&mut self, auth: &Auth, store: &Store) -> Result<Profile, Error> {
        match self.step {
            WizardStep::CollectingSources => {}
            WizardStep::Submitting => {
                return Err(Error::validation("a submission is already in flight"))
            }
            WizardStep::Committed => {
                return Err(Error::validation("this wizard has already committed"))
            }
            WizardStep::CollectingBasics => {
                return Err(Error::validation("basics are still being collected"))
            }
        }

        self.step = WizardStep::Submitting;
        let result = self.write_draft(auth, store).await;
        match &result {
            Ok(profile) => {
                info!(profile_id = %profile.id, "profile committed");
                self.step = WizardStep::Committed;
            }
            Err(_) => {
                // Draft state stays intact for a retry.
                self.step = WizardStep::CollectingSources;
            }
        }
        result
    }

    async fn write_draft(&self, auth: &Auth, store: &Store) -> Result<Profile, Error> {
        let user = auth.current_user().await?.ok_or(Error::NotAuthenticated)?;

        let new_profile = NewProfile {
            user_id: user.id,
            name: self.basics.name.clone(),
            profession: non_empty(&self.basics.profession),
            bio: non_empty(&self.basics.bio),
            location: non_empty(&self.basics.location),
        };
        let profile: Profile = store
            .insert("profiles", new_profile)
            .fetch_created()
            .await?;
        debug!(profile_id = %profile.id, "profile row created");

        if !self.sources.is_empty() {
            let rows: Vec<NewImportSource> = self
                .sources
                .iter()
                .map(|link| NewImportSource {
                    profile_id: profile.id,
                    source_type: link.source_type,
                    source_url: link.url.clone(),
                })
                .collect();
            store.insert_many("import_sources", rows).execute().await?;
            debug!(count = self.sources.len(), "import sources recorded");
        }

        Ok(profile)
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
