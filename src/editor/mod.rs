//! Edit surface for an existing profile: an editable field draft plus an
//! ordered portfolio sequence.

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::error::Error;
use crate::profile::{NewPortfolioItem, PortfolioItem, PortfolioItemRow, Profile};
use crate::store::Store;

/// The editable field set of one profile. Doubles as the update payload on
/// save.
///
/// The verification flag mirrors the stored value and is not part of the
/// ordinary field-edit path; it only changes through
/// [`ProfileEditor::set_verified`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileDraft {
    pub name: String,
    pub profession: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub website_url: Option<String>,
    pub instagram_handle: Option<String>,
    pub linkedin_url: Option<String>,
    is_verified: bool,
}

impl ProfileDraft {
    fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            profession: profile.profession.clone(),
            bio: profile.bio.clone(),
            location: profile.location.clone(),
            avatar_url: profile.avatar_url.clone(),
            website_url: profile.website_url.clone(),
            instagram_handle: profile.instagram_handle.clone(),
            linkedin_url: profile.linkedin_url.clone(),
            is_verified: profile.is_verified,
        }
    }

    pub fn is_verified(&self) -> bool {
        self.is_verified
    }
}

/// Presents one profile for editing and persists the result.
#[derive(Debug)]
pub struct ProfileEditor {
    profile_id: Uuid,
    draft: ProfileDraft,
    portfolio: Vec<PortfolioItem>,
    saving: bool,
}

impl ProfileEditor {
    /// Start editing from the stored profile. The draft mirrors the stored
    /// values, verification flag included.
    pub fn new(profile: &Profile) -> Self {
        Self {
            profile_id: profile.id,
            draft: ProfileDraft::from_profile(profile),
            portfolio: Vec::new(),
            saving: false,
        }
    }

    /// Open an editor with the stored portfolio loaded in display order.
    pub async fn load(store: &Store, profile: &Profile) -> Result<Self, Error> {
        let rows: Vec<PortfolioItemRow> = store
            .select("portfolio_items", "*")
            .eq("profile_id", profile.id)
            .order("position", true)
            .fetch()
            .await?;

        let mut editor = Self::new(profile);
        editor.portfolio = rows.into_iter().map(PortfolioItem::from).collect();
        Ok(editor)
    }

    pub fn profile_id(&self) -> Uuid {
        self.profile_id
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ProfileDraft {
        &mut self.draft
    }

    pub fn portfolio(&self) -> &[PortfolioItem] {
        &self.portfolio
    }

    /// Change the verification flag. Not an ordinary field edit; callers
    /// gate this behind whatever privilege applies.
    pub fn set_verified(&mut self, verified: bool) {
        self.draft.is_verified = verified;
    }

    /// Append a fresh empty portfolio item and return its id. The sequence
    /// is unbounded.
    pub fn add_item(&mut self) -> Uuid {
        let item = PortfolioItem::new();
        let id = item.id;
        self.portfolio.push(item);
        id
    }

    /// Remove the item with `id`, if present. The sequence may go empty;
    /// keeping a minimum slot count is a presentation concern.
    pub fn remove_item(&mut self, id: Uuid) {
        self.portfolio.retain(|item| item.id != id);
    }

    /// Mutable access to one item for field edits.
    pub fn item_mut(&mut self, id: Uuid) -> Option<&mut PortfolioItem> {
        self.portfolio.iter_mut().find(|item| item.id == id)
    }

    /// Persist the draft: patch the profile row, then replace the stored
    /// portfolio set with the current sequence.
    ///
    /// The writes are not atomic; a failure after the patch leaves the
    /// profile updated with the old portfolio. The editor state is kept
    /// either way so the save can be retried.
    pub async fn save(&mut self, store: &Store) -> Result<Profile, Error> {
        if self.saving {
            return Err(Error::validation("a save is already in flight"));
        }

        self.saving = true;
        let result = self.write(store).await;
        self.saving = false;
        result
    }

    async fn write(&self, store: &Store) -> Result<Profile, Error> {
        let profile: Profile = store
            .update("profiles", &self.draft)
            .eq("id", self.profile_id)
            .fetch_updated()
            .await?;

        store
            .delete("portfolio_items")
            .eq("profile_id", self.profile_id)
            .execute()
            .await?;

        if !self.portfolio.is_empty() {
            let rows: Vec<NewPortfolioItem> = self
                .portfolio
                .iter()
                .enumerate()
                .map(|(position, item)| NewPortfolioItem {
                    profile_id: self.profile_id,
                    url: item.url.clone(),
                    title: item.title.clone(),
                    description: item.description.clone(),
                    position: position as i32,
                })
                .collect();
            store.insert_many("portfolio_items", rows).execute().await?;
        }

        debug!(
            profile_id = %self.profile_id,
            items = self.portfolio.len(),
            "profile saved"
        );
        Ok(profile)
    }
}
