//! Published profile directory: a full-collection load plus a pure filter
//! engine over it.

use tracing::{debug, warn};

use crate::auth::Auth;
use crate::error::Error;
use crate::profile::Profile;
use crate::store::Store;

/// Facet over the profession field: everything, or a case-insensitive
/// substring match. The facet vocabulary is derived from the loaded
/// collection, not fixed — see [`Directory::professions`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProfessionFilter {
    #[default]
    All,
    Matching(String),
}

impl ProfessionFilter {
    fn matches(&self, profile: &Profile) -> bool {
        match self {
            ProfessionFilter::All => true,
            ProfessionFilter::Matching(term) => contains_ci(profile.profession.as_deref(), term),
        }
    }
}

/// Case-insensitive substring test; an absent field never matches.
fn contains_ci(field: Option<&str>, term: &str) -> bool {
    match field {
        Some(value) => value.to_lowercase().contains(&term.to_lowercase()),
        None => false,
    }
}

fn matches_search(profile: &Profile, term: &str) -> bool {
    let term = term.to_lowercase();
    profile.name.to_lowercase().contains(&term)
        || contains_ci(profile.profession.as_deref(), &term)
        || contains_ci(profile.bio.as_deref(), &term)
}

/// The filter engine: keep profiles matching both the search term (against
/// name, profession, or bio) and the profession facet. A pure function of
/// its inputs; recomputing over an already-filtered set with the same
/// predicates yields the same set.
pub fn filter_profiles<'a>(
    profiles: &'a [Profile],
    search: &str,
    facet: &ProfessionFilter,
) -> Vec<&'a Profile> {
    profiles
        .iter()
        .filter(|profile| matches_search(profile, search) && facet.matches(profile))
        .collect()
}

/// The loaded directory plus its two filter inputs.
#[derive(Debug, Default)]
pub struct Directory {
    profiles: Vec<Profile>,
    own_profile: Option<Profile>,
    onboarding: bool,
    search_term: String,
    facet: ProfessionFilter,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reload the full collection, newest first. There is no pagination and
    /// no incremental update; callers refetch after any mutation.
    pub async fn refresh(&mut self, store: &Store) -> Result<(), Error> {
        let profiles: Vec<Profile> = store
            .select("profiles", "*")
            .order("created_at", false)
            .fetch()
            .await?;
        debug!(count = profiles.len(), "directory refreshed");
        self.profiles = profiles;
        Ok(())
    }

    /// Full load: the directory fetch plus the independent own-profile
    /// check. The two are separate round-trips; a profile created elsewhere
    /// between them goes unnoticed until the next load.
    ///
    /// A failed own-profile check is logged and read as "no profile"
    /// without forcing onboarding.
    pub async fn load(&mut self, auth: &Auth, store: &Store) -> Result<(), Error> {
        self.refresh(store).await?;

        self.own_profile = None;
        self.onboarding = false;

        let user = match auth.current_user().await {
            Ok(Some(user)) => user,
            Ok(None) => return Ok(()),
            Err(err) => {
                warn!(error = %err, "could not resolve current user");
                return Ok(());
            }
        };

        match store
            .select("profiles", "*")
            .eq("user_id", user.id)
            .fetch_optional::<Profile>()
            .await
        {
            Ok(own) => {
                self.onboarding = own.is_none();
                self.own_profile = own;
            }
            Err(err) => {
                warn!(error = %err, "own-profile check failed");
            }
        }

        Ok(())
    }

    /// Record a finished wizard run: the new profile is the caller's own
    /// and onboarding is over. The listing itself still needs a refresh.
    pub fn finish_onboarding(&mut self, profile: Profile) {
        self.onboarding = false;
        self.own_profile = Some(profile);
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_facet(&mut self, facet: ProfessionFilter) {
        self.facet = facet;
    }

    pub fn facet(&self) -> &ProfessionFilter {
        &self.facet
    }

    /// The filtered view, recomputed from the full collection on every
    /// call.
    pub fn visible(&self) -> Vec<&Profile> {
        filter_profiles(&self.profiles, &self.search_term, &self.facet)
    }

    /// The full loaded collection, newest first.
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// The signed-in user's own profile, if the last load found one.
    pub fn own_profile(&self) -> Option<&Profile> {
        self.own_profile.as_ref()
    }

    /// Whether the creation wizard should be shown instead of the listing.
    pub fn needs_onboarding(&self) -> bool {
        self.onboarding
    }

    /// Distinct non-empty professions in the loaded collection, in
    /// first-seen order. This changes as profiles are added.
    pub fn professions(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for profile in &self.profiles {
            if let Some(profession) = profile.profession.as_deref() {
                if !profession.is_empty() && !seen.contains(&profession) {
                    seen.push(profession);
                }
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn profile(name: &str, profession: Option<&str>, bio: Option<&str>) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: name.to_string(),
            profession: profession.map(str::to_string),
            bio: bio.map(str::to_string),
            location: None,
            avatar_url: None,
            website_url: None,
            instagram_handle: None,
            linkedin_url: None,
            is_verified: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn search_matches_name_profession_or_bio_case_insensitively() {
        let profiles = vec![
            profile("Ava", Some("Photographer"), None),
            profile("Amara", Some("Director"), None),
            profile("Ben", Some("Sculptor"), Some("Shoots analog film")),
        ];

        let matched = filter_profiles(&profiles, "a", &ProfessionFilter::All);
        let names: Vec<&str> = matched.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Ava", "Amara", "Ben"]);

        let matched = filter_profiles(&profiles, "AVA", &ProfessionFilter::All);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Ava");

        let matched = filter_profiles(&profiles, "analog", &ProfessionFilter::All);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Ben");
    }

    #[test]
    fn absent_optional_fields_never_match() {
        let profiles = vec![profile("Noor", None, None)];
        assert!(filter_profiles(&profiles, "designer", &ProfessionFilter::All).is_empty());
        assert!(filter_profiles(
            &profiles,
            "",
            &ProfessionFilter::Matching("designer".to_string())
        )
        .is_empty());
    }

    #[test]
    fn facet_is_a_substring_match_on_profession_only() {
        let profiles = vec![
            profile("Ava", Some("Photographer"), None),
            profile("Ben", Some("Designer"), Some("photographer at heart")),
        ];

        let facet = ProfessionFilter::Matching("photo".to_string());
        let matched = filter_profiles(&profiles, "", &facet);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Ava");
    }

    #[test]
    fn empty_search_with_all_facet_matches_everything() {
        let profiles = vec![
            profile("Ava", Some("Photographer"), None),
            profile("Noor", None, None),
        ];
        assert_eq!(filter_profiles(&profiles, "", &ProfessionFilter::All).len(), 2);
    }

    #[test]
    fn filtering_is_idempotent() {
        let profiles = vec![
            profile("Ava", Some("Photographer"), None),
            profile("Amara", Some("Director"), None),
            profile("Ben", Some("Designer"), None),
        ];
        let facet = ProfessionFilter::Matching("r".to_string());

        let once: Vec<Profile> = filter_profiles(&profiles, "a", &facet)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<Profile> = filter_profiles(&once, "a", &facet)
            .into_iter()
            .cloned()
            .collect();

        assert_eq!(once, twice);
    }

    #[test]
    fn search_and_facet_commute() {
        let profiles = vec![
            profile("Ava", Some("Photographer"), None),
            profile("Amara", Some("Director"), Some("documentaries")),
            profile("Ben", Some("Designer"), None),
            profile("Noor", None, Some("art direction")),
        ];
        let facet = ProfessionFilter::Matching("d".to_string());

        let search_first: Vec<Profile> = filter_profiles(&profiles, "a", &ProfessionFilter::All)
            .into_iter()
            .cloned()
            .collect();
        let search_then_facet = filter_profiles(&search_first, "", &facet);

        let facet_first: Vec<Profile> = filter_profiles(&profiles, "", &facet)
            .into_iter()
            .cloned()
            .collect();
        let facet_then_search = filter_profiles(&facet_first, "a", &ProfessionFilter::All);

        let left: Vec<&str> = search_then_facet.iter().map(|p| p.name.as_str()).collect();
        let right: Vec<&str> = facet_then_search.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn profession_vocabulary_is_distinct_and_first_seen_ordered() {
        let mut directory = Directory::new();
        directory.profiles = vec![
            profile("Ava", Some("Photographer"), None),
            profile("Ben", Some("Designer"), None),
            profile("Cy", Some("Photographer"), None),
            profile("Noor", None, None),
            profile("Dee", Some(""), None),
        ];

        assert_eq!(directory.professions(), vec!["Photographer", "Designer"]);
    }

    #[test]
    fn visible_recomputes_from_the_full_collection() {
        let mut directory = Directory::new();
        directory.profiles = vec![
            profile("Ava", Some("Photographer"), None),
            profile("Ben", Some("Designer"), None),
        ];

        directory.set_search_term("ava");
        assert_eq!(directory.visible().len(), 1);

        directory.set_search_term("");
        directory.set_facet(ProfessionFilter::Matching("designer".to_string()));
        assert_eq!(directory.visible().len(), 1);
        assert_eq!(directory.visible()[0].name, "Ben");
    }
}
