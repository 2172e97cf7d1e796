//! Domain model for talent profiles and their import sources.

mod portfolio;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use portfolio::{NewPortfolioItem, PortfolioItem, PortfolioItemRow};

/// A published talent profile, as stored in the `profiles` table.
///
/// Everything past the four basics is optional; external references are
/// opaque strings with no format validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    /// The account that created this profile
    pub user_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub instagram_handle: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    /// Assigned by the store; the directory lists newest first
    pub created_at: DateTime<Utc>,
}

/// Insert payload for profile creation. The store assigns `id`,
/// `created_at`, and the verification flag.
#[derive(Debug, Clone, Serialize)]
pub struct NewProfile {
    pub user_id: Uuid,
    pub name: String,
    pub profession: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
}

/// The fixed set of external sources a profile can stake for later import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Instagram,
    Linkedin,
    Website,
    Gdrive,
    Resume,
}

impl SourceType {
    /// Every source type, in the order the wizard presents them.
    pub const ALL: [SourceType; 5] = [
        SourceType::Instagram,
        SourceType::Linkedin,
        SourceType::Website,
        SourceType::Gdrive,
        SourceType::Resume,
    ];

    /// The wire form stored in `import_sources.source_type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Instagram => "instagram",
            SourceType::Linkedin => "linkedin",
            SourceType::Website => "website",
            SourceType::Gdrive => "gdrive",
            SourceType::Resume => "resume",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SourceType::Instagram => "Instagram",
            SourceType::Linkedin => "LinkedIn",
            SourceType::Website => "Website",
            SourceType::Gdrive => "Google Drive",
            SourceType::Resume => "Resume/CV",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Batch-insert payload tying a staked source link to its new profile.
/// Sources are written once, at profile creation; there is no update or
/// delete path afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct NewImportSource {
    pub profile_id: Uuid,
    pub source_type: SourceType,
    pub source_url: String,
}
