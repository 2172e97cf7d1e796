//! Draft registry of the source links staked during profile creation.

use crate::profile::SourceType;

/// One staked link, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLink {
    pub source_type: SourceType,
    pub url: String,
}

/// Holds at most one link per source type. Staking a second link of the
/// same type replaces the first.
#[derive(Debug, Clone, Default)]
pub struct SourceRegistry {
    entries: Vec<SourceLink>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stake `url` for `source_type`. Blank input leaves the registry
    /// untouched.
    pub fn add(&mut self, source_type: SourceType, url: impl Into<String>) {
        let url = url.into();
        if url.trim().is_empty() {
            return;
        }
        self.entries.retain(|entry| entry.source_type != source_type);
        self.entries.push(SourceLink { source_type, url });
    }

    /// Withdraw the link for `source_type`, if one was staked.
    pub fn remove(&mut self, source_type: SourceType) {
        self.entries.retain(|entry| entry.source_type != source_type);
    }

    /// Whether a link is currently staked for `source_type`. This is the
    /// wizard's per-type "added" indicator.
    pub fn contains(&self, source_type: SourceType) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.source_type == source_type)
    }

    /// The staked link for `source_type`, if any.
    pub fn get(&self, source_type: SourceType) -> Option<&SourceLink> {
        self.entries
            .iter()
            .find(|entry| entry.source_type == source_type)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceLink> {
        self.entries.iter()
    }
}
