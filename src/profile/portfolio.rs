//! Portfolio entries edited alongside a profile. The sequence order is the
//! display order.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One portfolio entry as held by the edit surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: Uuid,
    pub url: String,
    pub title: String,
    pub description: String,
}

impl PortfolioItem {
    /// A fresh empty entry with a generated id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            url: String::new(),
            title: String::new(),
            description: String::new(),
        }
    }
}

impl Default for PortfolioItem {
    fn default() -> Self {
        Self::new()
    }
}

impl From<PortfolioItemRow> for PortfolioItem {
    fn from(row: PortfolioItemRow) -> Self {
        Self {
            id: row.id,
            url: row.url,
            title: row.title,
            description: row.description,
        }
    }
}

/// Stored form of a portfolio entry; `position` keeps the display order
/// across loads.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioItemRow {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub url: String,
    pub title: String,
    pub description: String,
    pub position: i32,
}

/// Insert payload when the stored set is replaced on save.
#[derive(Debug, Clone, Serialize)]
pub struct NewPortfolioItem {
    pub profile_id: Uuid,
    pub url: String,
    pub title: String,
    pub description: String,
    pub position: i32,
}
