// ── Character domain types ──

use serde::{Deserialize, Serialize};
use url::Url;

use super::status::StatusCategory;

/// A catalog entry as the grid shows it: one row per character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: u64,
    pub name: String,
    pub species: String,
    /// Raw status text as the remote reports it (`Alive`, `Dead`, …).
    pub status: String,
    /// Portrait URL; `None` when the remote sent something unparseable.
    pub image: Option<Url>,
}

impl Character {
    /// Display category for the status badge.
    pub fn status_category(&self) -> StatusCategory {
        StatusCategory::classify(&self.status)
    }
}

/// The full attribute set the detail view shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterProfile {
    pub id: u64,
    pub name: String,
    pub species: String,
    pub gender: String,
    pub status: String,
    pub image: Option<Url>,
    /// Name of the character's last known location.
    pub location: String,
}

impl CharacterProfile {
    /// Display category for the status badge (same rule as the grid).
    pub fn status_category(&self) -> StatusCategory {
        StatusCategory::classify(&self.status)
    }
}
