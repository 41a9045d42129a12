//! Wire types for the Rick and Morty catalog API.
//!
//! All types match the JSON responses from the `/character` endpoints.
//! The list and detail endpoints both return full character objects;
//! projecting them down to what a view actually shows is
//! `citadel-core`'s job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Pagination ───────────────────────────────────────────────────────

/// One page of the character catalog, from `GET /character`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterPage {
    pub info: PageInfo,
    pub results: Vec<CharacterRecord>,
}

/// Paging metadata, the `info` object on list responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total records across all pages.
    pub count: u32,
    /// Total page count.
    pub pages: u32,
    /// Absolute URL of the next page, if any.
    pub next: Option<String>,
    /// Absolute URL of the previous page, if any.
    pub prev: Option<String>,
}

// ── Characters ───────────────────────────────────────────────────────

/// A character, from `GET /character/{id}` and list `results` entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: u64,
    pub name: String,
    /// One of: `Alive`, `Dead`, `unknown`.
    pub status: String,
    pub species: String,
    /// Subspecies or variant; empty string when the API has none.
    #[serde(rename = "type")]
    pub kind: String,
    /// One of: `Female`, `Male`, `Genderless`, `unknown`.
    pub gender: String,
    pub origin: LocationRef,
    pub location: LocationRef,
    /// Portrait URL (300x300 avatar).
    pub image: String,
    /// URLs of the episodes this character appears in.
    pub episode: Vec<String>,
    pub url: String,
    /// When the record entered the remote database.
    pub created: DateTime<Utc>,
}

/// Name + URL reference to a location resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRef {
    pub name: String,
    pub url: String,
}
