// ── Catalog read facade ──
//
// The async seam between UI consumers and `citadel-api`: fetches
// return domain types and core errors, so UI crates never touch wire
// types or HTTP details.

use tracing::debug;

use citadel_api::Client;

use crate::error::Error;
use crate::model::character::{Character, CharacterProfile};

/// A successfully loaded catalog page.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    /// Entries in server order -- never re-sorted.
    pub characters: Vec<Character>,
    pub total_pages: u32,
}

/// Read-side facade over the catalog API.
pub struct CatalogService {
    client: Client,
}

impl CatalogService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetch one catalog page (1-based).
    pub async fn page(&self, page: u32) -> Result<CatalogPage, Error> {
        let wire = self.client.character_page(page).await?;
        debug!(page, results = wire.results.len(), "catalog page loaded");
        Ok(CatalogPage {
            total_pages: wire.info.pages,
            characters: wire.results.into_iter().map(Character::from).collect(),
        })
    }

    /// Fetch one character's full profile.
    pub async fn profile(&self, id: u64) -> Result<CharacterProfile, Error> {
        let record = self.client.character(id).await?;
        Ok(CharacterProfile::from(record))
    }
}
