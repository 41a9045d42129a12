// ── API-to-domain type conversions ──
//
// Bridges raw `citadel_api` wire types into `citadel_core::model`
// domain types. The wire carries the full remote schema; these impls
// project out exactly the fields the views show.

use url::Url;

use citadel_api::types::CharacterRecord;

use crate::model::character::{Character, CharacterProfile};

// ── Helpers ────────────────────────────────────────────────────────

/// Parse a URL string, silently dropping unparseable values.
fn parse_url(raw: &str) -> Option<Url> {
    Url::parse(raw).ok()
}

// ── Character ──────────────────────────────────────────────────────

impl From<CharacterRecord> for Character {
    fn from(record: CharacterRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            species: record.species,
            status: record.status,
            image: parse_url(&record.image),
        }
    }
}

impl From<CharacterRecord> for CharacterProfile {
    fn from(record: CharacterRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            species: record.species,
            gender: record.gender,
            status: record.status,
            image: parse_url(&record.image),
            location: record.location.name,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};
    use citadel_api::types::LocationRef;
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(id: u64) -> CharacterRecord {
        CharacterRecord {
            id,
            name: "Morty Smith".to_owned(),
            status: "Alive".to_owned(),
            species: "Human".to_owned(),
            kind: String::new(),
            gender: "Male".to_owned(),
            origin: LocationRef {
                name: "unknown".to_owned(),
                url: String::new(),
            },
            location: LocationRef {
                name: "Citadel of Ricks".to_owned(),
                url: "https://rickandmortyapi.com/api/location/3".to_owned(),
            },
            image: format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
            episode: vec!["https://rickandmortyapi.com/api/episode/1".to_owned()],
            url: format!("https://rickandmortyapi.com/api/character/{id}"),
            created: Utc.with_ymd_and_hms(2017, 11, 4, 18, 48, 46).unwrap(),
        }
    }

    #[test]
    fn record_projects_to_catalog_entry() {
        let character = Character::from(record(2));

        assert_eq!(character.id, 2);
        assert_eq!(character.name, "Morty Smith");
        assert_eq!(character.species, "Human");
        assert_eq!(character.status, "Alive");
        assert_eq!(
            character.image.unwrap().as_str(),
            "https://rickandmortyapi.com/api/character/avatar/2.jpeg"
        );
    }

    #[test]
    fn record_projects_to_profile() {
        let profile = CharacterProfile::from(record(2));

        assert_eq!(profile.gender, "Male");
        assert_eq!(profile.location, "Citadel of Ricks");
        assert!(profile.image.is_some());
    }

    #[test]
    fn unparseable_image_url_becomes_none() {
        let mut raw = record(2);
        raw.image = "not a url".to_owned();

        let character = Character::from(raw);
        assert_eq!(character.image, None);
    }
}
