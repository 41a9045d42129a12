// ── Status display categories ──

use serde::{Deserialize, Serialize};

/// Display category for a character's status badge.
///
/// The remote reports status as free text. A badge only ever renders
/// one of these three categories; unrecognized text lands on `Unknown`
/// rather than turning arbitrary strings into style selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCategory {
    Alive,
    Dead,
    Unknown,
}

impl StatusCategory {
    /// Map raw status text to its display category, case-insensitively.
    pub fn classify(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "alive" => Self::Alive,
            "dead" => Self::Dead,
            // The remote's own "unknown" and any unrecognized value
            // share the fallback category.
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn known_values_classify_case_insensitively() {
        assert_eq!(StatusCategory::classify("Alive"), StatusCategory::Alive);
        assert_eq!(StatusCategory::classify("alive"), StatusCategory::Alive);
        assert_eq!(StatusCategory::classify("ALIVE"), StatusCategory::Alive);
        assert_eq!(StatusCategory::classify("Dead"), StatusCategory::Dead);
        assert_eq!(StatusCategory::classify("unknown"), StatusCategory::Unknown);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(StatusCategory::classify("  Dead "), StatusCategory::Dead);
    }

    #[test]
    fn unrecognized_values_fall_back_to_unknown() {
        assert_eq!(
            StatusCategory::classify("Presumed dead"),
            StatusCategory::Unknown
        );
        assert_eq!(StatusCategory::classify(""), StatusCategory::Unknown);
        assert_eq!(StatusCategory::classify("alive-ish"), StatusCategory::Unknown);
    }
}
