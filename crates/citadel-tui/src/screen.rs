//! Identifiers for the routable views.

use std::fmt;

/// Which view the current route put on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    /// The paginated character grid.
    #[default]
    Catalog,
    /// One character's full profile.
    Detail,
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog => f.write_str("catalog"),
            Self::Detail => f.write_str("detail"),
        }
    }
}
