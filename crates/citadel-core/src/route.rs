// ── Fragment routing ──
//
// The fragment string (the part after `#` in a browser URL) is the
// only navigation state the app has. It is decoded exactly once, here;
// everything else works with the decoded `Route`.

use std::fmt;

/// Where the UI is: the catalog grid or one character's detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Catalog,
    Detail(u64),
}

impl Route {
    /// Decode a fragment string.
    ///
    /// An optional leading `#` is stripped. A positive integer selects
    /// the detail view; the empty string and anything unrecognized
    /// (zero, negative, non-numeric) mean the catalog.
    pub fn parse(fragment: &str) -> Self {
        let raw = fragment.strip_prefix('#').unwrap_or(fragment);
        match raw.parse::<u64>() {
            Ok(id) if id > 0 => Self::Detail(id),
            _ => Self::Catalog,
        }
    }

    /// The canonical fragment for this route (`""` / `"#183"`).
    pub fn fragment(&self) -> String {
        match self {
            Self::Catalog => String::new(),
            Self::Detail(id) => format!("#{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog => write!(f, "catalog"),
            Self::Detail(id) => write!(f, "character {id}"),
        }
    }
}

/// Owner of the fragment string plus a back-history, standing in for
/// the browser's address bar and history stack.
#[derive(Debug, Default)]
pub struct Location {
    fragment: String,
    history: Vec<String>,
}

impl Location {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a pre-set fragment (deep link).
    pub fn with_fragment(fragment: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
            history: Vec::new(),
        }
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Set the fragment, recording the old value in history. Returns
    /// `false` when the value did not change -- setting it to itself is
    /// not a navigation event.
    pub fn set(&mut self, fragment: impl Into<String>) -> bool {
        let fragment = fragment.into();
        if fragment == self.fragment {
            return false;
        }
        self.history
            .push(std::mem::replace(&mut self.fragment, fragment));
        true
    }

    /// Replace the fragment without touching history. Used when the
    /// router normalizes a junk fragment to the catalog's empty one.
    pub fn replace(&mut self, fragment: impl Into<String>) {
        self.fragment = fragment.into();
    }

    /// Pop the most recent previous fragment and make it current.
    /// `None` when there is no history to go back to.
    pub fn back(&mut self) -> Option<&str> {
        let previous = self.history.pop()?;
        self.fragment = previous;
        Some(&self.fragment)
    }
}
