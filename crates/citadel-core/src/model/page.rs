// ── Pagination state ──

use serde::{Deserialize, Serialize};

/// The catalog's only cross-render state: which page is showing and
/// how many pages exist.
///
/// Owned by the app and passed through the catalog operations.
/// Committed only after a page fetch succeeds, so a failed page change
/// leaves it untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    current: u32,
    total: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current: 1,
            total: 1,
        }
    }
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Whether a page request should be issued at all. Anything
    /// outside `1..=total` is a silent no-op for the caller.
    pub fn accepts(&self, page: u32) -> bool {
        (1..=self.total).contains(&page)
    }

    /// `false` exactly on page 1.
    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    /// `false` exactly on the last page.
    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    /// Commit a successful page load.
    pub fn apply(&mut self, page: u32, total: u32) {
        self.current = page;
        self.total = total.max(1);
    }
}
