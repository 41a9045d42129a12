//! All possible UI actions. Actions are the sole mechanism for state mutation.

use std::sync::Arc;

use citadel_core::{Character, CharacterProfile, FetchToken};

/// Every state transition in the TUI is expressed as an Action.
///
/// Fetch completions carry the [`FetchToken`] minted when their request
/// started; the app loop discards any completion whose token is no
/// longer current instead of applying it to whatever view is showing.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Navigation ────────────────────────────────────────────────
    /// Set the location fragment (e.g. `"#183"`), as a card click
    /// would in a browser. The app reacts to the resulting fragment
    /// change; nothing navigates any other way.
    Navigate(String),
    /// Pop the location history (browser back).
    NavigateBack,
    /// Ask the catalog for another page. Out-of-range pages are
    /// silently ignored.
    RequestPage(u32),
    /// Re-fetch whatever the active view is showing.
    Reload,
    ToggleHelp,

    // ── Catalog fetch lifecycle ───────────────────────────────────
    CatalogLoading,
    CatalogLoaded {
        token: FetchToken,
        page: u32,
        total_pages: u32,
        characters: Arc<Vec<Character>>,
    },
    CatalogFailed {
        token: FetchToken,
        message: String,
    },

    // ── Detail fetch lifecycle ────────────────────────────────────
    DetailLoading {
        id: u64,
    },
    DetailLoaded {
        token: FetchToken,
        profile: Arc<CharacterProfile>,
    },
    DetailFailed {
        token: FetchToken,
        message: String,
    },
}
