//! Domain layer between `citadel-api` and the terminal UI.
//!
//! This crate owns everything the UI needs that is not rendering:
//!
//! - **Domain model** ([`model`]): [`Character`] / [`CharacterProfile`]
//!   view projections, [`PageState`] pagination state, and the
//!   [`StatusCategory`] badge mapping.
//!
//! - **Routing** ([`route`], [`router`]): the fragment decoder
//!   ([`Route::parse`]), the [`Location`] fragment-plus-history owner,
//!   and the [`Router`] state machine that turns route changes into
//!   [`Transition`]s.
//!
//! - **Fetch bookkeeping** ([`generation`]): monotonic [`FetchToken`]s
//!   that let the UI discard completions superseded by a later
//!   navigation.
//!
//! - **[`CatalogService`]**: async read facade over
//!   [`citadel_api::Client`], returning domain types and core
//!   [`Error`]s so UI crates never touch wire types.

pub mod catalog;
pub mod convert;
pub mod error;
pub mod generation;
pub mod model;
pub mod route;
pub mod router;

// ── Primary re-exports ──────────────────────────────────────────────
pub use catalog::{CatalogPage, CatalogService};
pub use error::Error;
pub use generation::{FetchToken, Generation};
pub use route::{Location, Route};
pub use router::{Router, Transition};

// Client construction, re-exported so binaries need only this crate.
pub use citadel_api::{Client, TransportConfig};

// Model types live at the crate root too, next to the service that
// returns them.
pub use model::{Character, CharacterProfile, PageState, StatusCategory};
