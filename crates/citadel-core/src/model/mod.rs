// ── Domain model ──

pub mod character;
pub mod page;
pub mod status;

pub use character::{Character, CharacterProfile};
pub use page::PageState;
pub use status::StatusCategory;
