//! Small reusable rendering helpers.

pub mod status_badge;
