// citadel-api: Async Rust client for the Rick and Morty catalog API

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::Client;
pub use error::Error;
pub use transport::TransportConfig;
