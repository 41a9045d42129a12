use thiserror::Error;

/// Everything that can go wrong between building a request and getting
/// a usable value back.
///
/// Two families: the request never produced a body (`Transport`,
/// `InvalidUrl`), or a body arrived and was wrong (`Api`,
/// `Deserialization`). `citadel-core` folds these into the pair of
/// errors the UI shows.
#[derive(Debug, Error)]
pub enum Error {
    /// The request died in transit: connrefused, DNS, timeout, TLS.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The base URL or a path joined onto it did not parse.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Non-success status, with the message from the `{"error": …}`
    /// body when the server sent one.
    #[error("server returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// The body was not the shape serde was asked for. Keeps the raw
    /// text so logs show what actually came back.
    #[error("unexpected response body: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// True when the server said the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Api { status: 404, .. } => true,
            _ => false,
        }
    }

    /// True when no response body was ever read.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::InvalidUrl(_))
    }
}
