// ── Core error types ──
//
// View-facing errors. Consumers render these in an error surface, so
// the two variants carry exactly the text to show -- no status codes,
// no JSON internals. The `From<citadel_api::Error>` impl folds the
// transport-layer taxonomy into this pair.

use thiserror::Error;

/// The two failure families a view can surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The request failed: transport trouble or a non-success status
    /// (including "not found").
    #[error("{message}")]
    Fetch { message: String },

    /// The response arrived but its body was not the expected shape.
    #[error("{message}")]
    Parse { message: String },
}

impl Error {
    /// The text an error surface displays.
    pub fn message(&self) -> &str {
        match self {
            Self::Fetch { message } | Self::Parse { message } => message,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<citadel_api::Error> for Error {
    fn from(err: citadel_api::Error) -> Self {
        match err {
            citadel_api::Error::Api { message, .. } => Self::Fetch { message },
            citadel_api::Error::Transport(e) => Self::Fetch {
                message: e.to_string(),
            },
            citadel_api::Error::InvalidUrl(e) => Self::Fetch {
                message: e.to_string(),
            },
            citadel_api::Error::Deserialization { message, .. } => Self::Parse { message },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn api_error_keeps_remote_message() {
        let err = Error::from(citadel_api::Error::Api {
            status: 404,
            message: "Character not found".to_owned(),
        });
        assert_eq!(
            err,
            Error::Fetch {
                message: "Character not found".to_owned()
            }
        );
        assert_eq!(err.message(), "Character not found");
    }

    #[test]
    fn deserialization_becomes_parse() {
        let err = Error::from(citadel_api::Error::Deserialization {
            message: "expected value at line 1".to_owned(),
            body: "<!doctype html>".to_owned(),
        });
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn display_is_just_the_message() {
        let err = Error::Fetch {
            message: "There is nothing here".to_owned(),
        };
        assert_eq!(err.to_string(), "There is nothing here");
    }
}
