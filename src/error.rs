//! trivia-query error types

/// trivia-query error types
#[derive(Debug, thiserror::Error)]
pub enum TriviaError {
    // Endpoint/network errors
    /// The endpoint answered with a non-2xx status.
    #[error("Trivia request failed ({status})")]
    Http { status: u16 },

    /// Network failure; carries the underlying message verbatim.
    #[error("{0}")]
    Transport(String),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to decode trivia response: {0}")]
    Decode(String),

    /// The session owning the request was superseded or disposed.
    ///
    /// Never published to callers; the controller swallows it.
    #[error("request cancelled")]
    Cancelled,

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl TriviaError {
    /// Whether this error is a silent cancellation rather than a failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, TriviaError::Cancelled)
    }

    /// HTTP status code, if the error came from a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            TriviaError::Http { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TriviaError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TriviaError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            TriviaError::Http {
                status: status.as_u16(),
            }
        } else {
            TriviaError::Transport(err.to_string())
        }
    }
}

/// Result type alias for trivia-query operations
pub type Result<T> = std::result::Result<T, TriviaError>;
