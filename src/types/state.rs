//! Published controller state

use super::response::TriviaResponse;

/// Snapshot of a controller's request state.
///
/// `data` survives failed sessions: an error is reported alongside the
/// last successfully loaded page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestState {
    pub data: Option<TriviaResponse>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl RequestState {
    /// Initial snapshot for a controller constructed with `enabled`.
    pub(crate) fn initial(enabled: bool) -> Self {
        Self {
            data: None,
            is_loading: enabled,
            error: None,
        }
    }

    pub fn is_success(&self) -> bool {
        !self.is_loading && self.error.is_none() && self.data.is_some()
    }

    pub fn is_error(&self) -> bool {
        !self.is_loading && self.error.is_some()
    }
}
