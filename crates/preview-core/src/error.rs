use thiserror::Error;

/// Failure modes of a preview refresh.
///
/// Both kinds are rendered identically; the split exists so callers can
/// tell "the service rejected this input" from "we never got a usable
/// answer".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreviewError {
    /// The request never produced a usable response: network failure,
    /// unreadable body, or malformed JSON.
    #[error("Preview request failed: {0}")]
    Transport(String),

    /// The service answered with a non-ok status and an error message.
    #[error("Preview generation failed: {0}")]
    Service(String),
}

impl PreviewError {
    /// The user-facing message text, without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            PreviewError::Transport(msg) | PreviewError::Service(msg) => msg,
        }
    }
}
