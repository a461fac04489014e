use serde::{Deserialize, Serialize};

use crate::error::PreviewError;
use crate::view_model::PreviewViewModel;

/// Wire shape of the preview endpoint's JSON body.
///
/// The service returns `pages` on success and `error` alongside a non-ok
/// status. Both fields are optional so a sparse body still deserializes;
/// what a missing field means is decided by the interpretation functions
/// below, not here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreviewResponse {
    #[serde(default)]
    pub pages: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PreviewResponse {
    /// Parse a response body, mapping parse failures to the transport
    /// error bucket.
    pub fn from_json(body: &str) -> Result<Self, PreviewError> {
        serde_json::from_str(body)
            .map_err(|e| PreviewError::Transport(format!("Invalid preview response: {}", e)))
    }
}

/// Interpret the body of an ok-status response.
pub fn interpret_success(body: &str) -> Result<PreviewViewModel, PreviewError> {
    let response = PreviewResponse::from_json(body)?;
    Ok(PreviewViewModel::from_pages(response.pages))
}

/// Interpret the body of a non-ok response.
///
/// Uses the server-supplied `error` text when present. A body that fails
/// to parse is itself the surfaced error; a parseable body without an
/// `error` field falls back to the HTTP status.
pub fn interpret_failure(status: u16, body: &str) -> PreviewError {
    match PreviewResponse::from_json(body) {
        Ok(response) => match response.error {
            Some(message) => PreviewError::Service(message),
            None => PreviewError::Service(format!("Preview service returned status {}", status)),
        },
        Err(transport) => transport,
    }
}
