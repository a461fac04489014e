//! Fetch plumbing for the preview endpoint.

use preview_core::{interpret_failure, interpret_success, PreviewError, PreviewViewModel};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};

/// POST the form snapshot to the preview endpoint and interpret the reply.
///
/// The `FormData` body makes the browser send a multipart payload with all
/// field values verbatim; no Content-Type header is set so the browser can
/// supply the boundary. Interpretation of the body is deferred to
/// `preview-core`, keeping this function pure transport.
pub async fn request_preview(
    endpoint: &str,
    snapshot: &FormData,
) -> Result<PreviewViewModel, PreviewError> {
    let window = web_sys::window()
        .ok_or_else(|| PreviewError::Transport("No window object available".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(snapshot.as_ref());

    let request = Request::new_with_str_and_init(endpoint, &opts).map_err(transport)?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| PreviewError::Transport("Unexpected fetch result".to_string()))?;

    let body = JsFuture::from(response.text().map_err(transport)?)
        .await
        .map_err(transport)?
        .as_string()
        .unwrap_or_default();

    if response.ok() {
        interpret_success(&body)
    } else {
        Err(interpret_failure(response.status(), &body))
    }
}

/// Map an opaque JS failure into the transport error bucket.
fn transport(err: JsValue) -> PreviewError {
    let text = err
        .as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| "Network request failed".to_string());
    PreviewError::Transport(text)
}
