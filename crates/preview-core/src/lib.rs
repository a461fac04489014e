//! Preview interpretation logic shared with the browser crate.
//!
//! This crate holds everything about the live preview that does not need a
//! DOM: the wire contract of the preview endpoint, the typed view model
//! the renderer consumes, field trigger classification, and the
//! latest-wins sequence guard for overlapping refreshes. The browser crate
//! (`labelsheet-wasm`) stays a thin layer of DOM and fetch plumbing on top.

pub mod error;
pub mod response;
pub mod sequence;
pub mod trigger;
pub mod view_model;

pub use error::PreviewError;
pub use response::{interpret_failure, interpret_success, PreviewResponse};
pub use sequence::{RefreshSequence, RefreshTicket};
pub use trigger::RefreshTrigger;
pub use view_model::{PageImage, PreviewViewModel, NO_PREVIEW_TEXT};
