//! Deterministic DOM rendering of the preview view model.
//!
//! All DOM writes of the controller funnel through [`render`], so the
//! visible preview is always a pure function of the last applied
//! [`PreviewViewModel`].

use preview_core::{PreviewViewModel, NO_PREVIEW_TEXT};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::config::PreviewConfig;

/// Class toggling the loading indicator's visibility.
const HIDDEN_CLASS: &str = "hidden";

/// The DOM region the preview is rendered into.
#[derive(Debug, Clone)]
pub struct PreviewSurface {
    document: Document,
    container: Element,
    spinner: Element,
}

impl PreviewSurface {
    pub fn new(document: Document, container: Element, spinner: Element) -> Self {
        Self {
            document,
            container,
            spinner,
        }
    }

    /// Resolve the surface from the contract ids in `config`.
    pub fn from_config(document: &Document, config: &PreviewConfig) -> Result<Self, JsValue> {
        let container = require_element(document, &config.container_id)?;
        let spinner = require_element(document, &config.spinner_id)?;
        Ok(Self::new(document.clone(), container, spinner))
    }
}

/// Look up a contract element, failing with its id in the message.
pub(crate) fn require_element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing preview element #{}", id)))
}

/// Replace the preview region with the given state.
///
/// The container is cleared on every call; the loading indicator is
/// visible exactly while the model is [`PreviewViewModel::Loading`].
pub fn render(surface: &PreviewSurface, model: &PreviewViewModel) -> Result<(), JsValue> {
    match model {
        PreviewViewModel::Loading => {
            surface.spinner.class_list().remove_1(HIDDEN_CLASS)?;
            surface.container.set_inner_html("");
        }
        PreviewViewModel::Pages(pages) => {
            surface.spinner.class_list().add_1(HIDDEN_CLASS)?;
            surface.container.set_inner_html("");
            for page in pages {
                let wrapper = surface.document.create_element("div")?;
                wrapper.set_class_name("preview-page-wrapper");

                let label = surface.document.create_element("p")?;
                label.set_class_name("preview-page-label");
                label.set_text_content(Some(&page.label()));

                let image = surface.document.create_element("img")?;
                image.set_class_name("preview-image");
                image.set_attribute("src", &page.src)?;
                image.set_attribute("alt", &page.alt_text())?;

                wrapper.append_child(&label)?;
                wrapper.append_child(&image)?;
                surface.container.append_child(&wrapper)?;
            }
        }
        PreviewViewModel::Empty => {
            surface.spinner.class_list().add_1(HIDDEN_CLASS)?;
            surface.container.set_text_content(Some(NO_PREVIEW_TEXT));
        }
        PreviewViewModel::Error(message) => {
            surface.spinner.class_list().add_1(HIDDEN_CLASS)?;
            surface.container.set_inner_html("");
            let paragraph = surface.document.create_element("p")?;
            paragraph.set_class_name("preview-error");
            paragraph.set_text_content(Some(&format!("Error: {}", message)));
            surface.container.append_child(&paragraph)?;
        }
    }
    Ok(())
}

/// Render, logging instead of propagating DOM failures.
///
/// Event and future callbacks have nowhere to return an error to.
pub(crate) fn apply(surface: &PreviewSurface, model: &PreviewViewModel) {
    if let Err(err) = render(surface, model) {
        web_sys::console::error_1(&err);
    }
}
