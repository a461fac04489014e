//! The preview controller: event wiring, debounce, and refresh lifecycle.
//!
//! One controller instance owns the whole interaction loop. Field events
//! reset the debounce window; when it elapses, a refresh snapshots the
//! form, POSTs it, and renders the outcome. Overlapping refreshes are
//! allowed in flight, but only the latest one may write to the DOM.

use std::cell::RefCell;
use std::rc::Rc;

use preview_core::{PreviewViewModel, RefreshSequence, RefreshTrigger};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, EventTarget, FormData, HtmlFormElement, HtmlInputElement};

use crate::config::PreviewConfig;
use crate::debounce::Debounce;
use crate::net;
use crate::render::{self, require_element, PreviewSurface};

/// Mutable refresh state shared between event closures and in-flight
/// refreshes.
struct RefreshState {
    debounce: Debounce,
    sequence: RefreshSequence,
    detached: bool,
}

/// Everything a field event or response completion needs to drive a
/// refresh. Cheap to clone into closures.
#[derive(Clone)]
struct RefreshContext {
    surface: PreviewSurface,
    form: HtmlFormElement,
    endpoint: String,
    state: Rc<RefCell<RefreshState>>,
}

impl RefreshContext {
    /// Reset the quiet window; the refresh runs once it elapses.
    fn schedule_refresh(&self) {
        let mut state = self.state.borrow_mut();
        if state.detached {
            return;
        }
        let context = self.clone();
        state.debounce.poke(move || context.refresh_now());
    }

    /// Start a refresh immediately: show the loading state, snapshot the
    /// form, and send it. Completion only touches the DOM if no newer
    /// refresh has started in the meantime.
    fn refresh_now(&self) {
        let ticket = {
            let mut state = self.state.borrow_mut();
            if state.detached {
                return;
            }
            state.sequence.issue()
        };

        render::apply(&self.surface, &PreviewViewModel::Loading);

        let snapshot = match FormData::new_with_form(&self.form) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                web_sys::console::error_1(&err);
                render::apply(
                    &self.surface,
                    &PreviewViewModel::Error("Could not read form fields".to_string()),
                );
                return;
            }
        };

        let context = self.clone();
        spawn_local(async move {
            let outcome = net::request_preview(&context.endpoint, &snapshot).await;
            {
                let state = context.state.borrow();
                // A newer refresh owns the DOM (and the loading indicator).
                if state.detached || !state.sequence.is_current(ticket) {
                    return;
                }
            }
            let model = match outcome {
                Ok(model) => model,
                Err(err) => {
                    web_sys::console::error_1(&JsValue::from_str(&format!(
                        "Error fetching preview: {}",
                        err
                    )));
                    PreviewViewModel::Error(err.message().to_string())
                }
            };
            render::apply(&context.surface, &model);
        });
    }
}

/// A field listener kept around so it can be removed at detach time.
struct FieldListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

/// Keeps the rendered preview in sync with the form, with bounded request
/// frequency.
#[wasm_bindgen]
pub struct PreviewController {
    context: RefreshContext,
    listeners: Vec<FieldListener>,
}

impl PreviewController {
    /// Attach to the page described by `config` and fire the initial
    /// refresh.
    ///
    /// # Errors
    /// Fails if a contract element is missing or listener wiring fails;
    /// nothing is rendered in that case.
    pub fn attach_with(config: PreviewConfig) -> Result<Self, JsValue> {
        let window =
            web_sys::window().ok_or_else(|| JsValue::from_str("No window object available"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document object available"))?;

        let form: HtmlFormElement = require_element(&document, &config.form_id)?
            .dyn_into()
            .map_err(|_| {
                JsValue::from_str(&format!("#{} is not a form element", config.form_id))
            })?;
        let surface = PreviewSurface::from_config(&document, &config)?;

        let state = Rc::new(RefCell::new(RefreshState {
            debounce: Debounce::new(config.debounce_ms),
            sequence: RefreshSequence::new(),
            detached: false,
        }));

        let context = RefreshContext {
            surface,
            form: form.clone(),
            endpoint: config.endpoint.clone(),
            state,
        };

        let listeners = wire_field_listeners(&form, &config, &context)?;

        // Initial preview, before any field interaction.
        context.refresh_now();

        Ok(Self { context, listeners })
    }

    /// Remove all field listeners and cancel any pending refresh.
    ///
    /// Idempotent. After this the controller never writes to the DOM
    /// again, even if an in-flight response arrives later.
    pub fn detach(&mut self) {
        {
            let mut state = self.context.state.borrow_mut();
            state.detached = true;
            state.debounce.cancel();
        }
        for listener in self.listeners.drain(..) {
            let _ = listener.target.remove_event_listener_with_callback(
                listener.event,
                listener.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

#[wasm_bindgen]
impl PreviewController {
    /// Attach using the default page contract.
    #[wasm_bindgen(js_name = attach)]
    pub fn attach_default() -> Result<PreviewController, JsValue> {
        Self::attach_with(PreviewConfig::default())
    }

    /// Attach with a JSON config; absent fields use the defaults.
    #[wasm_bindgen(js_name = attachWithConfig)]
    pub fn attach_with_config(json: &str) -> Result<PreviewController, JsValue> {
        let config = PreviewConfig::from_json(json).map_err(|e| JsValue::from_str(&e))?;
        Self::attach_with(config)
    }

    /// Remove listeners and cancel pending work (JS-facing detach).
    #[wasm_bindgen(js_name = detach)]
    pub fn detach_wasm(&mut self) {
        self.detach();
    }
}

impl Drop for PreviewController {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Subscribe one listener per auto-update field, with the event chosen by
/// the field's trigger classification.
fn wire_field_listeners(
    form: &HtmlFormElement,
    config: &PreviewConfig,
    context: &RefreshContext,
) -> Result<Vec<FieldListener>, JsValue> {
    let fields = form.query_selector_all(&config.field_selector())?;
    let mut listeners = Vec::with_capacity(fields.length() as usize);

    for index in 0..fields.length() {
        let node = match fields.get(index) {
            Some(node) => node,
            None => continue,
        };
        let element: Element = match node.dyn_into() {
            Ok(element) => element,
            Err(_) => continue,
        };

        let trigger = RefreshTrigger::for_field_type(&field_type(&element));
        let event = trigger.dom_event_name();

        let callback = {
            let context = context.clone();
            Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
                context.schedule_refresh();
            })
        };
        element.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;

        listeners.push(FieldListener {
            target: element.into(),
            event,
            callback,
        });
    }

    Ok(listeners)
}

/// The DOM-reported type used for trigger classification.
fn field_type(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.type_()
    } else {
        // Selects and textareas commit on change regardless of tag.
        element.tag_name().to_ascii_lowercase()
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn test_config(suffix: &str) -> PreviewConfig {
        PreviewConfig {
            form_id: format!("form-{}", suffix),
            container_id: format!("container-{}", suffix),
            spinner_id: format!("spinner-{}", suffix),
            debounce_ms: 20,
            ..PreviewConfig::default()
        }
    }

    /// Build the page contract under a removable root element.
    fn build_page(config: &PreviewConfig) -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let body = document.body().unwrap();
        let root = document.create_element("div").unwrap();

        let form = document.create_element("form").unwrap();
        form.set_id(&config.form_id);

        let text = document.create_element("input").unwrap();
        text.set_attribute("type", "text").unwrap();
        text.set_attribute("name", "default_text").unwrap();
        text.set_class_name(&config.field_class);
        form.append_child(&text).unwrap();

        let checkbox = document.create_element("input").unwrap();
        checkbox.set_attribute("type", "checkbox").unwrap();
        checkbox.set_attribute("name", "skip_last").unwrap();
        checkbox.set_class_name(&config.field_class);
        form.append_child(&checkbox).unwrap();

        let container = document.create_element("div").unwrap();
        container.set_id(&config.container_id);
        let spinner = document.create_element("div").unwrap();
        spinner.set_id(&config.spinner_id);
        spinner.set_class_name("hidden");

        root.append_child(&form).unwrap();
        root.append_child(&container).unwrap();
        root.append_child(&spinner).unwrap();
        body.append_child(&root).unwrap();
        root
    }

    fn spinner(config: &PreviewConfig) -> Element {
        web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .get_element_by_id(&config.spinner_id)
            .unwrap()
    }

    fn first_field(config: &PreviewConfig) -> Element {
        web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .get_element_by_id(&config.form_id)
            .unwrap()
            .query_selector("input")
            .unwrap()
            .unwrap()
    }

    #[wasm_bindgen_test]
    fn test_attach_fires_initial_refresh() {
        let config = test_config("initial");
        let root = build_page(&config);

        let mut controller = PreviewController::attach_with(config.clone()).unwrap();
        // The loading state renders synchronously, before any field
        // interaction and before the response arrives.
        assert!(!spinner(&config).class_list().contains("hidden"));

        controller.detach();
        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_attach_fails_without_contract_elements() {
        // No fixture built, so the form id resolves to nothing.
        let config = test_config("missing");
        assert!(PreviewController::attach_with(config).is_err());
    }

    #[wasm_bindgen_test]
    fn test_field_event_schedules_debounced_refresh() {
        let config = test_config("schedule");
        let root = build_page(&config);

        let mut controller = PreviewController::attach_with(config.clone()).unwrap();
        assert!(!controller.context.state.borrow().debounce.is_pending());

        let event = web_sys::Event::new("input").unwrap();
        first_field(&config).dispatch_event(&event).unwrap();
        assert!(controller.context.state.borrow().debounce.is_pending());

        controller.detach();
        assert!(!controller.context.state.borrow().debounce.is_pending());
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn test_detach_stops_refreshes() {
        let config = test_config("detach");
        let root = build_page(&config);

        let mut controller = PreviewController::attach_with(config.clone()).unwrap();
        controller.detach();

        // Whatever the initial refresh did, force the indicator hidden so
        // any later refresh would be observable as it reappearing.
        spinner(&config).set_class_name("hidden");

        let event = web_sys::Event::new("input").unwrap();
        first_field(&config).dispatch_event(&event).unwrap();

        TimeoutFuture::new(100).await;
        assert!(spinner(&config).class_list().contains("hidden"));
        root.remove();
    }
}
