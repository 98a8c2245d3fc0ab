//! Browser bindings
//!
//! Everything in here touches `web-sys` and only works inside a browser.
//! The rest of the crate reaches the page through the traits these types
//! implement.

pub mod carousel_view;
pub mod frames;
pub mod http;
pub mod logout_page;
pub mod stage;
pub mod timer;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::UiError;

pub use frames::AnimationFrames;
pub use http::{HttpLogoutTransport, HttpStudentSource};
pub use logout_page::DomLogoutPage;
pub use stage::DomStage;
pub use timer::BrowserSleep;

// ============================================================================
// Lookup helpers
// ============================================================================

pub fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or_else(|| UiError::MissingElement("window".to_string()))
}

pub fn document() -> Result<Document, UiError> {
    window()?
        .document()
        .ok_or_else(|| UiError::MissingElement("document".to_string()))
}

/// Element by id, or `MissingElement`
pub fn element_by_id(document: &Document, id: &str) -> Result<Element, UiError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| UiError::MissingElement(id.to_string()))
}

pub fn html_element_by_id(document: &Document, id: &str) -> Result<HtmlElement, UiError> {
    into_html(element_by_id(document, id)?)
}

pub fn into_html(element: Element) -> Result<HtmlElement, UiError> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|el| UiError::Js(format!("<{}> is not an HTMLElement", el.tag_name())))
}

/// All elements under `root` matching `selector`
pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, UiError> {
    let nodes = root.query_selector_all(selector).map_err(UiError::from_js)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

// ============================================================================
// Event listeners
// ============================================================================

/// An event listener that is removed from its target when dropped
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn attach(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, UiError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(UiError::from_js)?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
