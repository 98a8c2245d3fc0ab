//! Functions exported to JavaScript
//!
//! The module boots itself on page-ready (see `run_on_page_ready`); the
//! exports below let a page re-boot pieces with its own configuration or
//! inspect carousel state.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event};

use crate::app::{StudentPage, MAIN_GRID_ID};
use crate::components::Jumbotron;
use crate::config::PageConfig;
use crate::dom::logout_page::LOGOUT_BUTTON_IDS;
use crate::dom::{self, DomLogoutPage, HttpLogoutTransport, Listener};
use crate::error::UiError;
use crate::logout::perform_logout;

use super::helpers::{config_from_js, serialize};

/// Attribute on `<body>` holding a JSON `PageConfig` override
pub const CONFIG_ATTRIBUTE: &str = "data-page-config";

// Booted pieces live here so their listeners stay attached
thread_local! {
    static STUDENT_PAGE: RefCell<Option<Rc<StudentPage>>> = RefCell::new(None);
    static LOGOUT_LISTENERS: RefCell<Vec<Listener>> = RefCell::new(Vec::new());
    static JUMBOTRONS: RefCell<Vec<Jumbotron>> = RefCell::new(Vec::new());
    static READY_LISTENER: RefCell<Option<Listener>> = RefCell::new(None);
}

/// Boot (or re-boot) the student page carousel with an optional config object
#[wasm_bindgen(js_name = bootStudentPage)]
pub fn boot_student_page(config: JsValue) -> Result<(), JsValue> {
    let config = config_from_js(config)?;
    install_student_page(config)?;
    Ok(())
}

/// Wire the logout buttons; returns how many were found
#[wasm_bindgen(js_name = bootLogout)]
pub fn boot_logout(config: JsValue) -> Result<usize, JsValue> {
    let config = config_from_js(config)?;
    Ok(install_logout(&config)?)
}

/// Serialized state of carousel `group_id`, or `null` if there is none
#[wasm_bindgen(js_name = getCarouselSnapshot)]
pub fn get_carousel_snapshot(group_id: &str) -> Result<JsValue, JsValue> {
    let state = STUDENT_PAGE.with(|slot| {
        slot.borrow()
            .as_ref()
            .and_then(|page| page.registry().borrow().get(group_id).cloned())
    });
    match state {
        Some(state) => serialize(&state, "Failed to serialize carousel state"),
        None => Ok(JsValue::NULL),
    }
}

/// Run the page setup now, or on `DOMContentLoaded` if the document is
/// still loading
pub fn run_on_page_ready() -> Result<(), UiError> {
    let document = dom::document()?;
    if is_loading_state(&document.ready_state()) {
        let listener = Listener::attach(&document, "DOMContentLoaded", |_: Event| on_dom_ready())?;
        READY_LISTENER.with(|slot| *slot.borrow_mut() = Some(listener));
    } else {
        on_dom_ready();
    }
    Ok(())
}

/// `document.readyState` before `DOMContentLoaded` has fired
pub fn is_loading_state(ready_state: &str) -> bool {
    ready_state == "loading"
}

fn on_dom_ready() {
    log::info!("dom ready");

    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            log::error!("{}", err);
            return;
        }
    };
    let config = page_config(&document);

    let jumbotrons = Jumbotron::mount_all(&document);
    JUMBOTRONS.with(|slot| *slot.borrow_mut() = jumbotrons);

    match install_logout(&config) {
        Ok(0) => log::debug!("No logout buttons on this page"),
        Ok(count) => log::debug!("Logout wired to {} buttons", count),
        Err(err) => log::error!("Logout setup failed: {}", err),
    }

    if document.get_element_by_id(MAIN_GRID_ID).is_some() {
        if let Err(err) = install_student_page(config) {
            log::error!("Student page setup failed: {}", err);
        }
    }
}

/// Config from the `<body>` attribute, defaults when absent or invalid
fn page_config(document: &Document) -> PageConfig {
    let raw = match document.body().and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE)) {
        Some(raw) => raw,
        None => return PageConfig::default(),
    };
    serde_json::from_str(&raw).unwrap_or_else(|err| {
        log::warn!("Ignoring invalid {}: {}", CONFIG_ATTRIBUTE, err);
        PageConfig::default()
    })
}

fn install_student_page(config: PageConfig) -> Result<(), UiError> {
    // Dropping the previous page detaches its listeners
    STUDENT_PAGE.with(|slot| slot.borrow_mut().take());
    let page = StudentPage::boot(config)?;
    STUDENT_PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    Ok(())
}

fn install_logout(config: &PageConfig) -> Result<usize, UiError> {
    let window = dom::window()?;
    let document = dom::document()?;
    let page = Rc::new(DomLogoutPage::new(window, document.clone(), config));
    let transport = Rc::new(HttpLogoutTransport::new(config));

    let mut listeners = Vec::new();
    for id in LOGOUT_BUTTON_IDS {
        let button = match document.get_element_by_id(id) {
            Some(button) => button,
            None => continue,
        };
        let page = page.clone();
        let transport = transport.clone();
        listeners.push(Listener::attach(&button, "click", move |_: Event| {
            let page = page.clone();
            let transport = transport.clone();
            spawn_local(async move {
                // Failures are already logged and surfaced to the user
                let _ = perform_logout(page.as_ref(), transport.as_ref()).await;
            });
        })?);
    }

    let count = listeners.len();
    LOGOUT_LISTENERS.with(|slot| *slot.borrow_mut() = listeners);
    Ok(count)
}
