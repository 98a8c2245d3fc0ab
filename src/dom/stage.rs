//! The carousel stage in the page

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element, HtmlElement};

use crate::carousel::{CarouselRegistry, CarouselState, Transition};
use crate::config::PageConfig;
use crate::error::UiError;
use crate::loader::Stage;

use super::carousel_view::{bind_carousel, materialize_clones, original_cards, render_carousel};
use super::{into_html, Listener};

/// Class that keeps a carousel container transparent
pub const HIDDEN_CLASS: &str = "opacity-0";

pub struct DomStage {
    document: Document,
    stage: Element,
    spinner: HtmlElement,
    registry: Rc<RefCell<CarouselRegistry>>,
    config: PageConfig,
    /// Listeners per carousel container, dropped with the container
    bindings: RefCell<HashMap<String, Vec<Listener>>>,
}

impl DomStage {
    pub fn new(
        document: Document,
        stage: Element,
        spinner: HtmlElement,
        registry: Rc<RefCell<CarouselRegistry>>,
        config: PageConfig,
    ) -> Self {
        Self {
            document,
            stage,
            spinner,
            registry,
            config,
            bindings: RefCell::new(HashMap::new()),
        }
    }

    pub fn stage_element(&self) -> &Element {
        &self.stage
    }

    fn group(&self, group_id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(group_id)
            .and_then(|el| into_html(el).ok())
    }

    /// Re-center carousel `group_id` without animation
    pub fn recenter(&self, group_id: &str) {
        let group = match self.group(group_id) {
            Some(group) => group,
            None => return,
        };
        let registry = self.registry.borrow();
        if let Some(state) = registry.get(group_id) {
            if let Err(err) = render_carousel(&group, state, Transition::Instant) {
                log::warn!("Recentering {} failed: {}", group_id, err);
            }
        }
    }
}

impl Stage for DomStage {
    fn fade_out(&self, group_id: &str) {
        if let Some(group) = self.group(group_id) {
            if let Err(err) = group.class_list().add_1(HIDDEN_CLASS) {
                log::warn!("Failed to fade out {}: {}", group_id, UiError::from_js(err));
            }
        }
    }

    fn set_spinner_visible(&self, visible: bool) {
        let display = if visible { "flex" } else { "none" };
        if let Err(err) = self.spinner.style().set_property("display", display) {
            log::warn!("Failed to set spinner display: {}", UiError::from_js(err));
        }
    }

    fn replace_content(&self, html: &str) -> Result<(), UiError> {
        self.bindings.borrow_mut().clear();
        self.stage.set_inner_html(html);
        Ok(())
    }

    fn card_count(&self, group_id: &str) -> usize {
        self.group(group_id)
            .and_then(|group| original_cards(&group).ok())
            .map(|cards| cards.len())
            .unwrap_or(0)
    }

    fn attach_carousel(&self, group_id: &str, state: &CarouselState) -> Result<(), UiError> {
        let group = self
            .group(group_id)
            .ok_or_else(|| UiError::MissingElement(group_id.to_string()))?;

        materialize_clones(&group, state)?;
        // Re-initializing a container replaces its old listeners
        self.bindings.borrow_mut().remove(group_id);
        let listeners = bind_carousel(&group, self.registry.clone(), self.config.transition_ms)?;
        self.bindings
            .borrow_mut()
            .insert(group_id.to_string(), listeners);

        // First layout once the freshly injected cards have a size
        let registry = self.registry.clone();
        let id = group_id.to_string();
        Timeout::new(self.config.initial_layout_delay_ms, move || {
            if let Some(state) = registry.borrow().get(&id) {
                if let Err(err) = render_carousel(&group, state, Transition::Instant) {
                    log::warn!("Initial layout of {} failed: {}", id, err);
                }
            }
        })
        .forget();
        Ok(())
    }

    fn reveal(&self, group_id: &str) {
        if let Some(group) = self.group(group_id) {
            if let Err(err) = group.class_list().remove_1(HIDDEN_CLASS) {
                log::warn!("Failed to reveal {}: {}", group_id, UiError::from_js(err));
            }
        }
    }
}
