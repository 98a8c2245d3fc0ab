//! Drawing a carousel into its container
//!
//! Container layout:
//! ```text
//! #school-group-{id}
//!   .slider-container
//!     .character-card[data-real-index] (.character-name label inside)
//!     .character-card[data-clone] (boundary copies)
//!   .nav-left / .nav-right
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, HtmlElement, Node};

use crate::carousel::layout::parse_px;
use crate::carousel::{CardMetrics, CarouselRegistry, CarouselState, Direction, Transition};
use crate::error::UiError;
use crate::models::CardStyle;

use super::{into_html, query_all, Listener};

pub const SLIDER_SELECTOR: &str = ".slider-container";
pub const CARD_SELECTOR: &str = ".character-card";
pub const LABEL_SELECTOR: &str = ".character-name";
/// Marks a card copied in by `materialize_clones`
pub const CLONE_ATTRIBUTE: &str = "data-clone";
const ORIGINAL_CARD_SELECTOR: &str = ".character-card:not([data-clone])";
const CLONE_CARD_SELECTOR: &str = ".character-card[data-clone]";
/// Slide-end events; a cancelled slide must release the guard too
const SLIDE_END_EVENTS: [&str; 2] = ["transitionend", "transitioncancel"];

pub fn slider_of(group: &Element) -> Result<HtmlElement, UiError> {
    let slider = group
        .query_selector(SLIDER_SELECTOR)
        .map_err(UiError::from_js)?
        .ok_or_else(|| UiError::MissingElement(format!("#{} {}", group.id(), SLIDER_SELECTOR)))?;
    into_html(slider)
}

pub fn card_elements(root: &Element) -> Result<Vec<HtmlElement>, UiError> {
    query_all(root, CARD_SELECTOR)?
        .into_iter()
        .map(into_html)
        .collect()
}

/// Cards rendered by the server or the loader, clones excluded
pub fn original_cards(root: &Element) -> Result<Vec<HtmlElement>, UiError> {
    query_all(root, ORIGINAL_CARD_SELECTOR)?
        .into_iter()
        .map(into_html)
        .collect()
}

/// Size of `card`, margin read from its computed style
pub fn card_metrics(card: &HtmlElement) -> CardMetrics {
    let margin_right = web_sys::window()
        .and_then(|w| w.get_computed_style(card).ok().flatten())
        .and_then(|style| style.get_property_value("margin-right").ok())
        .map(|value| parse_px(&value))
        .unwrap_or(0.0);
    CardMetrics::new(f64::from(card.offset_width()), margin_right)
}

/// Lay the slider out as `state` says: center the current card and restyle
/// every card.
pub fn render_carousel(
    group: &HtmlElement,
    state: &CarouselState,
    transition: Transition,
) -> Result<(), UiError> {
    let slider = slider_of(group)?;
    let cards = card_elements(&slider)?;
    let first = match cards.first() {
        Some(card) => card,
        None => return Ok(()),
    };

    let frame = state.frame(f64::from(group.offset_width()), card_metrics(first), transition);

    let style = slider.style();
    style
        .set_property("transition-duration", &frame.transition.duration_css())
        .map_err(UiError::from_js)?;
    style
        .set_property("transition-timing-function", frame.transition.timing_function_css())
        .map_err(UiError::from_js)?;
    style
        .set_property("transform", &frame.transform_css())
        .map_err(UiError::from_js)?;

    for (card, card_style) in cards.iter().zip(frame.card_styles.iter()) {
        apply_card_style(card, *card_style)?;
    }
    Ok(())
}

fn apply_card_style(card: &HtmlElement, card_style: CardStyle) -> Result<(), UiError> {
    let style = card.style();
    style
        .set_property("transform", card_style.transform())
        .map_err(UiError::from_js)?;
    style
        .set_property("opacity", card_style.opacity())
        .map_err(UiError::from_js)?;

    let classes = card.class_list();
    if card_style.is_grayscale() {
        classes.add_1("grayscale").map_err(UiError::from_js)?;
    } else {
        classes.remove_1("grayscale").map_err(UiError::from_js)?;
    }

    if let Some(label) = card.query_selector(LABEL_SELECTOR).map_err(UiError::from_js)? {
        let [off_a, off_b] = card_style.label_classes_off();
        let [on_a, on_b] = card_style.label_classes_on();
        let label_classes = label.class_list();
        label_classes.remove_2(off_a, off_b).map_err(UiError::from_js)?;
        label_classes.add_2(on_a, on_b).map_err(UiError::from_js)?;
    }
    Ok(())
}

/// Tag the original cards with their real index and rebuild the slider in
/// the order of `state.cards()`, cloning boundary cards as needed.
///
/// Clones from an earlier call are removed first, so a container can be
/// initialized again without growing.
pub fn materialize_clones(group: &Element, state: &CarouselState) -> Result<(), UiError> {
    let slider = slider_of(group)?;
    for stale in query_all(&slider, CLONE_CARD_SELECTOR)? {
        stale.remove();
    }
    let originals = original_cards(&slider)?;

    for (i, card) in originals.iter().enumerate() {
        card.set_attribute("data-real-index", &i.to_string())
            .map_err(UiError::from_js)?;
    }

    for item in state.cards() {
        let original = originals.get(item.real_index).ok_or_else(|| {
            UiError::MissingElement(format!("#{} card {}", group.id(), item.real_index))
        })?;
        // Appending an attached node moves it, so appending every slot in
        // order leaves the slider in exactly this order.
        let node: Node = if item.is_clone {
            let copy = original.clone_node_with_deep(true).map_err(UiError::from_js)?;
            if let Some(el) = copy.dyn_ref::<Element>() {
                el.set_attribute(CLONE_ATTRIBUTE, "").map_err(UiError::from_js)?;
                el.set_attribute("aria-hidden", "true").map_err(UiError::from_js)?;
            }
            copy
        } else {
            original.clone().into()
        };
        slider.append_child(&node).map_err(UiError::from_js)?;
    }
    Ok(())
}

/// Wire the navigation arrows and the slide-end handlers of one carousel.
///
/// The returned listeners detach when dropped.
pub fn bind_carousel(
    group: &HtmlElement,
    registry: Rc<RefCell<CarouselRegistry>>,
    transition_ms: u32,
) -> Result<Vec<Listener>, UiError> {
    let group_id = group.id();
    let mut listeners = Vec::new();

    for (selector, direction) in [(".nav-left", Direction::Left), (".nav-right", Direction::Right)] {
        let button = match group.query_selector(selector).map_err(UiError::from_js)? {
            Some(button) => button,
            None => continue,
        };
        let registry = registry.clone();
        let group = group.clone();
        let id = group_id.clone();
        listeners.push(Listener::attach(&button, "click", move |_: Event| {
            let mut registry = registry.borrow_mut();
            let state = match registry.get_mut(&id) {
                Some(state) => state,
                None => return,
            };
            if !state.navigate(direction) {
                return;
            }
            let transition = Transition::Eased { duration_ms: transition_ms };
            if let Err(err) = render_carousel(&group, state, transition) {
                log::warn!("Carousel {} failed to slide: {}", id, err);
            }
        })?);
    }

    let slider = slider_of(group)?;
    let slider_target: EventTarget = slider.into();
    let on_slide_end: Rc<dyn Fn(&Event)> = {
        let slider_target = slider_target.clone();
        let group = group.clone();
        let id = group_id;
        Rc::new(move |event: &Event| {
            // Card transitions bubble up here too; only the slider's own counts
            if event.target().as_ref() != Some(&slider_target) {
                return;
            }
            let mut registry = registry.borrow_mut();
            let state = match registry.get_mut(&id) {
                Some(state) => state,
                None => return,
            };
            if let Some(correction) = state.finish_transition() {
                log::debug!("Carousel {} wrapped {} -> {}", id, correction.from, correction.to);
                if let Err(err) = render_carousel(&group, state, Transition::Instant) {
                    log::warn!("Carousel {} failed to wrap: {}", id, err);
                }
            }
        })
    };
    for event in SLIDE_END_EVENTS {
        let handler = on_slide_end.clone();
        listeners.push(Listener::attach(&slider_target, event, move |event: Event| handler(&event))?);
    }

    Ok(listeners)
}
