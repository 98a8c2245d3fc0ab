//! Placeholder hero component
//!
//! Attached to every `[data-jumbotron]` node. It has no behaviour yet beyond
//! announcing itself.

use web_sys::Element;

pub struct Jumbotron {
    node: Element,
}

impl Jumbotron {
    pub fn selector() -> &'static str {
        "[data-jumbotron]"
    }

    pub fn new(node: Element) -> Self {
        log::info!("Jumbotron initialized for node: {}", node.tag_name());
        Self { node }
    }

    pub fn node(&self) -> &Element {
        &self.node
    }

    /// Mount one jumbotron per matching node under `root`
    pub fn mount_all(root: &web_sys::Document) -> Vec<Jumbotron> {
        let nodes = match root.query_selector_all(Self::selector()) {
            Ok(nodes) => nodes,
            Err(_) => return Vec::new(),
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| wasm_bindgen::JsCast::dyn_into::<Element>(node).ok())
            .map(Jumbotron::new)
            .collect()
    }
}
