//! Carousel instances keyed by container id, plus the single active id

use std::collections::HashMap;

use super::engine::CarouselState;

/// Container id for the carousel of one school
pub fn group_id(school_id: &str) -> String {
    format!("school-group-{}", school_id)
}

/// Owns every live carousel on the page
#[derive(Debug, Default)]
pub struct CarouselRegistry {
    instances: HashMap<String, CarouselState>,
    active_id: Option<String>,
}

impl CarouselRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, state: CarouselState) {
        self.instances.insert(id.into(), state);
    }

    pub fn get(&self, id: &str) -> Option<&CarouselState> {
        self.instances.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut CarouselState> {
        self.instances.get_mut(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<CarouselState> {
        self.instances.remove(id)
    }

    /// Drop every instance; their containers were replaced
    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id.as_deref() == Some(id)
    }

    /// Make `id` the visible carousel and return the one it replaces
    pub fn set_active(&mut self, id: impl Into<String>) -> Option<String> {
        self.active_id.replace(id.into())
    }

    /// Whether a click on school `school_id` should start a load: not while
    /// another load is in flight, and not for the school already shown
    pub fn should_switch_to(&self, school_id: &str, loading: bool) -> bool {
        !loading && !self.is_active(&group_id(school_id))
    }

    pub fn active(&self) -> Option<&CarouselState> {
        self.active_id.as_deref().and_then(|id| self.instances.get(id))
    }
}
