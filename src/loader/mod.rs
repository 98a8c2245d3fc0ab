//! Dynamic content loader
//!
//! Swaps the carousel stage to another school: fade out the current
//! carousel, fetch (or reuse) the student list, inject fresh markup,
//! initialize the carousel while it is still invisible, then fade it in.
//!
//! The loader talks to the outside world through three seams so the
//! sequencing can run outside a browser:
//! - `StudentSource`: where student lists come from
//! - `Stage`: the DOM operations on the carousel stage
//! - `Sleep`: timer used for the fade delays

pub mod cache;
pub mod markup;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::carousel::{group_id, CarouselRegistry, CarouselState};
use crate::config::PageConfig;
use crate::error::UiError;
use crate::models::StudentRecord;

pub use cache::SchoolDataCache;
pub use markup::{render_no_schools, render_school_group};

/// Provider of a school's student list
#[allow(async_fn_in_trait)]
pub trait StudentSource {
    async fn fetch_students(&self, school_id: &str) -> Result<Vec<StudentRecord>, UiError>;
}

/// Timer used between fade steps
#[allow(async_fn_in_trait)]
pub trait Sleep {
    async fn sleep(&self, ms: u32);
}

/// DOM operations on the carousel stage
pub trait Stage {
    /// Start fading out the container `group_id`
    fn fade_out(&self, group_id: &str);

    fn set_spinner_visible(&self, visible: bool);

    /// Replace the whole stage content, destroying previous containers
    fn replace_content(&self, html: &str) -> Result<(), UiError>;

    /// Number of original cards inside container `group_id`
    fn card_count(&self, group_id: &str) -> usize;

    /// Materialize clones and wire the listeners for a new carousel
    fn attach_carousel(&self, group_id: &str, state: &CarouselState) -> Result<(), UiError>;

    /// Remove the invisible state so the fade-in transition runs
    fn reveal(&self, group_id: &str);
}

/// Result of a `load_school_data` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Another load was in flight; nothing happened
    Skipped,
    Loaded {
        group_id: String,
        students: usize,
        from_cache: bool,
    },
}

/// Initialize the carousel in container `group_id` and register it.
///
/// Empty containers are skipped and `Ok(None)` is returned.
pub fn initialize_carousel<V: Stage>(
    stage: &V,
    registry: &RefCell<CarouselRegistry>,
    group_id: &str,
) -> Result<Option<usize>, UiError> {
    let count = stage.card_count(group_id);
    let state = match CarouselState::new(count) {
        Some(state) => state,
        None => {
            log::debug!("Carousel {} has no cards, skipping", group_id);
            return Ok(None);
        }
    };

    stage.attach_carousel(group_id, &state)?;
    registry.borrow_mut().insert(group_id, state);
    log::info!("Initialized carousel {} with {} cards", group_id, count);
    Ok(Some(count))
}

/// Clears the single-flight flag when a load ends, however it ends
struct LoadingGuard<'a>(&'a Cell<bool>);

impl<'a> LoadingGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Loads schools into the carousel stage, one at a time
pub struct SchoolLoader<S, V, T> {
    source: S,
    stage: V,
    sleeper: T,
    registry: Rc<RefCell<CarouselRegistry>>,
    cache: RefCell<SchoolDataCache>,
    is_loading: Cell<bool>,
    config: PageConfig,
}

impl<S: StudentSource, V: Stage, T: Sleep> SchoolLoader<S, V, T> {
    pub fn new(
        source: S,
        stage: V,
        sleeper: T,
        registry: Rc<RefCell<CarouselRegistry>>,
        config: PageConfig,
    ) -> Self {
        Self {
            source,
            stage,
            sleeper,
            registry,
            cache: RefCell::new(SchoolDataCache::new()),
            is_loading: Cell::new(false),
            config,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading.get()
    }

    pub fn stage(&self) -> &V {
        &self.stage
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn is_cached(&self, school_id: &str) -> bool {
        self.cache.borrow().contains(school_id)
    }

    /// Switch the stage to `school_id`.
    ///
    /// Ignored while another load is in flight. A failed fetch is logged and
    /// rendered as an empty school.
    pub async fn load_school_data(&self, school_id: &str) -> Result<LoadOutcome, UiError> {
        if self.is_loading.get() {
            log::debug!("Load of school {} ignored: another load is in flight", school_id);
            return Ok(LoadOutcome::Skipped);
        }
        let _guard = LoadingGuard::acquire(&self.is_loading);

        let previous = self.registry.borrow().active_id().map(str::to_owned);
        if let Some(previous) = &previous {
            self.stage.fade_out(previous);
        }
        self.stage.set_spinner_visible(true);

        // Let the fade-out be seen before the stage is replaced
        self.sleeper.sleep(self.config.fade_out_delay_ms).await;

        let (students, from_cache) = self.resolve_students(school_id).await;
        let group_id = group_id(school_id);

        let swapped = self.swap_in(school_id, &group_id, &students);
        self.stage.set_spinner_visible(false);
        swapped?;

        // The container must be styled with opacity-0 for at least one frame,
        // otherwise the browser merges both states and skips the fade-in.
        self.sleeper.sleep(self.config.fade_in_delay_ms).await;
        self.stage.reveal(&group_id);

        Ok(LoadOutcome::Loaded {
            group_id,
            students: students.len(),
            from_cache,
        })
    }

    async fn resolve_students(&self, school_id: &str) -> (Vec<StudentRecord>, bool) {
        if let Some(hit) = self.cache.borrow().get(school_id) {
            log::debug!("School {} served from cache", school_id);
            return (hit.to_vec(), true);
        }

        match self.source.fetch_students(school_id).await {
            Ok(students) => {
                self.cache.borrow_mut().insert(school_id, students.clone());
                (students, false)
            }
            Err(err) => {
                log::error!("Failed to fetch student data: {}", err);
                (Vec::new(), false)
            }
        }
    }

    fn swap_in(&self, school_id: &str, group_id: &str, students: &[StudentRecord]) -> Result<(), UiError> {
        let html = render_school_group(school_id, students, &self.config)?;
        self.stage.replace_content(&html)?;
        self.registry.borrow_mut().clear();

        if !students.is_empty() {
            initialize_carousel(&self.stage, &self.registry, group_id)?;
        }
        self.registry.borrow_mut().set_active(group_id);
        Ok(())
    }
}
