//! Student page orchestrator
//!
//! Owns the carousel registry, the loader and the sidebar recenter loop, and
//! wires the page events to them:
//! - school buttons switch the stage to another school
//! - hovering the left column expands the sidebar and starts the recenter loop
//! - window resizes recenter the active carousel

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use web_sys::{Document, Element, Event, EventTarget};

use crate::carousel::{CarouselRegistry, RecenterLoop};
use crate::config::PageConfig;
use crate::dom::{
    self, query_all, AnimationFrames, BrowserSleep, DomStage, HttpStudentSource, Listener,
};
use crate::error::UiError;
use crate::loader::{initialize_carousel, render_no_schools, SchoolLoader, Stage};

pub const MAIN_GRID_ID: &str = "main-grid";
pub const LEFT_COLUMN_ID: &str = "left-column";
pub const CAROUSEL_STAGE_ID: &str = "carousel-stage";
pub const LOADING_SPINNER_ID: &str = "loading-spinner";

pub const SCHOOL_BUTTON_SELECTOR: &str = ".school-button";
/// Carousel containers rendered by the server
pub const STATIC_GROUP_SELECTOR: &str = r#".character-group[id^="school-group-"]"#;

const SIDEBAR_EXPANDED_CLASS: &str = "sidebar-expanded";
const SELECTED_BUTTON_CLASSES: [&str; 3] = ["active", "ring-2", "ring-sky-400"];

pub type DomLoader = SchoolLoader<HttpStudentSource, DomStage, BrowserSleep>;

pub struct StudentPage {
    registry: Rc<RefCell<CarouselRegistry>>,
    loader: Rc<DomLoader>,
    recenter_loop: RecenterLoop<AnimationFrames>,
    listeners: RefCell<Vec<Listener>>,
    config: PageConfig,
}

impl StudentPage {
    /// Find the page elements, wire every listener and load the first school
    pub fn boot(config: PageConfig) -> Result<Rc<Self>, UiError> {
        let window = dom::window()?;
        let document = dom::document()?;

        let main_grid = dom::element_by_id(&document, MAIN_GRID_ID)?;
        let left_column = dom::element_by_id(&document, LEFT_COLUMN_ID)?;
        let stage = dom::element_by_id(&document, CAROUSEL_STAGE_ID)?;
        let spinner = dom::html_element_by_id(&document, LOADING_SPINNER_ID)?;

        let registry = Rc::new(RefCell::new(CarouselRegistry::new()));
        let dom_stage = DomStage::new(
            document.clone(),
            stage,
            spinner,
            registry.clone(),
            config.clone(),
        );
        let loader = Rc::new(SchoolLoader::new(
            HttpStudentSource::new(config.clone()),
            dom_stage,
            BrowserSleep,
            registry.clone(),
            config.clone(),
        ));

        let page = Rc::new(Self {
            registry,
            loader,
            recenter_loop: RecenterLoop::new(
                Rc::new(AnimationFrames::new(window.clone())),
                config.sidebar_sync_ms,
            ),
            listeners: RefCell::new(Vec::new()),
            config,
        });

        let has_static = page.init_static_carousels()?;
        page.wire_sidebar(&main_grid, &left_column)?;
        let buttons = page.wire_school_buttons(&document)?;
        page.wire_resize(&window.into())?;

        if !has_static {
            page.kickstart(&buttons)?;
        }
        log::info!("Student page ready ({} school buttons)", buttons.len());
        Ok(page)
    }

    pub fn registry(&self) -> &Rc<RefCell<CarouselRegistry>> {
        &self.registry
    }

    /// Instantly re-center the active carousel
    pub fn recenter_active(&self) {
        let active = self.registry.borrow().active_id().map(str::to_owned);
        if let Some(id) = active {
            self.loader.stage().recenter(&id);
        }
    }

    /// Keep the carousel centered while the sidebar animates
    pub fn start_sync_loop(self: &Rc<Self>) {
        let weak: Weak<Self> = Rc::downgrade(self);
        self.recenter_loop.start(Rc::new(move || {
            if let Some(page) = weak.upgrade() {
                page.recenter_active();
            }
        }));
    }

    pub fn stop_sync_loop(&self) {
        self.recenter_loop.cancel();
    }

    /// Switch to `school_id` unless it is already shown or a load is running
    pub fn select_school(self: &Rc<Self>, school_id: &str) -> bool {
        if !self.registry.borrow().should_switch_to(school_id, self.loader.is_loading()) {
            log::debug!("School {} already shown or a load is running", school_id);
            return false;
        }
        self.load(school_id.to_string());
        true
    }

    fn load(&self, school_id: String) {
        let loader = self.loader.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match loader.load_school_data(&school_id).await {
                Ok(outcome) => log::debug!("School {} load: {:?}", school_id, outcome),
                Err(err) => log::error!("Loading school {} failed: {}", school_id, err),
            }
        });
    }

    /// Initialize carousels that were rendered with the page.
    /// Returns true when one of them became the active carousel.
    fn init_static_carousels(&self) -> Result<bool, UiError> {
        let stage = self.loader.stage();
        let groups = query_all(stage.stage_element(), STATIC_GROUP_SELECTOR)?;
        for group in &groups {
            let id = group.id();
            if initialize_carousel(stage, &self.registry, &id)?.is_some() {
                let mut registry = self.registry.borrow_mut();
                if registry.active_id().is_none() {
                    registry.set_active(id);
                }
            }
        }
        Ok(self.registry.borrow().active_id().is_some())
    }

    fn wire_sidebar(self: &Rc<Self>, main_grid: &Element, left_column: &Element) -> Result<(), UiError> {
        let mut listeners = self.listeners.borrow_mut();
        for (event, expanded) in [("mouseenter", true), ("mouseleave", false)] {
            let weak = Rc::downgrade(self);
            let grid = main_grid.clone();
            listeners.push(Listener::attach(left_column, event, move |_: Event| {
                let classes = grid.class_list();
                let toggled = if expanded {
                    classes.add_1(SIDEBAR_EXPANDED_CLASS)
                } else {
                    classes.remove_1(SIDEBAR_EXPANDED_CLASS)
                };
                if let Err(err) = toggled {
                    log::warn!("Sidebar class toggle failed: {}", UiError::from_js(err));
                }
                if let Some(page) = weak.upgrade() {
                    page.start_sync_loop();
                }
            })?);
        }
        Ok(())
    }

    fn wire_school_buttons(self: &Rc<Self>, document: &Document) -> Result<Vec<Element>, UiError> {
        let root = document
            .document_element()
            .ok_or_else(|| UiError::MissingElement("html".to_string()))?;
        let buttons = query_all(&root, SCHOOL_BUTTON_SELECTOR)?;

        let mut listeners = self.listeners.borrow_mut();
        for button in &buttons {
            let school_id = match button.get_attribute("data-school-id") {
                Some(id) => id,
                None => {
                    log::warn!("School button without data-school-id skipped");
                    continue;
                }
            };
            let weak = Rc::downgrade(self);
            let all_buttons = buttons.clone();
            let selected = button.clone();
            listeners.push(Listener::attach(button, "click", move |_: Event| {
                let page = match weak.upgrade() {
                    Some(page) => page,
                    None => return,
                };
                if page.select_school(&school_id) {
                    mark_selected(&all_buttons, &selected);
                }
            })?);
        }
        Ok(buttons)
    }

    fn wire_resize(self: &Rc<Self>, window: &EventTarget) -> Result<(), UiError> {
        let weak = Rc::downgrade(self);
        self.listeners.borrow_mut().push(Listener::attach(window, "resize", move |_: Event| {
            if let Some(page) = weak.upgrade() {
                page.recenter_active();
            }
        })?);
        Ok(())
    }

    /// Load the first school, or explain that there is none
    fn kickstart(&self, buttons: &[Element]) -> Result<(), UiError> {
        let first = buttons
            .iter()
            .find_map(|b| b.get_attribute("data-school-id").map(|id| (b, id)));
        match first {
            Some((button, school_id)) => {
                mark_selected(buttons, button);
                self.load(school_id);
            }
            None => {
                let stage = self.loader.stage();
                stage.set_spinner_visible(false);
                stage.replace_content(&render_no_schools()?)?;
            }
        }
        Ok(())
    }
}

fn mark_selected(buttons: &[Element], selected: &Element) {
    let [a, b, c] = SELECTED_BUTTON_CLASSES;
    for button in buttons {
        if let Err(err) = button.class_list().remove_3(a, b, c) {
            log::warn!("Failed to unmark school button: {}", UiError::from_js(err));
        }
    }
    if let Err(err) = selected.class_list().add_3(a, b, c) {
        log::warn!("Failed to mark selected school button: {}", UiError::from_js(err));
    }
}
