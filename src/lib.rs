//! Student Page WASM Module
//!
//! Client-side behaviour of the student page: infinite per-school card
//! carousels, dynamic school loading, the sidebar-synchronized recentering
//! and the logout action.

pub mod api;
pub mod app;
pub mod carousel;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod loader;
pub mod logout;
pub mod models;

// Re-export commonly used types
pub use carousel::{CarouselRegistry, CarouselState, Direction};
pub use config::{PageConfig, CLONE_COUNT};
pub use error::UiError;
pub use models::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Student page WASM module initialized");

    if let Err(err) = api::run_on_page_ready() {
        log::error!("Page setup failed: {}", err);
    }
}
