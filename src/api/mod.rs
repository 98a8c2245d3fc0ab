//! Student page WASM API
//!
//! - `helpers`: serialization across the wasm boundary
//! - `exports`: functions callable from JavaScript

pub mod exports;
pub mod helpers;

pub use exports::{boot_logout, boot_student_page, get_carousel_snapshot, run_on_page_ready};
