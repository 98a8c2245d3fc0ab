//! Models module for the student page
//!
//! This module contains the data records fetched from the server and the
//! value types the carousel engine hands to the DOM layer.

pub mod card;
pub mod student;

// Re-export commonly used types
pub use card::*;
pub use student::*;
