//! Page configuration
//!
//! Timings and endpoints used by the carousel, the loader and the logout
//! action. JavaScript may override any subset of fields when booting; the
//! rest fall back to the defaults below.

use serde::{Deserialize, Serialize};

/// Number of boundary cards duplicated at each end of a carousel
pub const CLONE_COUNT: usize = 3;

/// Runtime configuration for the student page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// Duration of an animated slide, in ms
    pub transition_ms: u32,
    /// Length of the sidebar expand/collapse CSS transition, in ms
    pub sidebar_sync_ms: u32,
    /// Pause after fading out the previous carousel, in ms
    pub fade_out_delay_ms: u32,
    /// Pause between injecting a carousel and starting its fade-in, in ms
    pub fade_in_delay_ms: u32,
    /// Delay before the first layout of a freshly initialized carousel, in ms
    pub initial_layout_delay_ms: u32,
    pub logout_endpoint: String,
    pub home_url: String,
    /// Prefix of the students endpoint; the school id and `/students/` follow
    pub students_endpoint_prefix: String,
    /// Prefix of the portrait fallback; the student id and `/portrait` follow
    pub portrait_path_prefix: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            transition_ms: 600,
            sidebar_sync_ms: 300,
            fade_out_delay_ms: 300,
            fade_in_delay_ms: 50,
            initial_layout_delay_ms: 100,
            logout_endpoint: "/logout/".to_string(),
            home_url: "/".to_string(),
            students_endpoint_prefix: "/api/school".to_string(),
            portrait_path_prefix: "/image/student".to_string(),
        }
    }
}

impl PageConfig {
    /// URL listing the students of one school
    pub fn students_url(&self, school_id: &str) -> String {
        format!(
            "{}/{}/students/",
            self.students_endpoint_prefix.trim_end_matches('/'),
            school_id
        )
    }

    /// Fallback portrait URL for a student without an explicit one
    pub fn portrait_url(&self, student_id: u64) -> String {
        format!(
            "{}/{}/portrait",
            self.portrait_path_prefix.trim_end_matches('/'),
            student_id
        )
    }
}
