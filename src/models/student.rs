//! Student records as served by `/api/school/{id}/students/`

use serde::{Deserialize, Serialize};

/// One student shown as a carousel card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: u64,
    pub name: String,
    /// Absolute portrait URL when the server knows one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portrait_url: Option<String>,
}

impl StudentRecord {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            portrait_url: None,
        }
    }
}

/// Body of the students endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentsResponse {
    #[serde(default)]
    pub students: Vec<StudentRecord>,
}
