//! In-memory student lists per school
//!
//! Lives for the page lifetime; entries are never evicted.

use std::collections::HashMap;

use crate::models::StudentRecord;

#[derive(Debug, Clone, Default)]
pub struct SchoolDataCache {
    entries: HashMap<String, Vec<StudentRecord>>,
}

impl SchoolDataCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, school_id: &str) -> Option<&[StudentRecord]> {
        self.entries.get(school_id).map(Vec::as_slice)
    }

    pub fn insert(&mut self, school_id: impl Into<String>, students: Vec<StudentRecord>) {
        self.entries.insert(school_id.into(), students);
    }

    pub fn contains(&self, school_id: &str) -> bool {
        self.entries.contains_key(school_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_is_still_a_hit() {
        let mut cache = SchoolDataCache::new();
        cache.insert("3", Vec::new());
        assert!(cache.contains("3"));
        assert_eq!(cache.get("3"), Some(&[][..]));
        assert_eq!(cache.get("4"), None);
    }
}
