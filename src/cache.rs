//! Memoization of per-document analyses.
//!
//! Entries are keyed by document id and live until the owning document
//! is updated or deleted. The store is responsible for calling
//! [`AnalysisCache::invalidate`] on every mutation path.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::models::Analysis;

#[derive(Debug, Default)]
pub struct AnalysisCache {
    entries: RwLock<HashMap<String, Analysis>>,
}

impl AnalysisCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<Analysis> {
        self.entries.read().unwrap().get(id).cloned()
    }

    pub fn put(&self, id: &str, analysis: Analysis) {
        self.entries
            .write()
            .unwrap()
            .insert(id.to_string(), analysis);
    }

    pub fn invalidate(&self, id: &str) {
        self.entries.write().unwrap().remove(id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.read().unwrap().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().unwrap().clear();
    }
}
