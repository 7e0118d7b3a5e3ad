//! In-memory document store.
//!
//! Owns the document collection and the analysis cache. Documents are
//! kept in insertion order behind an `RwLock`, so one store instance can
//! be shared across server handlers via `Arc`. Every mutation path
//! (update, delete) invalidates the cached analysis for the touched id
//! before returning.

use std::sync::RwLock;

use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::analyze::Analyzer;
use crate::cache::AnalysisCache;
use crate::error::CoreError;
use crate::models::{Analysis, Document, DocumentDraft, DocumentPatch};

/// Shape of one entry in the bundled sample corpus.
#[derive(Deserialize)]
struct SampleDocument {
    title: String,
    content: String,
    author: Option<String>,
    category: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

pub struct DocumentStore {
    documents: RwLock<Vec<Document>>,
    cache: AnalysisCache,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore {
    /// An empty store. Tests construct one of these per case.
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
            cache: AnalysisCache::new(),
        }
    }

    /// A store seeded with the bundled sample corpus, used by the CLI
    /// and server for demonstration.
    pub fn with_samples() -> Self {
        let store = Self::new();
        let raw = include_str!("../data/sample_documents.json");
        let samples: Vec<SampleDocument> =
            serde_json::from_str(raw).expect("valid embedded sample corpus");
        for sample in samples {
            store.add(DocumentDraft {
                title: sample.title,
                content: sample.content,
                author: sample.author,
                category: sample.category,
                tags: sample.tags,
                metadata: Default::default(),
            });
        }
        store
    }

    /// Store a new document under a fresh id, stamping both timestamps.
    pub fn add(&self, draft: DocumentDraft) -> Document {
        let now = Utc::now();
        let document = Document {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            content: draft.content,
            author: draft.author,
            category: draft.category,
            tags: draft.tags,
            metadata: draft.metadata,
            created_at: now,
            updated_at: now,
        };
        self.documents.write().unwrap().push(document.clone());
        document
    }

    pub fn get(&self, id: &str) -> Result<Document, CoreError> {
        self.documents
            .read()
            .unwrap()
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| CoreError::not_found(id))
    }

    /// All documents in insertion order.
    pub fn list(&self) -> Vec<Document> {
        self.documents.read().unwrap().clone()
    }

    pub fn list_by_category(&self, category: &str) -> Vec<Document> {
        self.documents
            .read()
            .unwrap()
            .iter()
            .filter(|d| d.category.as_deref() == Some(category))
            .cloned()
            .collect()
    }

    pub fn list_by_author(&self, author: &str) -> Vec<Document> {
        self.documents
            .read()
            .unwrap()
            .iter()
            .filter(|d| d.author.as_deref() == Some(author))
            .cloned()
            .collect()
    }

    /// Merge `patch` over the stored snapshot, refresh `updated_at`, and
    /// drop any cached analysis for the id.
    pub fn update(&self, id: &str, patch: DocumentPatch) -> Result<Document, CoreError> {
        let updated = {
            let mut documents = self.documents.write().unwrap();
            let document = documents
                .iter_mut()
                .find(|d| d.id == id)
                .ok_or_else(|| CoreError::not_found(id))?;

            if let Some(title) = patch.title {
                document.title = title;
            }
            if let Some(content) = patch.content {
                document.content = content;
            }
            if let Some(author) = patch.author {
                document.author = Some(author);
            }
            if let Some(category) = patch.category {
                document.category = Some(category);
            }
            if let Some(tags) = patch.tags {
                document.tags = tags;
            }
            if let Some(metadata) = patch.metadata {
                document.metadata = metadata;
            }
            document.updated_at = Utc::now();
            document.clone()
        };

        self.cache.invalidate(id);
        Ok(updated)
    }

    /// Remove a document and its cached analysis. Returns whether a
    /// document existed under the id.
    pub fn delete(&self, id: &str) -> bool {
        let existed = {
            let mut documents = self.documents.write().unwrap();
            let before = documents.len();
            documents.retain(|d| d.id != id);
            documents.len() != before
        };
        self.cache.invalidate(id);
        existed
    }

    /// Return the cached analysis for the document, or compute, cache,
    /// and return a fresh one.
    pub fn analyze_document(
        &self,
        id: &str,
        analyzer: &Analyzer,
    ) -> Result<Analysis, CoreError> {
        if let Some(hit) = self.cache.get(id) {
            return Ok(hit);
        }
        let document = self.get(id)?;
        let analysis = analyzer.analyze(&document.id, &document.content);
        self.cache.put(id, analysis.clone());
        Ok(analysis)
    }

    pub fn has_cached_analysis(&self, id: &str) -> bool {
        self.cache.contains(id)
    }

    pub fn cached_analyses(&self) -> usize {
        self.cache.len()
    }

    pub fn len(&self) -> usize {
        self.documents.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.read().unwrap().is_empty()
    }
}
