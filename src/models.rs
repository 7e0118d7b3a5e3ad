//! Core data models used throughout Content Analyzer.
//!
//! These types represent the documents, analyses, and search results that
//! flow through the analysis pipeline and the document store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A document held by the [`DocumentStore`](crate::store::DocumentStore).
///
/// `id` and `created_at` are assigned once at creation and never change;
/// `updated_at` is refreshed on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub metadata: serde_json::Map<String, serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input fields for creating a document. Id and timestamps are assigned
/// by the store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentDraft {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

/// Partial update for a document. Only fields that are present overwrite
/// the existing snapshot.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

impl DocumentPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.author.is_none()
            && self.category.is_none()
            && self.tags.is_none()
            && self.metadata.is_none()
    }
}

/// Three-way sentiment classification derived from the comparative score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Result of lexicon-based sentiment scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Sum of lexicon polarity weights over all matched tokens.
    pub score: f64,
    /// Score normalized by token count; 0 when the text has no tokens.
    pub comparative: f64,
    /// All tokens considered, in order of occurrence.
    pub tokens: Vec<String>,
    /// Tokens that matched the lexicon, in order of occurrence.
    pub words: Vec<String>,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub classification: Sentiment,
}

/// One ranked keyword. `importance = frequency × term length`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordResult {
    pub term: String,
    pub frequency: usize,
    pub importance: f64,
}

/// Complexity tier derived from the Flesch–Kincaid score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Easy,
    Medium,
    Hard,
}

/// Result of readability scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadabilityResult {
    /// Flesch–Kincaid Reading Ease, rounded to 2 decimal places.
    /// 0 when the text has no sentences or no words.
    pub flesch_kincaid: f64,
    pub grade_level: String,
    pub complexity: Complexity,
    pub sentences: usize,
    pub words: usize,
    pub syllables: usize,
}

/// Corpus statistics for a single text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextStats {
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub unique_words: usize,
    /// Words per sentence, rounded to 2 decimal places; 0 with no sentences.
    pub avg_words_per_sentence: f64,
    /// Unique words / total words, rounded to 3 decimal places; 0 with no words.
    pub vocabulary_diversity: f64,
}

/// Composite analysis of an arbitrary piece of text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextReport {
    pub sentiment: SentimentResult,
    pub keywords: Vec<KeywordResult>,
    pub readability: ReadabilityResult,
    pub stats: TextStats,
}

/// Composite analysis of a stored document.
///
/// Valid only for the content snapshot it was computed from; the store
/// invalidates its cached copy whenever the document is mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub document_id: String,
    pub sentiment: SentimentResult,
    pub keywords: Vec<KeywordResult>,
    pub readability: ReadabilityResult,
    pub stats: TextStats,
    pub analyzed_at: DateTime<Utc>,
}

/// A ranked search hit. Ephemeral — recomputed per query, never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub document_id: String,
    pub title: String,
    /// Weighted sum of title and content term occurrences.
    pub relevance: f64,
    /// Bounded excerpt centered on the densest term match.
    pub snippet: String,
    /// Query terms that matched at least once, in query order.
    pub matched_terms: Vec<String>,
}
