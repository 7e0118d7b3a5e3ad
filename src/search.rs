//! Query-time relevance search over the document collection.
//!
//! Terms are matched as case-insensitive substrings, not tokens — a
//! query for "cat" matches inside "category". That is a deliberate
//! ranking choice, locked in by tests. Title occurrences weigh three
//! times content occurrences by default.

use crate::models::{Document, SearchResult};

/// Knobs for one search invocation.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Maximum results after ranking; `None` returns everything.
    pub limit: Option<usize>,
    pub title_weight: f64,
    pub content_weight: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: None,
            title_weight: 3.0,
            content_weight: 1.0,
        }
    }
}

/// Maximum snippet length in characters before truncation.
const SNIPPET_MAX_CHARS: usize = 150;
/// Words taken before and after the densest matching position.
const SNIPPET_BEFORE: usize = 10;
const SNIPPET_AFTER: usize = 15;

/// Rank `documents` against `query`.
///
/// Query terms of one or two characters are ignored entirely. Documents
/// with zero relevance are excluded. Equal-relevance documents keep
/// their order in `documents` (stable sort), which for store listings
/// means insertion order.
pub fn search(documents: &[Document], query: &str, opts: &SearchOptions) -> Vec<SearchResult> {
    let query_lower = query.to_lowercase();
    let terms: Vec<&str> = query_lower
        .split_whitespace()
        .filter(|t| t.chars().count() > 2)
        .collect();
    if terms.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<SearchResult> = Vec::new();

    for document in documents {
        let title_lower = document.title.to_lowercase();
        let content_lower = document.content.to_lowercase();

        let mut relevance = 0.0;
        let mut matched_terms: Vec<String> = Vec::new();

        for term in &terms {
            let title_hits = count_occurrences(&title_lower, term);
            let content_hits = count_occurrences(&content_lower, term);
            relevance +=
                opts.title_weight * title_hits as f64 + opts.content_weight * content_hits as f64;
            if (title_hits > 0 || content_hits > 0) && !matched_terms.iter().any(|m| m == term) {
                matched_terms.push(term.to_string());
            }
        }

        if relevance > 0.0 {
            results.push(SearchResult {
                document_id: document.id.clone(),
                title: document.title.clone(),
                relevance,
                snippet: build_snippet(&document.content, &terms),
                matched_terms,
            });
        }
    }

    results.sort_by(|a, b| {
        b.relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if let Some(limit) = opts.limit {
        results.truncate(limit);
    }
    results
}

/// Non-overlapping occurrence count of `needle` in `haystack`.
fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Pick the excerpt around the content position where the most query
/// terms land in a single word; first position wins ties.
fn build_snippet(content: &str, terms: &[&str]) -> String {
    let words: Vec<&str> = content.split_whitespace().collect();
    if words.is_empty() {
        return String::new();
    }

    let mut best_position = 0;
    let mut best_score = 0;
    for (position, word) in words.iter().enumerate() {
        let word_lower = word.to_lowercase();
        let score = terms.iter().filter(|t| word_lower.contains(**t)).count();
        if score > best_score {
            best_score = score;
            best_position = position;
        }
    }

    let start = best_position.saturating_sub(SNIPPET_BEFORE);
    let end = (best_position + SNIPPET_AFTER).min(words.len());
    let joined = words[start..end].join(" ");

    if joined.chars().count() > SNIPPET_MAX_CHARS {
        let mut snippet: String = joined.chars().take(SNIPPET_MAX_CHARS).collect();
        snippet.push_str("...");
        snippet
    } else {
        joined
    }
}
