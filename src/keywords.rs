//! Keyword extraction by frequency × term length.
//!
//! Stopwords and tokens of one or two characters never qualify. Ranking
//! is a stable descending sort on importance, so terms with equal scores
//! keep their first-occurrence order.

use std::collections::HashMap;

use crate::models::KeywordResult;
use crate::text;

/// Extract the top `limit` keywords from `text`.
///
/// Returns fewer entries when the text has fewer distinct qualifying
/// terms; a limit of 0 yields an empty result.
pub fn extract(text: &str, limit: usize) -> Vec<KeywordResult> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for token in text::tokenize(text) {
        if token.chars().count() <= 2 || text::is_stopword(&token) {
            continue;
        }
        if !counts.contains_key(&token) {
            order.push(token.clone());
        }
        *counts.entry(token).or_insert(0) += 1;
    }

    let mut results: Vec<KeywordResult> = order
        .into_iter()
        .map(|term| {
            let frequency = counts[&term];
            let importance = (frequency * term.chars().count()) as f64;
            KeywordResult {
                term,
                frequency,
                importance,
            }
        })
        .collect();

    results.sort_by(|a, b| {
        b.importance
            .partial_cmp(&a.importance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    results.truncate(limit);
    results
}
