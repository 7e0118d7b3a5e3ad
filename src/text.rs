//! Tokenization and text segmentation primitives.
//!
//! Two tokenization rules coexist on purpose. Keyword extraction splits
//! on non-alphanumeric boundaries and filters stopwords and short tokens;
//! sentiment scoring and statistics use coarser whitespace splitting so
//! their token counts line up with what a reader would call "words".

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Articles, auxiliary verbs, pronouns, conjunctions, and common
/// prepositions. Matched case-insensitively against lowercased tokens.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "if", "then", "else", "when", "while", "at", "by",
        "for", "with", "about", "against", "between", "into", "through", "during", "before",
        "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
        "under", "again", "further", "once", "here", "there", "all", "any", "both", "each", "few",
        "more", "most", "other", "some", "such", "only", "own", "same", "than", "too", "very",
        "is", "am", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
        "do", "does", "did", "doing", "will", "would", "shall", "should", "may", "might", "must",
        "can", "could", "i", "me", "my", "myself", "we", "our", "ours", "you", "your", "yours",
        "he", "him", "his", "she", "her", "hers", "it", "its", "they", "them", "their", "theirs",
        "what", "which", "who", "whom", "this", "that", "these", "those", "of", "as", "not", "no",
        "nor", "so", "because", "until", "just", "how", "why", "where",
    ]
    .into_iter()
    .collect()
});

pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

/// Split on non-alphanumeric boundaries into lowercase tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

/// Coarse whitespace tokenization used by sentiment and statistics:
/// split on whitespace, trim non-alphanumeric edges, lowercase.
pub fn coarse_tokens(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

/// Split into sentences on runs of `.`, `!`, `?`; segments are trimmed
/// and empty ones discarded.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split into paragraphs on blank lines; blocks are trimmed and empty
/// ones discarded.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}
