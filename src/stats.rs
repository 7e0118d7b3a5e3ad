//! Text statistics and corpus overview.
//!
//! [`calculate`] derives per-text counts purely from the input string.
//! [`run_stats`] prints a store-wide summary, used by `cana stats` to
//! give confidence that the corpus and analysis cache look as expected.

use std::collections::{BTreeMap, HashSet};

use crate::models::TextStats;
use crate::store::DocumentStore;
use crate::text;

/// Compute word, sentence, paragraph, and vocabulary statistics.
pub fn calculate(input: &str) -> TextStats {
    let words: Vec<&str> = input.split_whitespace().collect();
    let word_count = words.len();
    let sentence_count = text::split_sentences(input).len();
    let paragraph_count = text::split_paragraphs(input).len();

    let unique: HashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
    let unique_words = unique.len();

    let avg_words_per_sentence = if sentence_count > 0 {
        round2(word_count as f64 / sentence_count as f64)
    } else {
        0.0
    };

    let vocabulary_diversity = if word_count > 0 {
        round3(unique_words as f64 / word_count as f64)
    } else {
        0.0
    };

    TextStats {
        word_count,
        sentence_count,
        paragraph_count,
        unique_words,
        avg_words_per_sentence,
        vocabulary_diversity,
    }
}

/// Run the stats command: print a summary of the store contents.
pub fn run_stats(store: &DocumentStore) {
    let documents = store.list();

    println!("Content Analyzer — Corpus Stats");
    println!("===============================");
    println!();
    println!("  Documents:       {}", documents.len());
    println!("  Cached analyses: {}", store.cached_analyses());

    let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
    for doc in &documents {
        let key = doc
            .category
            .clone()
            .unwrap_or_else(|| "(uncategorized)".to_string());
        *by_category.entry(key).or_insert(0) += 1;
    }

    if !by_category.is_empty() {
        println!();
        println!("  By category:");
        println!("  {:<24} {:>6}", "CATEGORY", "DOCS");
        println!("  {}", "-".repeat(32));
        for (category, count) in &by_category {
            println!("  {:<24} {:>6}", category, count);
        }
    }

    println!();
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_words_sentences_paragraphs() {
        let stats = calculate("One two three. Four five!\n\nSix seven?");
        assert_eq!(stats.word_count, 7);
        assert_eq!(stats.sentence_count, 3);
        assert_eq!(stats.paragraph_count, 2);
    }

    #[test]
    fn unique_words_are_case_insensitive() {
        let stats = calculate("Echo echo ECHO delta");
        assert_eq!(stats.word_count, 4);
        assert_eq!(stats.unique_words, 2);
        assert_eq!(stats.vocabulary_diversity, 0.5);
    }

    #[test]
    fn diversity_is_one_when_all_words_distinct() {
        let stats = calculate("alpha bravo charlie");
        assert_eq!(stats.vocabulary_diversity, 1.0);
    }

    #[test]
    fn diversity_stays_in_unit_interval() {
        for input in ["", "a", "a a a a", "a b a b", "Word word WORD distinct"] {
            let stats = calculate(input);
            assert!(stats.vocabulary_diversity >= 0.0);
            assert!(stats.vocabulary_diversity <= 1.0);
        }
    }

    #[test]
    fn empty_text_is_all_zeroes() {
        let stats = calculate("");
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.sentence_count, 0);
        assert_eq!(stats.paragraph_count, 0);
        assert_eq!(stats.unique_words, 0);
        assert_eq!(stats.avg_words_per_sentence, 0.0);
        assert_eq!(stats.vocabulary_diversity, 0.0);
    }

    #[test]
    fn averages_are_rounded() {
        // 7 words / 3 sentences = 2.333... → 2.33.
        let stats = calculate("One two three. Four five! Six seven?");
        assert_eq!(stats.avg_words_per_sentence, 2.33);
    }
}
