//! End-to-end tests for the analysis pipeline, document store, cache,
//! and search working together.

use content_analyzer::analyze::Analyzer;
use content_analyzer::error::CoreError;
use content_analyzer::models::{DocumentDraft, DocumentPatch, Sentiment};
use content_analyzer::search::{self, SearchOptions};
use content_analyzer::store::DocumentStore;

fn draft(title: &str, content: &str) -> DocumentDraft {
    DocumentDraft {
        title: title.to_string(),
        content: content.to_string(),
        ..Default::default()
    }
}

// ─── Analysis caching ───────────────────────────────────────────────

#[test]
fn analyze_document_twice_is_a_cache_hit() {
    let store = DocumentStore::new();
    let analyzer = Analyzer::default();
    let doc = store.add(draft("Caching", "The cache should hold this analysis."));

    let first = store.analyze_document(&doc.id, &analyzer).unwrap();
    let second = store.analyze_document(&doc.id, &analyzer).unwrap();

    // The second call must return the memoized analysis, timestamp included.
    assert_eq!(first.analyzed_at, second.analyzed_at);
    assert_eq!(first.stats.word_count, second.stats.word_count);
    assert!(store.has_cached_analysis(&doc.id));
}

#[test]
fn update_invalidates_the_cached_analysis() {
    let store = DocumentStore::new();
    let analyzer = Analyzer::default();
    let doc = store.add(draft("Before", "Original content with several words."));

    let before = store.analyze_document(&doc.id, &analyzer).unwrap();
    assert!(store.has_cached_analysis(&doc.id));

    store
        .update(
            &doc.id,
            DocumentPatch {
                content: Some("Entirely new content now.".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert!(!store.has_cached_analysis(&doc.id));

    let after = store.analyze_document(&doc.id, &analyzer).unwrap();
    assert!(after.analyzed_at > before.analyzed_at);
    assert_ne!(before.stats.word_count, after.stats.word_count);
}

#[test]
fn delete_removes_document_and_cached_analysis() {
    let store = DocumentStore::new();
    let analyzer = Analyzer::default();
    let doc = store.add(draft("T", "C"));

    store.analyze_document(&doc.id, &analyzer).unwrap();
    assert!(store.has_cached_analysis(&doc.id));

    assert!(store.delete(&doc.id));
    assert!(matches!(
        store.get(&doc.id),
        Err(CoreError::NotFound { .. })
    ));
    // No cache leak after deletion.
    assert!(!store.has_cached_analysis(&doc.id));
    assert_eq!(store.cached_analyses(), 0);
}

#[test]
fn analyzing_a_missing_document_is_not_found() {
    let store = DocumentStore::new();
    let err = store
        .analyze_document("ghost", &Analyzer::default())
        .unwrap_err();
    assert!(matches!(err, CoreError::NotFound { .. }));
}

// ─── Pipeline properties ────────────────────────────────────────────

#[test]
fn classification_bands_match_comparative() {
    let analyzer = Analyzer::default();
    let cases = [
        "I absolutely love this wonderful fantastic thing!",
        "This is terrible awful horrible garbage.",
        "The chair is next to the table.",
    ];
    for text in cases {
        let report = analyzer.report(text, None);
        let expected = if report.sentiment.comparative > 0.1 {
            Sentiment::Positive
        } else if report.sentiment.comparative < -0.1 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        };
        assert_eq!(report.sentiment.classification, expected, "text: {text}");
    }
}

#[test]
fn keywords_respect_limit_ordering_and_filters() {
    let analyzer = Analyzer::default();
    let text = "the system processed the system logs while the operator \
                watched the system dashboard and logs";
    let report = analyzer.report(text, Some(3));

    assert!(report.keywords.len() <= 3);
    for pair in report.keywords.windows(2) {
        assert!(pair[0].importance >= pair[1].importance);
    }
    for kw in &report.keywords {
        assert!(kw.term.chars().count() > 2);
        assert!(!content_analyzer::text::is_stopword(&kw.term));
    }
    assert_eq!(report.keywords[0].term, "system");
    assert_eq!(report.keywords[0].frequency, 3);
}

#[test]
fn vocabulary_diversity_bounds() {
    let analyzer = Analyzer::default();

    let distinct = analyzer.report("every word here differs", None);
    assert_eq!(distinct.stats.vocabulary_diversity, 1.0);

    let repeated = analyzer.report("echo echo echo echo", None);
    assert!(repeated.stats.vocabulary_diversity < 1.0);
    assert!(repeated.stats.vocabulary_diversity > 0.0);
}

// ─── Search over the seeded corpus ──────────────────────────────────

#[test]
fn seeded_corpus_search_honors_title_weighting() {
    let store = DocumentStore::with_samples();
    let results = search::search(&store.list(), "technology", &SearchOptions::default());

    assert!(!results.is_empty());
    for result in &results {
        let doc = store.get(&result.document_id).unwrap();
        let haystack = format!("{} {}", doc.title, doc.content).to_lowercase();
        assert!(haystack.contains("technology"));
        assert_eq!(result.matched_terms, vec!["technology"]);

        // Relevance decomposes into 3×title + 1×content occurrences.
        let title_hits = doc.title.to_lowercase().matches("technology").count();
        let content_hits = doc.content.to_lowercase().matches("technology").count();
        assert_eq!(
            result.relevance,
            3.0 * title_hits as f64 + content_hits as f64
        );
    }

    // Descending relevance, and a title match present at the top.
    for pair in results.windows(2) {
        assert!(pair[0].relevance >= pair[1].relevance);
    }
    let top = store.get(&results[0].document_id).unwrap();
    assert!(top.title.to_lowercase().contains("technology"));
}

#[test]
fn search_matches_inside_longer_words() {
    let store = DocumentStore::new();
    store.add(DocumentDraft {
        title: "Taxonomy".to_string(),
        content: "Each category holds many entries.".to_string(),
        ..Default::default()
    });

    let results = search::search(&store.list(), "cat", &SearchOptions::default());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].matched_terms, vec!["cat"]);
}

#[test]
fn empty_query_returns_no_results() {
    let store = DocumentStore::with_samples();
    assert!(search::search(&store.list(), "", &SearchOptions::default()).is_empty());
    assert!(search::search(&store.list(), "a an", &SearchOptions::default()).is_empty());
}

#[test]
fn snippets_are_bounded() {
    let store = DocumentStore::with_samples();
    let results = search::search(&store.list(), "technology", &SearchOptions::default());
    for result in &results {
        assert!(result.snippet.chars().count() <= 153);
    }
}
