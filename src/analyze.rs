//! Analysis orchestration.
//!
//! The [`Analyzer`] composes the four scorers — sentiment, keywords,
//! readability, statistics — into one composite result. It holds no
//! cache; memoization belongs to the document store.

use anyhow::Result;
use chrono::Utc;

use crate::config::AnalysisConfig;
use crate::models::{Analysis, TextReport};
use crate::sentiment::{self, Lexicon};
use crate::{keywords, readability, stats};

pub struct Analyzer {
    lexicon: Lexicon,
    keyword_limit: usize,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(Lexicon::embedded(), 10)
    }
}

impl Analyzer {
    pub fn new(lexicon: Lexicon, keyword_limit: usize) -> Self {
        Self {
            lexicon,
            keyword_limit,
        }
    }

    /// Build an analyzer from config, loading a replacement lexicon when
    /// one is configured.
    pub fn from_config(config: &AnalysisConfig) -> Result<Self> {
        let lexicon = match &config.lexicon_path {
            Some(path) => Lexicon::from_path(path)?,
            None => Lexicon::embedded(),
        };
        Ok(Self::new(lexicon, config.keyword_limit))
    }

    /// Analyze an arbitrary piece of text.
    ///
    /// `keyword_limit` overrides the configured default when provided.
    pub fn report(&self, text: &str, keyword_limit: Option<usize>) -> TextReport {
        TextReport {
            sentiment: sentiment::analyze(text, &self.lexicon),
            keywords: keywords::extract(text, keyword_limit.unwrap_or(self.keyword_limit)),
            readability: readability::score(text),
            stats: stats::calculate(text),
        }
    }

    /// Analyze a document's content, stamping the computation time.
    ///
    /// Deterministic for identical content and lexicon, except for
    /// `analyzed_at`.
    pub fn analyze(&self, document_id: &str, content: &str) -> Analysis {
        let report = self.report(content, None);
        Analysis {
            document_id: document_id.to_string(),
            sentiment: report.sentiment,
            keywords: report.keywords,
            readability: report.readability,
            stats: report.stats,
            analyzed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sentiment;

    #[test]
    fn report_composes_all_four_scorers() {
        let analyzer = Analyzer::default();
        let report = analyzer.report(
            "Rust is a wonderful language. Rust programs are fast and reliable.",
            None,
        );

        assert_eq!(report.sentiment.classification, Sentiment::Positive);
        assert!(report.keywords.iter().any(|k| k.term == "rust"));
        assert!(report.readability.sentences == 2);
        assert_eq!(report.stats.sentence_count, 2);
    }

    #[test]
    fn keyword_limit_override_wins() {
        let analyzer = Analyzer::new(Lexicon::embedded(), 10);
        let text = "alpha bravo charlie delta echo foxtrot golf hotel";
        assert_eq!(analyzer.report(text, Some(2)).keywords.len(), 2);
        assert_eq!(analyzer.report(text, Some(0)).keywords.len(), 0);
        assert_eq!(analyzer.report(text, None).keywords.len(), 8);
    }

    #[test]
    fn degenerate_input_produces_zeroed_report() {
        let report = Analyzer::default().report("", None);
        assert_eq!(report.sentiment.score, 0.0);
        assert!(report.keywords.is_empty());
        assert_eq!(report.readability.flesch_kincaid, 0.0);
        assert_eq!(report.stats.word_count, 0);
    }

    #[test]
    fn analysis_carries_document_identity() {
        let analysis = Analyzer::default().analyze("doc-1", "Some content here.");
        assert_eq!(analysis.document_id, "doc-1");
    }
}
