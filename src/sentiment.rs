//! Lexicon-based sentiment scoring.
//!
//! The scorer sums per-word polarity weights from a [`Lexicon`] over the
//! coarse token stream and classifies the text by its comparative score
//! (score / token count): above 0.1 is positive, below −0.1 negative,
//! anything between is neutral.
//!
//! The lexicon is a swappable resource. A default English lexicon ships
//! embedded in the binary; `[analysis].lexicon_path` can point at any
//! JSON word→weight map to replace it.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;

use crate::models::{Sentiment, SentimentResult};
use crate::text;

static EMBEDDED: Lazy<HashMap<String, f64>> = Lazy::new(|| {
    let raw = include_str!("../data/sentiment_lexicon.json");
    serde_json::from_str::<HashMap<String, f64>>(raw).expect("valid embedded sentiment lexicon")
});

/// Word → polarity weight mapping.
#[derive(Debug, Clone)]
pub struct Lexicon {
    weights: HashMap<String, f64>,
}

impl Lexicon {
    /// The lexicon bundled with the binary.
    pub fn embedded() -> Self {
        Self {
            weights: EMBEDDED.clone(),
        }
    }

    /// Load a replacement lexicon from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon file: {}", path.display()))?;
        let weights: HashMap<String, f64> =
            serde_json::from_str(&raw).with_context(|| "Failed to parse lexicon JSON")?;
        Ok(Self { weights })
    }

    pub fn from_weights(weights: HashMap<String, f64>) -> Self {
        Self { weights }
    }

    pub fn weight(&self, word: &str) -> Option<f64> {
        self.weights.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Score a text against a lexicon.
///
/// Total over its input: empty or whitespace-only text yields score 0,
/// comparative 0, neutral classification, and empty word lists.
pub fn analyze(text: &str, lexicon: &Lexicon) -> SentimentResult {
    let tokens = text::coarse_tokens(text);

    let mut score = 0.0;
    let mut words = Vec::new();
    let mut positive = Vec::new();
    let mut negative = Vec::new();

    for token in &tokens {
        if let Some(weight) = lexicon.weight(token) {
            score += weight;
            words.push(token.clone());
            if weight > 0.0 {
                positive.push(token.clone());
            } else if weight < 0.0 {
                negative.push(token.clone());
            }
        }
    }

    let comparative = if tokens.is_empty() {
        0.0
    } else {
        score / tokens.len() as f64
    };

    let classification = if comparative > 0.1 {
        Sentiment::Positive
    } else if comparative < -0.1 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    SentimentResult {
        score,
        comparative,
        tokens,
        words,
        positive,
        negative,
        classification,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn love_is_positive() {
        let result = analyze("I absolutely love this!", &Lexicon::embedded());
        assert_eq!(result.classification, Sentiment::Positive);
        assert!(result.positive.iter().any(|w| w.contains("love")));
        assert!(result.comparative > 0.1);
        assert_eq!(result.tokens.len(), 4);
    }

    #[test]
    fn hate_is_negative() {
        let result = analyze("I hate this terrible broken mess.", &Lexicon::embedded());
        assert_eq!(result.classification, Sentiment::Negative);
        assert!(result.negative.contains(&"hate".to_string()));
        assert!(result.score < 0.0);
    }

    #[test]
    fn empty_text_is_neutral_zeroes() {
        for text in ["", "   \t\n "] {
            let result = analyze(text, &Lexicon::embedded());
            assert_eq!(result.score, 0.0);
            assert_eq!(result.comparative, 0.0);
            assert_eq!(result.classification, Sentiment::Neutral);
            assert!(result.tokens.is_empty());
            assert!(result.words.is_empty());
            assert!(result.positive.is_empty());
            assert!(result.negative.is_empty());
        }
    }

    #[test]
    fn comparative_normalizes_by_token_count() {
        // One +3 word among many neutral ones dilutes below the 0.1 band.
        let text = "love one two three four five six seven eight nine ten \
                    eleven twelve thirteen fourteen fifteen sixteen seventeen \
                    eighteen nineteen twenty twentyone twentytwo twentythree \
                    twentyfour twentyfive twentysix twentyseven twentyeight \
                    twentynine thirty";
        let result = analyze(text, &Lexicon::embedded());
        assert_eq!(result.score, 3.0);
        assert!(result.comparative <= 0.1);
        assert_eq!(result.classification, Sentiment::Neutral);
    }

    #[test]
    fn swapped_lexicon_drives_the_result() {
        let mut weights = HashMap::new();
        weights.insert("ferris".to_string(), 5.0);
        let lexicon = Lexicon::from_weights(weights);

        let result = analyze("ferris is wonderful", &lexicon);
        // "wonderful" is not in the custom lexicon, only "ferris" scores.
        assert_eq!(result.score, 5.0);
        assert_eq!(result.words, vec!["ferris"]);
    }

    #[test]
    fn classification_bands_are_exclusive() {
        let mut weights = HashMap::new();
        weights.insert("meh".to_string(), 0.1);
        let lexicon = Lexicon::from_weights(weights);
        // comparative exactly 0.1 is neutral, not positive.
        let result = analyze("meh", &lexicon);
        assert_eq!(result.comparative, 0.1);
        assert_eq!(result.classification, Sentiment::Neutral);
    }
}
