//! Word frequency table
//!
//! Counts alphabetic, non-stopword tokens and rescales the counts by the
//! maximum so every weight lies in (0, 1].

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::is_alphabetic;
use rustc_hash::FxHashMap;

/// Normalized word weights for one document
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// Lowercase word -> normalized frequency
    weights: FxHashMap<String, f64>,
}

impl FrequencyTable {
    /// Build a table from lowercase word tokens.
    ///
    /// Tokens that are not purely alphabetic, or are stopwords, are skipped.
    pub fn build<S: AsRef<str>>(tokens: &[S], stopwords: &StopwordFilter) -> Self {
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();

        for token in tokens {
            let token = token.as_ref();
            if is_alphabetic(token) && !stopwords.is_stopword_lower(token) {
                *counts.entry(token).or_insert(0) += 1;
            }
        }

        let max_count = counts.values().copied().max().unwrap_or(0);
        let weights = counts
            .into_iter()
            .map(|(word, count)| (word.to_string(), count as f64 / max_count as f64))
            .collect();

        Self { weights }
    }

    /// Normalized weight of a word, if it was counted
    #[inline]
    pub fn weight(&self, word: &str) -> Option<f64> {
        self.weights.get(word).copied()
    }

    /// Number of distinct counted words
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check if no word was counted
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Score a run of lowercase tokens: the sum of the weights of every token
    /// present in the table, repeats included.
    ///
    /// Returns `None` when no token is present.
    pub fn score<S: AsRef<str>>(&self, tokens: &[S]) -> Option<f64> {
        tokens
            .iter()
            .filter_map(|t| self.weight(t.as_ref()))
            .fold(None, |acc, w| Some(acc.unwrap_or(0.0) + w))
    }
}
