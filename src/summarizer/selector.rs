//! Frequency-based sentence selection for summarization
//!
//! Scores every sentence as the sum of the normalized frequencies of its
//! words, ranks by descending score and keeps the top `max_sentences`.
//! Equal scores are broken by document position, earlier first, so the
//! selection is deterministic.

use super::frequency::FrequencyTable;
use crate::types::{OutputOrder, ScoredSentence, Sentence, SentenceIdentity};
use rustc_hash::FxHashMap;

/// Configuration for sentence selection
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Number of sentences to select
    pub max_sentences: usize,
    /// Order of the selected sentences in the result
    pub output_order: OutputOrder,
    /// Whether repeated sentences are scored separately or merged
    pub identity: SentenceIdentity,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            max_sentences: crate::DEFAULT_MAX_SENTENCES,
            output_order: OutputOrder::Document,
            identity: SentenceIdentity::Position,
        }
    }
}

/// Result of sentence selection
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Selected sentences, in the configured output order
    pub sentences: Vec<ScoredSentence>,
    /// Number of sentences (or distinct texts) that had a non-empty score
    pub scored: usize,
}

/// Frequency-score sentence selector
#[derive(Debug, Clone, Default)]
pub struct SentenceSelector {
    config: SelectorConfig,
}

impl SentenceSelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Set number of sentences to select (at least one)
    pub fn with_max_sentences(mut self, n: usize) -> Self {
        self.config.max_sentences = n.max(1);
        self
    }

    /// Set the output order
    pub fn with_output_order(mut self, order: OutputOrder) -> Self {
        self.config.output_order = order;
        self
    }

    /// Set sentence identity
    pub fn with_identity(mut self, identity: SentenceIdentity) -> Self {
        self.config.identity = identity;
        self
    }

    /// Score and select sentences.
    ///
    /// `sentence_tokens[i]` holds the lowercase word tokens of `sentences[i]`.
    pub fn select<S: AsRef<str>>(
        &self,
        sentences: &[Sentence],
        sentence_tokens: &[Vec<S>],
        table: &FrequencyTable,
    ) -> Selection {
        debug_assert_eq!(sentences.len(), sentence_tokens.len());

        let mut scored = self.score(sentences, sentence_tokens, table);
        let total = scored.len();

        // Entries are in document order, so a stable sort keeps earlier
        // sentences ahead on equal scores
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(self.config.max_sentences);

        let mut selected: Vec<ScoredSentence> = scored
            .into_iter()
            .enumerate()
            .map(|(rank, (idx, score))| ScoredSentence {
                sentence: sentences[idx].clone(),
                score,
                rank,
            })
            .collect();

        if self.config.output_order == OutputOrder::Document {
            selected.sort_by_key(|s| s.sentence.index);
        }

        Selection {
            sentences: selected,
            scored: total,
        }
    }

    /// Per-entry scores as `(sentence position, score)` in document order.
    ///
    /// Sentences with no scoring word get no entry.
    fn score<S: AsRef<str>>(
        &self,
        sentences: &[Sentence],
        sentence_tokens: &[Vec<S>],
        table: &FrequencyTable,
    ) -> Vec<(usize, f64)> {
        match self.config.identity {
            SentenceIdentity::Position => sentence_tokens
                .iter()
                .enumerate()
                .filter_map(|(idx, tokens)| table.score(tokens).map(|s| (idx, s)))
                .collect(),
            SentenceIdentity::Text => {
                let mut entries: Vec<(usize, f64)> = Vec::new();
                let mut by_text: FxHashMap<&str, usize> = FxHashMap::default();

                for (idx, tokens) in sentence_tokens.iter().enumerate() {
                    let Some(score) = table.score(tokens) else {
                        continue;
                    };
                    match by_text.get(sentences[idx].text.as_str()) {
                        Some(&entry) => entries[entry].1 += score,
                        None => {
                            by_text.insert(&sentences[idx].text, entries.len());
                            entries.push((idx, score));
                        }
                    }
                }

                entries
            }
        }
    }
}
