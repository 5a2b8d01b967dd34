//! Extractive summarizer
//!
//! Stages, in order:
//! 1. guard: refuse inputs below the minimum word count
//! 2. normalize whitespace
//! 3. segment into sentences and tokenize lowercase words
//! 4. build the normalized frequency table
//! 5. score and select sentences
//! 6. join the selection with single spaces

use rayon::prelude::*;

use super::frequency::FrequencyTable;
use super::selector::{SelectorConfig, SentenceSelector};
use super::{Backend, Summarize, Summary};
use crate::config::SummarizerConfig;
use crate::errors::{Result, SummarizeError};
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{count_words, normalize_whitespace, Tokenizer};
use crate::types::{OutputOrder, SentenceIdentity};

/// Frequency-based extractive summarizer
#[derive(Debug, Clone)]
pub struct ExtractiveSummarizer {
    selector: SentenceSelector,
    stopwords: StopwordFilter,
    min_words: usize,
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractiveSummarizer {
    /// Create a summarizer with default settings: five sentences, a
    /// 50-word minimum, English stopwords, document-order output.
    pub fn new() -> Self {
        Self {
            selector: SentenceSelector::new(),
            stopwords: StopwordFilter::default(),
            min_words: crate::DEFAULT_MIN_WORDS,
        }
    }

    /// Create from a config. Call [`SummarizerConfig::validate`] first when
    /// the config comes from user input; an unvalidated `max_sentences` of 0
    /// is clamped to 1 like [`with_max_sentences`](Self::with_max_sentences).
    pub fn from_config(config: &SummarizerConfig) -> Self {
        let selector = SentenceSelector::with_config(SelectorConfig {
            max_sentences: config.max_sentences.max(1),
            output_order: config.output_order,
            identity: config.sentence_identity,
        });
        Self {
            selector,
            stopwords: config.stopword_filter(),
            min_words: config.min_words,
        }
    }

    /// Set number of sentences in the summary (at least one)
    pub fn with_max_sentences(mut self, n: usize) -> Self {
        self.selector = self.selector.with_max_sentences(n);
        self
    }

    /// Set the minimum input word count
    pub fn with_min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words;
        self
    }

    /// Set the output order
    pub fn with_output_order(mut self, order: OutputOrder) -> Self {
        self.selector = self.selector.with_output_order(order);
        self
    }

    /// Set sentence identity
    pub fn with_sentence_identity(mut self, identity: SentenceIdentity) -> Self {
        self.selector = self.selector.with_identity(identity);
        self
    }

    /// Replace the stopword filter
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Summarize many independent texts in parallel, preserving input order.
    pub fn summarize_batch<S>(&self, texts: &[S]) -> Vec<Result<Summary>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.run(text.as_ref()))
            .collect()
    }

    fn run(&self, text: &str) -> Result<Summary> {
        let words = count_words(text);
        if words == 0 || words < self.min_words {
            return Err(SummarizeError::TooShort {
                words,
                min_words: self.min_words,
            });
        }

        let normalized = {
            trace_stage!("normalize");
            normalize_whitespace(text)
        };

        let (sentences, sentence_tokens) = {
            trace_stage!("tokenize");
            Tokenizer::new().tokenize(&normalized)
        };

        let table = {
            trace_stage!("frequencies");
            let all: Vec<&String> = sentence_tokens.iter().flatten().collect();
            FrequencyTable::build(&all, &self.stopwords)
        };
        if table.is_empty() {
            return Err(SummarizeError::NoScorableContent);
        }

        let selection = {
            trace_stage!("select");
            self.selector.select(&sentences, &sentence_tokens, &table)
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            words,
            sentences = sentences.len(),
            vocabulary = table.len(),
            scored = selection.scored,
            selected = selection.sentences.len(),
            "extractive summary built"
        );

        let text = selection
            .sentences
            .iter()
            .map(|s| s.sentence.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(Summary {
            text,
            sentences: selection.sentences,
            backend: Backend::Extractive,
        })
    }
}

impl Summarize for ExtractiveSummarizer {
    fn summarize(&self, text: &str) -> Result<Summary> {
        self.run(text)
    }

    fn backend(&self) -> Backend {
        Backend::Extractive
    }
}
