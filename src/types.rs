//! Core data types for summarization

use serde::{Deserialize, Serialize};

/// A sentence of the normalized input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Sentence text, trimmed
    pub text: String,
    /// Position in the document (0-based)
    pub index: usize,
    /// Byte offset of the first character in the normalized text
    pub start: usize,
    /// Byte offset one past the last character in the normalized text
    pub end: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, index: usize, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            index,
            start,
            end,
        }
    }
}

/// A sentence picked for the summary, with its importance score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSentence {
    pub sentence: Sentence,
    /// Sum of the normalized frequencies of the sentence's words
    pub score: f64,
    /// Rank among all scored sentences (0 = best)
    pub rank: usize,
}

/// Order of the selected sentences in the assembled summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputOrder {
    /// Original document order (reads naturally).
    #[default]
    Document,
    /// Highest score first.
    Score,
}

/// How sentences are identified when scores are recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceIdentity {
    /// One score per sentence position; repeated sentences are independent.
    #[default]
    Position,
    /// One score per distinct sentence text. Repeated sentences share an
    /// entry whose score accumulates, anchored at the first occurrence.
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(OutputOrder::default(), OutputOrder::Document);
        assert_eq!(SentenceIdentity::default(), SentenceIdentity::Position);
    }

    #[test]
    fn test_enum_serde_names() {
        assert_eq!(serde_json::to_value(OutputOrder::Score).unwrap(), "score");
        let identity: SentenceIdentity = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(identity, SentenceIdentity::Text);
    }
}
