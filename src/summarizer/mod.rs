//! Summarization backends
//!
//! [`extractive`] selects existing sentences by word-frequency score;
//! [`remote`] forwards the text to a hosted inference endpoint. Both
//! implement [`Summarize`].

pub mod extractive;
pub mod frequency;
#[cfg(feature = "remote")]
pub mod remote;
pub mod selector;

use serde::Serialize;

use crate::errors::Result;
use crate::types::ScoredSentence;

/// Which backend produced a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    Extractive,
    Remote,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Extractive => "extractive",
            Self::Remote => "remote",
        }
    }
}

/// A successful summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// The summary text
    pub text: String,
    /// Selected source sentences (extractive backend only)
    pub sentences: Vec<ScoredSentence>,
    pub backend: Backend,
}

/// A summarization backend.
///
/// Implementations hold only immutable configuration and can be shared
/// across request handlers.
pub trait Summarize: Send + Sync {
    /// Summarize `text`.
    fn summarize(&self, text: &str) -> Result<Summary>;

    /// Which backend this is.
    fn backend(&self) -> Backend;

    /// Summarize and render the outcome as a display string. Never fails.
    fn summarize_display(&self, text: &str) -> String {
        render(self.summarize(text))
    }
}

/// Render a summarization outcome for display: the summary text, or the
/// error's user message.
pub fn render(result: Result<Summary>) -> String {
    match result {
        Ok(summary) => summary.text,
        Err(err) => err.user_message(),
    }
}
