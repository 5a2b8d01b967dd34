//! # noteeve-summarizer
//!
//! Text summarization for the noteeve study-notes application.
//!
//! Two backends share the [`Summarize`] trait:
//!
//! - [`ExtractiveSummarizer`]: picks the highest-scoring sentences of the
//!   input using normalized word frequencies. Pure, synchronous, stateless.
//! - [`RemoteSummarizer`] (feature `remote`): delegates to a hosted inference
//!   endpoint over HTTP.
//!
//! Failures are typed ([`SummarizeError`]) inside the crate and rendered to a
//! friendly display string only at the boundary ([`render`],
//! [`SummaryRequest::respond`]).
//!
//! ```rust
//! let text = "Rust is a systems programming language. ".repeat(20);
//! let summary = noteeve_summarizer::summarize(&text, 2);
//! assert!(summary.starts_with("Rust is a systems programming language."));
//! ```

/// Enter a tracing span for a summarizer stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summarizer_stage", stage = $name).entered();
    };
}

pub mod config;
pub mod errors;
pub mod nlp;
pub mod request;
pub mod summarizer;
pub mod types;

pub use config::{RemoteConfig, SummarizerConfig};
pub use errors::{Result, SummarizeError};
pub use request::SummaryRequest;
pub use summarizer::extractive::ExtractiveSummarizer;
#[cfg(feature = "remote")]
pub use summarizer::remote::RemoteSummarizer;
pub use summarizer::{render, Backend, Summarize, Summary};
pub use types::{OutputOrder, ScoredSentence, Sentence, SentenceIdentity};

/// Default number of sentences in an extractive summary.
pub const DEFAULT_MAX_SENTENCES: usize = 5;

/// Inputs with fewer whitespace-delimited words than this are not summarized.
pub const DEFAULT_MIN_WORDS: usize = 50;

/// Summarize `text` extractively and render the outcome for display.
///
/// Never fails: degenerate inputs produce the fixed messages
/// `"Text is too short to summarize."` and `"Unable to summarize text."`.
/// `max_sentences` below 1 is treated as 1.
pub fn summarize(text: &str, max_sentences: usize) -> String {
    ExtractiveSummarizer::new()
        .with_max_sentences(max_sentences)
        .summarize_display(text)
}
