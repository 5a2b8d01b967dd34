//! Error types for summarization.
//!
//! Every failure the summarizers can hit is a [`SummarizeError`] variant.
//! Variants carry a stable snake_case [`code`](SummarizeError::code) for
//! callers that branch on the reason, and a
//! [`user_message`](SummarizeError::user_message) that is what the form layer
//! shows instead of a server error.

use thiserror::Error;

/// Shown when the input is below the minimum word count.
pub const TOO_SHORT_MESSAGE: &str = "Text is too short to summarize.";

/// Shown when no word survives stopword and alphabetic filtering.
pub const NO_SCORABLE_CONTENT_MESSAGE: &str = "Unable to summarize text.";

/// Shown when neither typed text nor extracted pages contain anything.
pub const NO_TEXT_MESSAGE: &str = "No text found to summarize.";

/// Prefix of every remote-backend failure message.
pub const ERROR_PREFIX: &str = "ERROR: ";

/// Summarization failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummarizeError {
    /// Input has fewer whitespace-delimited words than required
    #[error("input has {words} words, at least {min_words} required")]
    TooShort { words: usize, min_words: usize },

    /// Every word was a stopword, number, or punctuation
    #[error("no scorable words after stopword filtering")]
    NoScorableContent,

    /// No typed text and no extracted page text
    #[error("no text provided")]
    NoText,

    /// Remote backend has no API token
    #[error("Hugging Face API token not configured.")]
    MissingCredential,

    /// Connection, timeout, or body read failure
    #[error("{0}")]
    Transport(String),

    /// Remote endpoint answered with a non-2xx status
    #[error("{status} response from inference API: {body}")]
    HttpStatus { status: u16, body: String },

    /// Remote endpoint answered 2xx with an unrecognized body
    #[error("Unexpected response from Hugging Face API.")]
    UnexpectedResponse,

    /// Configuration failed validation
    #[error("Invalid summarizer configuration: {0}")]
    InvalidConfig(String),
}

impl SummarizeError {
    /// Stable machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::TooShort { .. } => "too_short",
            Self::NoScorableContent => "no_scorable_content",
            Self::NoText => "no_text",
            Self::MissingCredential => "missing_credential",
            Self::Transport(_) => "upstream_transport",
            Self::HttpStatus { .. } => "upstream_status",
            Self::UnexpectedResponse => "unexpected_response",
            Self::InvalidConfig(_) => "invalid_config",
        }
    }

    /// Whether the failure came from the remote backend.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::MissingCredential
                | Self::Transport(_)
                | Self::HttpStatus { .. }
                | Self::UnexpectedResponse
        )
    }

    /// Display string for the form layer.
    ///
    /// Input problems map to fixed sentences; backend and configuration
    /// problems are prefixed with `"ERROR: "`.
    pub fn user_message(&self) -> String {
        match self {
            Self::TooShort { .. } => TOO_SHORT_MESSAGE.to_string(),
            Self::NoScorableContent => NO_SCORABLE_CONTENT_MESSAGE.to_string(),
            Self::NoText => NO_TEXT_MESSAGE.to_string(),
            other => format!("{ERROR_PREFIX}{other}"),
        }
    }
}

#[cfg(feature = "remote")]
impl From<reqwest::Error> for SummarizeError {
    fn from(err: reqwest::Error) -> Self {
        SummarizeError::Transport(err.to_string())
    }
}

/// Result type alias for summarization operations
pub type Result<T> = std::result::Result<T, SummarizeError>;
