//! Summary form requests.
//!
//! A request carries what the summarizer form submitted: typed text and the
//! text of each page extracted from an uploaded PDF. Typed text wins when it
//! is not blank. Pages that failed extraction upstream are simply absent.

use serde::Deserialize;

use crate::errors::{Result, SummarizeError};
use crate::summarizer::{render, Summarize, Summary};

/// Input submitted to the summarizer form
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SummaryRequest {
    /// Text typed or pasted by the user
    pub user_text: String,
    /// Extracted text of each PDF page, in page order
    pub extracted_pages: Vec<String>,
}

impl SummaryRequest {
    /// Request with typed text only
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            user_text: text.into(),
            extracted_pages: Vec::new(),
        }
    }

    /// Request with extracted PDF pages only
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            user_text: String::new(),
            extracted_pages: pages.into_iter().map(Into::into).collect(),
        }
    }

    /// The text to summarize: trimmed user text if not blank, otherwise the
    /// pages joined by newlines and trimmed. `None` when both are empty.
    pub fn final_text(&self) -> Option<String> {
        let typed = self.user_text.trim();
        if !typed.is_empty() {
            return Some(typed.to_string());
        }

        let mut extracted = String::new();
        for page in &self.extracted_pages {
            extracted.push_str(page);
            extracted.push('\n');
        }
        let extracted = extracted.trim();

        (!extracted.is_empty()).then(|| extracted.to_string())
    }

    /// Resolve the input and summarize it with `summarizer`.
    pub fn summarize(&self, summarizer: &dyn Summarize) -> Result<Summary> {
        let text = self.final_text().ok_or(SummarizeError::NoText)?;
        summarizer.summarize(&text)
    }

    /// Summarize and render the outcome for display. Never fails.
    pub fn respond(&self, summarizer: &dyn Summarize) -> String {
        render(self.summarize(summarizer))
    }
}
