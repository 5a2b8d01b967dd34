//! Remote summarizer using a hosted inference API
//!
//! Sends one blocking request per call to a Hugging Face style endpoint:
//!
//! ```json
//! { "inputs": "Summarize the following text:\n...",
//!   "parameters": { "max_new_tokens": 150, "temperature": 0.3 } }
//! ```
//!
//! and reads `[{"generated_text": "..."}]` (text-generation models) or
//! `[{"summary_text": "..."}]` (summarization models). No retries.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use super::{Backend, Summarize, Summary};
use crate::config::RemoteConfig;
use crate::errors::{Result, SummarizeError};

/// Longest error body kept in [`SummarizeError::HttpStatus`].
const MAX_ERROR_BODY: usize = 200;

#[derive(Debug, Serialize)]
struct InferenceRequest {
    inputs: String,
    parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    max_new_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct InferenceOutput {
    generated_text: Option<String>,
    summary_text: Option<String>,
}

/// Summarizer backed by a remote inference endpoint
pub struct RemoteSummarizer {
    client: Client,
    config: RemoteConfig,
}

impl RemoteSummarizer {
    /// Create a remote summarizer.
    ///
    /// A missing token is not an error here; it is reported by
    /// [`summarize`](Summarize::summarize) before any request is made.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    /// Get the configuration
    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    fn request_body(&self, text: &str) -> InferenceRequest {
        InferenceRequest {
            inputs: format!("{}{}", self.config.prompt_prefix, text),
            parameters: InferenceParameters {
                max_new_tokens: self.config.max_new_tokens,
                temperature: self.config.temperature,
            },
        }
    }

    fn call(&self, token: &str, text: &str) -> Result<String> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(token)
            .json(&self.request_body(text))
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(SummarizeError::HttpStatus {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        parse_response(&body)
    }
}

impl Summarize for RemoteSummarizer {
    fn summarize(&self, text: &str) -> Result<Summary> {
        let token = self.config.token().ok_or(SummarizeError::MissingCredential)?;

        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("remote_summarize", endpoint = %self.config.endpoint)
            .entered();

        match self.call(token, text) {
            Ok(text) => Ok(Summary {
                text,
                sentences: Vec::new(),
                backend: Backend::Remote,
            }),
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(code = err.code(), error = %err, "remote summarization failed");
                Err(err)
            }
        }
    }

    fn backend(&self) -> Backend {
        Backend::Remote
    }
}

/// Extract the summary from a successful response body.
///
/// Accepts a JSON array whose first element carries `generated_text` or
/// `summary_text`; anything else is [`SummarizeError::UnexpectedResponse`].
pub fn parse_response(body: &str) -> Result<String> {
    let outputs: Vec<InferenceOutput> =
        serde_json::from_str(body).map_err(|_| SummarizeError::UnexpectedResponse)?;

    outputs
        .into_iter()
        .next()
        .and_then(|o| o.generated_text.or(o.summary_text))
        .ok_or(SummarizeError::UnexpectedResponse)
}
