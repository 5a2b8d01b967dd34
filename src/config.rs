//! Summarizer configuration.
//!
//! Both configs deserialize from JSON with every field optional:
//!
//! ```json
//! {
//!   "max_sentences": 3,
//!   "min_words": 50,
//!   "language": "en",
//!   "output_order": "document",
//!   "sentence_identity": "position",
//!   "extra_stopwords": ["lecture", "chapter"]
//! }
//! ```
//!
//! The remote API token is passed in explicitly. [`RemoteConfig::from_env`]
//! exists for the process edge; nothing in the crate reads the environment
//! on its own.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SummarizeError};
use crate::nlp::stopwords::StopwordFilter;
use crate::types::{OutputOrder, SentenceIdentity};

/// Environment variable holding the inference API token.
pub const TOKEN_ENV_VAR: &str = "HF_API_TOKEN";

/// Environment variable overriding the inference endpoint.
pub const ENDPOINT_ENV_VAR: &str = "HF_API_URL";

/// Default hosted inference endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/google/flan-t5-base";

// ─── Extractive ─────────────────────────────────────────────────────────────

/// Configuration for [`ExtractiveSummarizer`](crate::ExtractiveSummarizer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Number of sentences in the summary.
    pub max_sentences: usize,

    /// Inputs with fewer whitespace-delimited words are refused.
    pub min_words: usize,

    /// Stopword list language (see [`StopwordFilter::is_supported`]).
    pub language: String,

    /// Order of the selected sentences in the output.
    pub output_order: OutputOrder,

    /// How repeated sentences are scored.
    pub sentence_identity: SentenceIdentity,

    /// Additional words ignored during frequency counting.
    pub extra_stopwords: Vec<String>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten, skip_serializing)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            max_sentences: crate::DEFAULT_MAX_SENTENCES,
            min_words: crate::DEFAULT_MIN_WORDS,
            language: "en".to_string(),
            output_order: OutputOrder::default(),
            sentence_identity: SentenceIdentity::default(),
            extra_stopwords: Vec::new(),
            unknown_fields: HashMap::new(),
        }
    }
}

impl SummarizerConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SummarizeError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field, reporting all problems at once.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        if self.max_sentences == 0 {
            problems.push("max_sentences must be at least 1".to_string());
        }
        if !StopwordFilter::is_supported(&self.language) {
            problems.push(format!("unsupported language '{}'", self.language));
        }
        if !self.unknown_fields.is_empty() {
            let mut names: Vec<_> = self.unknown_fields.keys().map(String::as_str).collect();
            names.sort_unstable();
            problems.push(format!("unknown field(s): {}", names.join(", ")));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(SummarizeError::InvalidConfig(problems.join("; ")))
        }
    }

    /// Build the stopword filter described by this config.
    pub fn stopword_filter(&self) -> StopwordFilter {
        let mut filter = StopwordFilter::new(&self.language);
        filter.add_stopwords(&self.extra_stopwords);
        filter
    }
}

// ─── Remote ─────────────────────────────────────────────────────────────────

/// Configuration for the remote inference backend.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Bearer token. Never serialized.
    #[serde(skip_serializing)]
    pub api_token: Option<String>,

    /// Inference endpoint URL.
    pub endpoint: String,

    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,

    /// Generation budget sent as `parameters.max_new_tokens`.
    pub max_new_tokens: u32,

    /// Sampling temperature sent as `parameters.temperature`.
    pub temperature: f32,

    /// Instruction prepended to the input text.
    pub prompt_prefix: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 30,
            max_new_tokens: 150,
            temperature: 0.3,
            prompt_prefix: "Summarize the following text:\n".to_string(),
        }
    }
}

impl fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_new_tokens", &self.max_new_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl RemoteConfig {
    /// Create a config with the given token and default settings
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            api_token: Some(token.into()),
            ..Self::default()
        }
    }

    /// Read `HF_API_TOKEN` and `HF_API_URL` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (environment, secrets store, test map).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self {
            api_token: lookup(TOKEN_ENV_VAR),
            ..Self::default()
        };
        if let Some(endpoint) = lookup(ENDPOINT_ENV_VAR).filter(|e| !e.trim().is_empty()) {
            config.endpoint = endpoint;
        }
        config
    }

    /// Set the endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the timeout
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// The token, if present and not blank
    pub fn token(&self) -> Option<&str> {
        self.api_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SummarizerConfig::default();
        assert_eq!(config.max_sentences, 5);
        assert_eq!(config.min_words, 50);
        assert_eq!(config.language, "en");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_minimal() {
        let config = SummarizerConfig::from_json("{}").unwrap();
        assert_eq!(config, SummarizerConfig::default());
    }

    #[test]
    fn test_deserialize_full() {
        let json = r#"{
            "max_sentences": 3,
            "min_words": 10,
            "language": "de",
            "output_order": "score",
            "sentence_identity": "text",
            "extra_stopwords": ["Kapitel"]
        }"#;
        let config = SummarizerConfig::from_json(json).unwrap();
        assert_eq!(config.max_sentences, 3);
        assert_eq!(config.min_words, 10);
        assert_eq!(config.output_order, OutputOrder::Score);
        assert_eq!(config.sentence_identity, SentenceIdentity::Text);
        assert!(config.stopword_filter().is_stopword("kapitel"));
        assert!(config.stopword_filter().is_stopword("und"));
    }

    #[test]
    fn test_validation_collects_all_problems() {
        let json = r#"{ "max_sentences": 0, "language": "xx", "bogus": 1 }"#;
        let err = SummarizerConfig::from_json(json).unwrap_err();
        assert_eq!(err.code(), "invalid_config");
        let msg = err.to_string();
        assert!(msg.contains("max_sentences"));
        assert!(msg.contains("unsupported language 'xx'"));
        assert!(msg.contains("unknown field(s): bogus"));
    }

    #[test]
    fn test_malformed_json() {
        let err = SummarizerConfig::from_json("{ not json").unwrap_err();
        assert_eq!(err.code(), "invalid_config");
    }

    #[test]
    fn test_serialize_skips_unknowns() {
        let value = serde_json::to_value(SummarizerConfig::default()).unwrap();
        assert_eq!(value["output_order"], "document");
        assert!(value.get("unknown_fields").is_none());
    }

    #[test]
    fn test_remote_defaults() {
        let config = RemoteConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.max_new_tokens, 150);
        assert!(config.token().is_none());
    }

    #[test]
    fn test_remote_from_lookup() {
        let config = RemoteConfig::from_lookup(|key| match key {
            TOKEN_ENV_VAR => Some("hf_secret".to_string()),
            ENDPOINT_ENV_VAR => Some("http://localhost:9000/model".to_string()),
            _ => None,
        });
        assert_eq!(config.token(), Some("hf_secret"));
        assert_eq!(config.endpoint, "http://localhost:9000/model");

        let empty = RemoteConfig::from_lookup(|_| None);
        assert!(empty.token().is_none());
        assert_eq!(empty.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_blank_token_is_missing() {
        assert!(RemoteConfig::with_token("   ").token().is_none());
    }

    #[test]
    fn test_token_never_serialized_or_printed() {
        let config = RemoteConfig::with_token("hf_secret");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("hf_secret"));
        assert!(!format!("{config:?}").contains("hf_secret"));
    }

    #[test]
    fn test_remote_deserialize_with_token() {
        let config: RemoteConfig =
            serde_json::from_str(r#"{ "api_token": "abc", "timeout_secs": 40 }"#).unwrap();
        assert_eq!(config.token(), Some("abc"));
        assert_eq!(config.timeout_secs, 40);
    }
}
