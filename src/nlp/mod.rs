//! Natural Language Processing components
//!
//! This module provides whitespace normalization, sentence segmentation,
//! word tokenization and stopword filtering.

pub mod stopwords;
pub mod tokenizer;
