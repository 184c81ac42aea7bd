//! Natural Language Processing components
//!
//! This module provides tokenization, the garbage guard, stopwords and
//! part-of-speech tagging.

pub mod guard;
pub mod stopwords;
pub mod tagger;
pub mod tokenizer;
