//! Phrase extraction components
//!
//! This module provides proper-noun chunk detection, in-text
//! deduplication, final-pass corrections and cross-field reconciliation.

pub mod chunker;
pub mod dedup;
pub mod normalize;
pub mod reconcile;
