//! Extraction pipeline
//!
//! Wires tokenizer, garbage guard, tagger, chunker and final pass into a
//! single [`ProperNounExtractor`](extractor::ProperNounExtractor).

pub mod extractor;
