//! PaperLens Extractor - Named-entity extraction
//!
//! Produces `(span, label)` pairs from raw paper text and buckets the
//! consumed labels into author / organization / citation sets.

use paperlens_core::{NerLabel, Result};
use serde::{Deserialize, Serialize};

/// Extracted entity from text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedEntity {
    pub text: String,
    pub label: NerLabel,
    pub start: usize,
    pub end: usize,
    pub confidence: f32,
}

/// Trait for entity extractors
pub trait EntityExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Result<Vec<ExtractedEntity>>;
}

pub mod bucket;
pub mod ner;
