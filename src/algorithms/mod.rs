//! Token generators for searchable fields.
//!
//! Both generators are pure functions of their input and return a
//! [`GramResult`] that records which kind of tokens were produced. Callers
//! derive the field name from that type, not from their own literals.

pub mod ngrams;
pub mod prefix;

use crate::domain::GramType;
use serde::{Deserialize, Serialize};

pub use ngrams::{create_bigrams, create_trigrams, generate_grams};
pub use prefix::{generate_prefixes, prefixes};

/// Tokens produced by one generator call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GramResult {
    /// Kind of tokens in `tokens`
    #[serde(rename = "type")]
    pub gram_type: GramType,

    /// Tokens in generation order, duplicates kept
    #[serde(rename = "arr")]
    pub tokens: Vec<String>,
}

impl GramResult {
    pub fn new(gram_type: GramType, tokens: Vec<String>) -> Self {
        Self { gram_type, tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }
}
