//! Sliding-window n-gram generation.
//!
//! Windows are taken over the `char`s of the input with no normalization:
//! case, whitespace and punctuation are kept as-is, and combining marks are
//! windowed as separate units.

use super::GramResult;
use crate::domain::GramType;
use crate::error::{GramError, GramResultOf};

/// Generate bigrams (`n = 2`) or trigrams (`n = 3`) from `text`.
///
/// Text shorter than `n` yields no tokens. Text of exactly `n` units yields a
/// single token equal to the text.
///
/// # Errors
///
/// Returns [`GramError::InvalidArgument`] for any other `n`.
///
/// # Example
///
/// ```
/// use searchable_fields::algorithms::generate_grams;
/// use searchable_fields::domain::GramType;
///
/// let result = generate_grams(3, "banana").unwrap();
/// assert_eq!(result.gram_type, GramType::Trigram);
/// assert_eq!(result.tokens, ["ban", "ana", "nan", "ana"]);
/// ```
pub fn generate_grams(n: usize, text: &str) -> GramResultOf<GramResult> {
    let gram_type = GramType::from_window(n).ok_or(GramError::InvalidArgument { n })?;
    let result = GramResult::new(gram_type, sliding_windows(text, n));

    tracing::trace!(n, tokens = result.len(), "Generated grams");
    Ok(result)
}

/// Create every 2-unit window of `text`.
pub fn create_bigrams(text: &str) -> Vec<String> {
    sliding_windows(text, 2)
}

/// Create every 3-unit window of `text`.
pub fn create_trigrams(text: &str) -> Vec<String> {
    sliding_windows(text, 3)
}

fn sliding_windows(text: &str, size: usize) -> Vec<String> {
    let units: Vec<char> = text.chars().collect();
    if units.len() < size {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(units.len() - size + 1);
    for window in units.windows(size) {
        out.push(window.iter().collect());
    }
    out
}
