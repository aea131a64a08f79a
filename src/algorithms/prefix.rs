//! Word-prefix generation for autocomplete fields.

use super::GramResult;
use crate::domain::GramType;
use once_cell::sync::Lazy;
use regex::Regex;

// ECMAScript `\s`: Unicode White_Space without U+0085, plus U+FEFF.
static WORD_SEPARATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[\x{09}-\x{0D}\x{20}\x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+",
    )
    .expect("Failed to compile word separator regex")
});

/// Generate every leading prefix of every word in `text`.
///
/// The input is lowercased and split on runs of whitespace (the ECMAScript
/// `\s` set, so U+FEFF separates words and U+0085 does not); empty pieces from
/// leading, trailing or repeated whitespace are dropped. Each word contributes
/// its prefixes from one unit up to the full word, and words keep their order.
/// Shared prefixes across words are not de-duplicated.
///
/// # Example
///
/// ```
/// use searchable_fields::algorithms::generate_prefixes;
///
/// let result = generate_prefixes("Hi There");
/// assert_eq!(result.tokens, ["h", "hi", "t", "th", "the", "ther", "there"]);
/// ```
pub fn generate_prefixes(text: &str) -> GramResult {
    let tokens = prefixes(text);
    tracing::trace!(tokens = tokens.len(), "Generated prefixes");
    GramResult::new(GramType::Prefix, tokens)
}

/// Prefix tokens of `text` without the type tag.
pub fn prefixes(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = WORD_SEPARATOR
        .split(&lowered)
        .filter(|w| !w.is_empty())
        .collect();

    let total: usize = words.iter().map(|w| w.chars().count()).sum();
    let mut out = Vec::with_capacity(total);

    for word in words {
        for (idx, c) in word.char_indices() {
            out.push(word[..idx + c.len_utf8()].to_string());
        }
    }
    out
}
