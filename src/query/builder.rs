//! Query-time predicate construction.

use super::predicate::{ContainmentPredicate, ContainmentPredicateFactory, PredicateFactory};
use crate::algorithms::create_trigrams;
use crate::domain::{MatchOperator, SearchMode};
use crate::naming::index_field_name;
use serde::{Deserialize, Deserializer, Serialize};

/// Build a predicate that searches the index fields of `key` for `value`.
///
/// For [`SearchMode::FullTextSearch`] the predicate targets `fts_tri_{key}`
/// with the trigrams of `value`, using `array-contains` when `strict` and
/// `array-contains-any` otherwise. Only trigram fields are ever queried.
///
/// For [`SearchMode::AutoComplete`] the predicate targets `ac_pre_{key}` with
/// `array-contains` and the raw `value`. `strict` is ignored and `value` is
/// not lowercased or trimmed, so callers should normalize it the way the
/// indexed text was normalized.
///
/// # Example
///
/// ```
/// use searchable_fields::domain::{MatchOperator, SearchMode};
/// use searchable_fields::query::{search_by, ContainmentPredicateFactory, PredicateValue};
///
/// let factory = ContainmentPredicateFactory;
/// let p = search_by(&factory, "name", "test", SearchMode::FullTextSearch, true);
/// assert_eq!(p.field, "fts_tri_name");
/// assert_eq!(p.op, MatchOperator::ContainsOne);
/// assert_eq!(p.value, PredicateValue::Array(vec!["tes".into(), "est".into()]));
/// ```
pub fn search_by<F: PredicateFactory>(
    factory: &F,
    key: &str,
    value: &str,
    mode: SearchMode,
    strict: bool,
) -> F::Predicate {
    let field = index_field_name(mode, key);

    match mode {
        SearchMode::FullTextSearch => {
            let tokens = create_trigrams(value);
            let op = MatchOperator::for_strictness(strict);
            tracing::debug!(
                field = %field,
                op = %op,
                tokens = tokens.len(),
                "Built full-text predicate"
            );
            factory.containment(field, op, tokens.into())
        }
        SearchMode::AutoComplete => {
            tracing::debug!(field = %field, "Built autocomplete predicate");
            factory.containment(field, MatchOperator::ContainsOne, value.into())
        }
    }
}

/// [`search_by`] with the built-in [`ContainmentPredicateFactory`].
pub fn containment_predicate(
    key: &str,
    value: &str,
    mode: SearchMode,
    strict: bool,
) -> ContainmentPredicate {
    search_by(&ContainmentPredicateFactory, key, value, mode, strict)
}

/// A search over one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Original document field name
    pub key: String,

    /// Text to search for
    pub value: String,

    /// Search mode; names other than `"fullTextSearch"` query the
    /// autocomplete field
    #[serde(deserialize_with = "deserialize_query_mode")]
    pub search_type: SearchMode,

    /// Require every trigram rather than any (full-text only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
}

impl SearchRequest {
    pub fn new(key: impl Into<String>, value: impl Into<String>, search_type: SearchMode) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            search_type,
            strict: None,
        }
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = Some(strict);
        self
    }

    /// Effective strictness, falling back to `default_strict`.
    pub fn is_strict(&self, default_strict: bool) -> bool {
        self.strict.unwrap_or(default_strict)
    }

    /// Build this request's predicate. A missing `strict` means `true`.
    pub fn to_predicate<F: PredicateFactory>(&self, factory: &F) -> F::Predicate {
        self.to_predicate_with_default(factory, true)
    }

    /// Build this request's predicate with an explicit default strictness.
    pub fn to_predicate_with_default<F: PredicateFactory>(
        &self,
        factory: &F,
        default_strict: bool,
    ) -> F::Predicate {
        search_by(
            factory,
            &self.key,
            &self.value,
            self.search_type,
            self.is_strict(default_strict),
        )
    }
}

fn deserialize_query_mode<'de, D>(deserializer: D) -> Result<SearchMode, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    Ok(SearchMode::for_query(&name))
}
