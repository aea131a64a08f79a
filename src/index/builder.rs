//! Index-time field generation.

use crate::algorithms::{generate_grams, generate_prefixes, GramResult};
use crate::domain::SearchMode;
use crate::error::GramResultOf;
use crate::naming::field_name;
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Generated index fields, keyed by field name.
///
/// Token vectors keep generation order and duplicates. Serializes as a plain
/// JSON object so it can be merged into a stored document as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchableFields(BTreeMap<String, Vec<String>>);

impl SearchableFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens stored under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }

    pub fn insert(&mut self, name: String, tokens: Vec<String>) -> Option<Vec<String>> {
        self.0.insert(name, tokens)
    }

    /// Move every field of `other` into `self`, replacing same-named fields.
    pub fn merge(&mut self, other: SearchableFields) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Total number of tokens across all fields.
    pub fn token_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

impl IntoIterator for SearchableFields {
    type Item = (String, Vec<String>);
    type IntoIter = btree_map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// One field to make searchable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Searchable {
    /// Original document field name
    pub key: String,

    /// Raw text to index
    pub value: String,

    /// Requested mode names; `None` means use the caller's defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_type: Option<Vec<String>>,
}

/// Build the index fields for `key` and `value`.
///
/// `"fullTextSearch"` adds trigrams under `fts_tri_{key}` and
/// `"autoComplete"` adds word prefixes under `ac_pre_{key}`. Other mode names
/// are ignored, so an empty or unrecognized `modes` yields an empty mapping.
///
/// # Example
///
/// ```
/// use searchable_fields::index::make_searchable;
///
/// let fields = make_searchable("title", "test", &["autoComplete", "fullTextSearch"]);
/// assert_eq!(fields.get("fts_tri_title").unwrap(), ["tes", "est"]);
/// assert_eq!(fields.get("ac_pre_title").unwrap(), ["t", "te", "tes", "test"]);
/// ```
pub fn make_searchable<M: AsRef<str>>(key: &str, value: &str, modes: &[M]) -> SearchableFields {
    let mut requested = Vec::with_capacity(SearchMode::ALL.len());
    for name in modes {
        match SearchMode::from_name(name.as_ref()) {
            Some(mode) => requested.push(mode),
            None => tracing::debug!(key, mode = name.as_ref(), "Ignoring unknown search mode"),
        }
    }
    make_searchable_with(key, value, &requested)
}

/// Typed variant of [`make_searchable`].
pub fn make_searchable_with(key: &str, value: &str, modes: &[SearchMode]) -> SearchableFields {
    let mut fields = SearchableFields::new();

    for mode in SearchMode::ALL {
        if !modes.contains(&mode) {
            continue;
        }
        let result = match generate_for(mode, value) {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(error = %e, mode = mode.as_str(), "Skipping searchable field");
                continue;
            }
        };
        let name = field_name(mode, result.gram_type, key);
        tracing::debug!(field = %name, tokens = result.len(), "Built searchable field");
        fields.insert(name, result.tokens);
    }

    fields
}

/// Build and merge the fields of several requests.
///
/// Requests without a `search_type` use `default_modes`.
pub fn make_searchable_all(
    requests: &[Searchable],
    default_modes: &[SearchMode],
) -> SearchableFields {
    let mut fields = SearchableFields::new();
    for request in requests {
        let built = match &request.search_type {
            Some(modes) => make_searchable(&request.key, &request.value, modes),
            None => make_searchable_with(&request.key, &request.value, default_modes),
        };
        fields.merge(built);
    }
    fields
}

fn generate_for(mode: SearchMode, value: &str) -> GramResultOf<GramResult> {
    match mode.gram_type().window() {
        Some(n) => generate_grams(n, value),
        None => Ok(generate_prefixes(value)),
    }
}
