//! Index field naming.
//!
//! Generated fields are named `{modePrefix}_{gramTypeCode}_{key}`, for example
//! `fts_tri_title` or `ac_pre_title`. Index and query code both call
//! [`index_field_name`], which is what keeps stored fields and predicates
//! pointing at the same name.

use crate::domain::{GramType, SearchMode};

const SEPARATOR: char = '_';

/// Build a field name from its three parts.
pub fn field_name(mode: SearchMode, gram_type: GramType, key: &str) -> String {
    let prefix = mode.field_prefix();
    let code = gram_type.code();
    let mut name = String::with_capacity(prefix.len() + code.len() + key.len() + 2);
    name.push_str(prefix);
    name.push(SEPARATOR);
    name.push_str(code);
    name.push(SEPARATOR);
    name.push_str(key);
    name
}

/// Field name holding the tokens a mode indexes for `key`.
///
/// # Example
///
/// ```
/// use searchable_fields::domain::SearchMode;
/// use searchable_fields::naming::index_field_name;
///
/// assert_eq!(index_field_name(SearchMode::FullTextSearch, "title"), "fts_tri_title");
/// assert_eq!(index_field_name(SearchMode::AutoComplete, "title"), "ac_pre_title");
/// ```
pub fn index_field_name(mode: SearchMode, key: &str) -> String {
    field_name(mode, mode.gram_type(), key)
}

/// The parts of a generated field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedFieldName<'a> {
    pub mode: SearchMode,
    pub gram_type: GramType,
    pub key: &'a str,
}

/// Split a generated field name back into its parts.
///
/// Only the two formats the builders produce are recognized: `fts_tri_*` and
/// `ac_pre_*`. Keys may themselves contain underscores.
pub fn parse_field_name(name: &str) -> Option<ParsedFieldName<'_>> {
    let (prefix, rest) = name.split_once(SEPARATOR)?;
    let (code, key) = rest.split_once(SEPARATOR)?;

    let mode = SearchMode::from_field_prefix(prefix)?;
    let gram_type = GramType::from_code(code)?;
    if gram_type != mode.gram_type() {
        return None;
    }

    Some(ParsedFieldName {
        mode,
        gram_type,
        key,
    })
}

/// Whether `name` is a field the index builder would generate.
pub fn is_index_field_name(name: &str) -> bool {
    parse_field_name(name).is_some()
}
