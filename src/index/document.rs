//! Merging generated fields into JSON documents.

use super::builder::SearchableFields;
use crate::naming::is_index_field_name;
use serde_json::{Map, Value};

/// Insert every generated field into `doc` as a JSON string array.
///
/// Existing entries with the same name are replaced. Returns the number of
/// fields written.
pub fn apply_to_document(doc: &mut Map<String, Value>, fields: SearchableFields) -> usize {
    let mut written = 0;
    for (name, tokens) in fields {
        let array = tokens.into_iter().map(Value::String).collect();
        doc.insert(name, Value::Array(array));
        written += 1;
    }
    written
}

/// Remove every generated index field from `doc`.
///
/// Returns the number of fields removed.
pub fn strip_searchable_fields(doc: &mut Map<String, Value>) -> usize {
    let before = doc.len();
    doc.retain(|name, _| !is_index_field_name(name));
    before - doc.len()
}
