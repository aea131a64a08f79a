//! Index-time generation of searchable fields.
//!
//! Given a field key, its raw value and the requested search modes, this
//! module produces the token arrays to store next to the document. Writing
//! them is left to the caller.

pub mod builder;
pub mod document;

pub use builder::{
    make_searchable, make_searchable_all, make_searchable_with, Searchable, SearchableFields,
};
pub use document::{apply_to_document, strip_searchable_fields};
