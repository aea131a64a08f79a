//! Query-time predicate construction.
//!
//! Rebuilds the index field name for a key and mode, derives the match
//! target from the search value, and asks a [`PredicateFactory`] for the
//! database predicate.

pub mod builder;
pub mod predicate;

pub use builder::{containment_predicate, search_by, SearchRequest};
pub use predicate::{
    ContainmentPredicate, ContainmentPredicateFactory, PredicateFactory, PredicateValue,
};
