//! Domain value types shared by the index and query sides.
//!
//! The gram type codes and search mode prefixes defined here are the only
//! source of the literals that make up generated field names. Both builders
//! go through these types, so index-time and query-time names cannot drift.

pub mod errors;
pub mod gram_type;
pub mod match_operator;
pub mod search_mode;

pub use errors::ValidationError;
pub use gram_type::GramType;
pub use match_operator::MatchOperator;
pub use search_mode::SearchMode;
