//! Searchable Fields - n-gram and prefix index fields for document databases.
//!
//! Document stores without native text search can still answer substring and
//! autocomplete queries if each searchable value is stored alongside arrays of
//! derived tokens. This crate generates those arrays at write time and builds
//! the matching containment predicate at query time, using one naming scheme
//! for both.
//!
//! # Architecture
//!
//! - **algorithms**: Trigram/bigram and word-prefix generators
//! - **domain**: Gram types, search modes and match operators
//! - **naming**: Index field names (`fts_tri_<key>`, `ac_pre_<key>`)
//! - **index**: Index-time field generation and document merging
//! - **query**: Query-time predicate construction over a pluggable factory
//! - **error**: Error types
//! - **config**: Configuration from environment variables
//! - **metrics**: Service counters
//! - **server**: MCP tools served over stdio by the binary

pub mod algorithms;
pub mod config;
pub mod domain;
pub mod error;
pub mod index;
pub mod metrics;
pub mod naming;
pub mod query;
pub mod server;

// Re-export commonly used types
pub use algorithms::{generate_grams, generate_prefixes, GramResult};
pub use config::Config;
pub use domain::{GramType, MatchOperator, SearchMode, ValidationError};
pub use error::{ConfigError, GramError, RequestError};
pub use index::{make_searchable, SearchableFields};
pub use metrics::{Metrics, MetricsSummary};
pub use query::{search_by, ContainmentPredicate, PredicateFactory, PredicateValue, SearchRequest};
pub use server::SearchableService;
