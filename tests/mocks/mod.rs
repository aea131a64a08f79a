mod mock_predicate_factory;

pub use mock_predicate_factory::{MockPredicateFactory, RecordedCall};
