//! Predicate construction seam.
//!
//! The database client owns the real query-constraint type. The query
//! builder only ever asks a [`PredicateFactory`] for a containment predicate
//! over a field and hands the result back untouched.

use crate::domain::MatchOperator;
use serde::{Deserialize, Serialize};

/// Target of a containment predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredicateValue {
    /// A single raw value
    Scalar(String),
    /// A list of tokens
    Array(Vec<String>),
}

impl From<String> for PredicateValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for PredicateValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<Vec<String>> for PredicateValue {
    fn from(tokens: Vec<String>) -> Self {
        Self::Array(tokens)
    }
}

/// Builds database predicates for the query builder.
///
/// Implementations wrap the database client's constraint primitive. They
/// must not interpret the field name or value.
pub trait PredicateFactory {
    /// Predicate handle produced by the database client.
    type Predicate;

    /// Build a containment predicate over `field`.
    fn containment(&self, field: String, op: MatchOperator, value: PredicateValue)
        -> Self::Predicate;
}

impl<F: PredicateFactory + ?Sized> PredicateFactory for &F {
    type Predicate = F::Predicate;

    fn containment(
        &self,
        field: String,
        op: MatchOperator,
        value: PredicateValue,
    ) -> Self::Predicate {
        (**self).containment(field, op, value)
    }
}

/// A plain, serializable containment predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainmentPredicate {
    /// Index field the predicate targets
    pub field: String,

    /// Containment operator
    pub op: MatchOperator,

    /// Value or tokens to match
    pub value: PredicateValue,
}

/// Factory producing [`ContainmentPredicate`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainmentPredicateFactory;

impl PredicateFactory for ContainmentPredicateFactory {
    type Predicate = ContainmentPredicate;

    fn containment(
        &self,
        field: String,
        op: MatchOperator,
        value: PredicateValue,
    ) -> ContainmentPredicate {
        ContainmentPredicate { field, op, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_predicate_value_serialization() {
        let scalar = PredicateValue::from("al");
        assert_eq!(serde_json::to_value(&scalar).unwrap(), json!("al"));

        let array = PredicateValue::from(vec!["tes".to_string(), "est".to_string()]);
        assert_eq!(serde_json::to_value(&array).unwrap(), json!(["tes", "est"]));
    }

    #[test]
    fn test_predicate_value_deserialization() {
        let value: PredicateValue = serde_json::from_value(json!(["a"])).unwrap();
        assert_eq!(value, PredicateValue::Array(vec!["a".to_string()]));

        let value: PredicateValue = serde_json::from_value(json!("a")).unwrap();
        assert_eq!(value, PredicateValue::Scalar("a".to_string()));
    }

    #[test]
    fn test_factory_passes_arguments_through() {
        let predicate = ContainmentPredicateFactory.containment(
            "ac_pre_name".to_string(),
            MatchOperator::ContainsOne,
            "jo".into(),
        );
        assert_eq!(
            serde_json::to_value(&predicate).unwrap(),
            json!({"field": "ac_pre_name", "op": "array-contains", "value": "jo"})
        );
    }

    #[test]
    fn test_factory_by_reference() {
        fn build<F: PredicateFactory>(factory: F) -> F::Predicate {
            factory.containment(
                "f".to_string(),
                MatchOperator::ContainsAny,
                PredicateValue::Array(Vec::new()),
            )
        }

        let factory = ContainmentPredicateFactory;
        let predicate = build(&factory);
        assert_eq!(predicate.op, MatchOperator::ContainsAny);
    }
}
