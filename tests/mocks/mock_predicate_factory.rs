use searchable_fields::domain::MatchOperator;
use searchable_fields::query::{PredicateFactory, PredicateValue};
use std::sync::{Arc, Mutex};

/// A predicate call captured by the mock.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub field: String,
    pub op: MatchOperator,
    pub value: PredicateValue,
}

/// Mock predicate factory that records every call and returns an opaque id.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockPredicateFactory {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

#[allow(dead_code)]
impl MockPredicateFactory {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls.lock().unwrap().last().cloned()
    }
}

impl Default for MockPredicateFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl PredicateFactory for MockPredicateFactory {
    type Predicate = usize;

    fn containment(&self, field: String, op: MatchOperator, value: PredicateValue) -> usize {
        let mut calls = self.calls.lock().unwrap();
        calls.push(RecordedCall { field, op, value });
        calls.len() - 1
    }
}
