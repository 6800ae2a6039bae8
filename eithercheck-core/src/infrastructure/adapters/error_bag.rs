// eithercheck-core/src/infrastructure/adapters/error_bag.rs

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::message::Violation;
use crate::ports::ErrorSink;

/// Collects violations in the order they were reported.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ErrorBag {
    violations: Vec<Violation>,
}

impl ErrorBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn errors_for(&self, attribute: &str) -> Vec<&str> {
        self.violations
            .iter()
            .filter(|v| v.attribute == attribute)
            .map(|v| v.message.as_str())
            .collect()
    }

    pub fn first_error(&self, attribute: &str) -> Option<&str> {
        self.errors_for(attribute).into_iter().next()
    }

    /// `{ attribute: [messages...] }`, the shape form frameworks return to clients.
    pub fn grouped(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut grouped: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for v in &self.violations {
            grouped
                .entry(v.attribute.as_str())
                .or_default()
                .push(v.message.as_str());
        }
        grouped
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.grouped())
    }
}

impl ErrorSink for ErrorBag {
    fn add_error(&mut self, violation: Violation) {
        self.violations.push(violation);
    }
}
