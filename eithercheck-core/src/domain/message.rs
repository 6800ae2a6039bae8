// eithercheck-core/src/domain/message.rs

use serde::Serialize;
use std::collections::BTreeMap;

pub const DEFAULT_MESSAGE: &str = "Either '{attribute}', '{either_attributes}' has to be filled";

pub const ATTRIBUTE_PARAM: &str = "attribute";
pub const EITHER_ATTRIBUTES_PARAM: &str = "either_attributes";

/// Placeholder values substituted into a message template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorParams(BTreeMap<String, String>);

impl ErrorParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Params of an either rule: the primary label and the joined alternative labels.
    pub fn for_either(primary_label: String, either_labels: &[String]) -> Self {
        let mut params = Self::new();
        params.insert(ATTRIBUTE_PARAM, primary_label);
        params.insert(EITHER_ATTRIBUTES_PARAM, either_labels.join(", "));
        params
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// One failed check, as handed to the host's error sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub attribute: String,
    pub message: String,
    pub params: ErrorParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_either_params_keep_configured_order() {
        let params = ErrorParams::for_either(
            "Email".into(),
            &["Phone".to_string(), "Fax".to_string(), "Address".to_string()],
        );
        assert_eq!(params.get("attribute"), Some("Email"));
        assert_eq!(params.get("either_attributes"), Some("Phone, Fax, Address"));
    }

    #[test]
    fn test_single_alternative_has_no_separator() {
        let params = ErrorParams::for_either("Email".into(), &["Phone".to_string()]);
        assert_eq!(params.get("either_attributes"), Some("Phone"));
    }
}
