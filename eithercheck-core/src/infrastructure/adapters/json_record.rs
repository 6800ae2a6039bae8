// eithercheck-core/src/infrastructure/adapters/json_record.rs

// Record adapter over a JSON object. Labels fall back to a humanized attribute name and
// input ids follow the usual `form-attribute` naming of server-rendered forms.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::infrastructure::error::InfrastructureError;
use crate::ports::{AttributeValue, Record, RecordError};

#[derive(Debug, Clone, Default)]
pub struct JsonRecord {
    form_name: Option<String>,
    values: Map<String, Value>,
    labels: BTreeMap<String, String>,
}

impl JsonRecord {
    pub fn new(values: Map<String, Value>) -> Self {
        Self {
            values,
            ..Default::default()
        }
    }

    pub fn from_value(value: Value) -> Result<Self, InfrastructureError> {
        match value {
            Value::Object(values) => Ok(Self::new(values)),
            other => Err(InfrastructureError::RecordShape(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self, InfrastructureError> {
        Self::from_value(serde_json::from_str(content)?)
    }

    pub fn with_form(mut self, form_name: impl Into<String>) -> Self {
        self.form_name = Some(form_name.into());
        self
    }

    pub fn with_label(mut self, attribute: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(attribute.into(), label.into());
        self
    }

    pub fn with_labels<I, K, V>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels
            .extend(labels.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn form_name(&self) -> Option<&str> {
        self.form_name.as_deref()
    }
}

impl Record for JsonRecord {
    fn value(&self, attribute: &str) -> Result<AttributeValue, RecordError> {
        self.values
            .get(attribute)
            .cloned()
            .ok_or_else(|| RecordError::UnknownAttribute(attribute.to_string()))
    }

    fn label(&self, attribute: &str) -> Result<String, RecordError> {
        Ok(self
            .labels
            .get(attribute)
            .cloned()
            .unwrap_or_else(|| generate_label(attribute)))
    }

    fn input_id(&self, attribute: &str) -> Result<String, RecordError> {
        Ok(input_id(self.form_name.as_deref(), attribute))
    }
}

/// `first_name`, `firstName` and `first-name` all become `First Name`.
pub fn generate_label(attribute: &str) -> String {
    let mut spaced = String::with_capacity(attribute.len() + 4);
    let mut prev_upper = false;
    for c in attribute.chars() {
        if c.is_uppercase() && !prev_upper {
            spaced.push(' ');
        }
        prev_upper = c.is_uppercase();
        spaced.push(match c {
            '-' | '_' | '.' => ' ',
            other => other,
        });
    }

    spaced
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Id of the input rendered for `attribute`: `ContactForm` + `email` -> `contactform-email`.
pub fn input_id(form_name: Option<&str>, attribute: &str) -> String {
    let name = match form_name.filter(|f| !f.is_empty()) {
        Some(form) => format!("{}[{}]", form, attribute),
        None => attribute.to_string(),
    };
    name.replace("[]", "")
        .replace("][", "-")
        .replace('[', "-")
        .replace(']', "")
        .replace([' ', '.'], "-")
        .to_lowercase()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generate_label() {
        assert_eq!(generate_label("email"), "Email");
        assert_eq!(generate_label("first_name"), "First Name");
        assert_eq!(generate_label("firstName"), "First Name");
        assert_eq!(generate_label("postal-address.line"), "Postal Address Line");
        assert_eq!(generate_label("URL"), "URL");
    }

    #[test]
    fn test_input_id() {
        assert_eq!(input_id(Some("ContactForm"), "email"), "contactform-email");
        assert_eq!(input_id(None, "Email"), "email");
        assert_eq!(input_id(Some(""), "phone"), "phone");
        assert_eq!(input_id(Some("Order"), "items[0]"), "order-items-0");
        assert_eq!(input_id(Some("Order"), "tags[]"), "order-tags");
    }

    #[test]
    fn test_record_lookups() -> anyhow::Result<()> {
        let record = JsonRecord::from_value(json!({ "email": "a@b.com" }))?
            .with_form("ContactForm")
            .with_labels([("email", "E-mail")]);

        assert_eq!(record.value("email")?, json!("a@b.com"));
        assert_eq!(record.label("email")?, "E-mail");
        assert_eq!(record.label("phone")?, "Phone");
        assert_eq!(record.input_id("phone")?, "contactform-phone");
        assert!(matches!(
            record.value("phone"),
            Err(RecordError::UnknownAttribute(a)) if a == "phone"
        ));
        Ok(())
    }

    #[test]
    fn test_non_object_rejected() {
        let err = JsonRecord::from_json_str("[1, 2]").unwrap_err();
        assert!(err.to_string().contains("an array"));
    }
}
