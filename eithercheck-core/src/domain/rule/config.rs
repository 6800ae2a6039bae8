// eithercheck-core/src/domain/rule/config.rs

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// One rule declaration, as written in a rule file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct EitherRuleConfig {
    /// Attributes the rule is declared on; errors are reported on these.
    #[validate(
        length(min = 1, message = "A rule must be declared on at least one attribute"),
        custom(function = "validate_attribute_names")
    )]
    pub attributes: Vec<String>,

    #[validate(custom(function = "validate_attribute_names"))]
    #[serde(default)]
    pub either_attributes: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Accepted for compatibility with hosts that declare it; only `false` is valid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_on_empty: Option<bool>,
}

fn validate_attribute_names(names: &[String]) -> Result<(), ValidationError> {
    if names.iter().any(|n| n.trim().is_empty()) {
        let mut err = ValidationError::new("blank_attribute");
        err.message = Some("Attribute names cannot be blank".into());
        return Err(err);
    }
    Ok(())
}
