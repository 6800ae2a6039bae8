// eithercheck-core/src/application/client.rs

use serde::Serialize;

use super::ruleset::RuleSet;
use crate::domain::rule::AttributeRule;
use crate::error::EitherError;
use crate::infrastructure::compiler::ScriptRenderer;
use crate::ports::{Record, ValidationContext};

/// Browser-side check for one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientCheck {
    pub attribute: String,
    pub input_id: String,
    pub script: String,
}

/// Renders the client check of every bound attribute, or only of `only` when given.
pub fn client_checks(
    rule_set: &RuleSet,
    record: &dyn Record,
    ctx: &ValidationContext<'_>,
    only: Option<&str>,
) -> Result<Vec<ClientCheck>, EitherError> {
    let renderer = ScriptRenderer::shared();
    let mut checks = Vec::new();
    for bound in rule_set.iter() {
        for attribute in &bound.attributes {
            if only.is_some_and(|a| a != attribute) {
                continue;
            }
            if let Some(script) =
                bound.rule.client_validate_attribute(record, attribute, ctx, renderer)?
            {
                checks.push(ClientCheck {
                    attribute: attribute.clone(),
                    input_id: record.input_id(attribute)?,
                    script,
                });
            }
        }
    }
    Ok(checks)
}
