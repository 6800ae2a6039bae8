// eithercheck-core/src/application/ruleset.rs

use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::rule::{EitherRequiredRule, EitherRuleConfig};
use crate::infrastructure::config::RuleFile;

/// A rule together with the attributes it was declared on.
#[derive(Debug, Clone)]
pub struct BoundRule {
    pub attributes: Vec<String>,
    pub rule: EitherRequiredRule,
}

#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<BoundRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds every declaration up front; the first invalid one aborts.
    pub fn from_configs(configs: &[EitherRuleConfig]) -> Result<Self, DomainError> {
        let mut set = Self::new();
        for config in configs {
            let rule = EitherRequiredRule::from_config(config)?;
            set.bind(config.attributes.clone(), rule);
        }
        debug!(rules = set.len(), "rule set built");
        Ok(set)
    }

    pub fn from_rule_file(file: &RuleFile) -> Result<Self, DomainError> {
        Self::from_configs(&file.rules)
    }

    pub fn bind(&mut self, attributes: Vec<String>, rule: EitherRequiredRule) {
        self.rules.push(BoundRule { attributes, rule });
    }

    pub fn iter(&self) -> impl Iterator<Item = &BoundRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::parse_rule_file;

    #[test]
    fn test_build_from_file() -> anyhow::Result<()> {
        let file = parse_rule_file(
            r#"
rules:
  - attributes: [email, backup_email]
    either_attributes: [phone]
"#,
        )?;
        let set = RuleSet::from_rule_file(&file)?;
        assert_eq!(set.len(), 1);
        let bound = set.iter().next().ok_or_else(|| anyhow::anyhow!("no rule"))?;
        assert_eq!(bound.attributes, vec!["email", "backup_email"]);
        assert_eq!(bound.rule.either_attributes(), ["phone".to_string()]);
        Ok(())
    }

    #[test]
    fn test_missing_alternatives_abort() -> anyhow::Result<()> {
        let file = parse_rule_file(
            r#"
rules:
  - attributes: [email]
    either_attributes: [phone]
  - attributes: [name]
"#,
        )?;
        assert!(matches!(
            RuleSet::from_rule_file(&file),
            Err(DomainError::Configuration(_))
        ));
        Ok(())
    }

    #[test]
    fn test_declaration_without_target() -> anyhow::Result<()> {
        let file = parse_rule_file(
            r#"
rules:
  - attributes: []
    either_attributes: [phone]
"#,
        )?;
        assert!(matches!(
            RuleSet::from_rule_file(&file),
            Err(DomainError::InvalidDeclaration(_))
        ));
        Ok(())
    }
}
