// eithercheck-core/src/application/validation.rs

use tracing::{debug, instrument};

use super::ruleset::RuleSet;
use crate::domain::rule::AttributeRule;
use crate::ports::{ErrorSink, Record, RecordError, ValidationContext};

/// Runs every bound rule against `record`, reporting failures to `sink`.
/// Stops at the first lookup error coming from the record.
#[instrument(skip_all, fields(rules = rule_set.len(), locale = ctx.locale))]
pub fn validate_record(
    rule_set: &RuleSet,
    record: &dyn Record,
    ctx: &ValidationContext<'_>,
    sink: &mut dyn ErrorSink,
) -> Result<(), RecordError> {
    for bound in rule_set.iter() {
        bound
            .rule
            .validate_attributes(record, &bound.attributes, ctx, sink)?;
    }
    debug!("record validated");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::{BlankEmptiness, ErrorBag, JsonRecord, PlaceholderFormatter};
    use crate::infrastructure::config::parse_rule_file;
    use serde_json::json;

    fn rule_set() -> RuleSet {
        let file = parse_rule_file(
            r#"
rules:
  - attributes: [email, backup_email]
    either_attributes: [phone, fax]
  - attributes: [company]
    either_attributes: [last_name]
    message: "{attribute} needs {either_attributes}"
"#,
        )
        .unwrap();
        RuleSet::from_rule_file(&file).unwrap()
    }

    #[test]
    fn test_each_attribute_checked_independently() -> anyhow::Result<()> {
        let record = JsonRecord::from_value(json!({
            "email": "", "backup_email": null, "phone": "", "fax": "",
            "company": "ACME", "last_name": ""
        }))?;
        let mut bag = ErrorBag::new();
        validate_record(&rule_set(), &record, &ValidationContext::default(), &mut bag)?;

        assert_eq!(bag.len(), 2);
        assert_eq!(
            bag.first_error("email"),
            Some("Either 'Email', 'Phone, Fax' has to be filled")
        );
        assert_eq!(
            bag.first_error("backup_email"),
            Some("Either 'Backup Email', 'Phone, Fax' has to be filled")
        );
        assert!(bag.first_error("company").is_none());
        Ok(())
    }

    #[test]
    fn test_clean_record() -> anyhow::Result<()> {
        let record = JsonRecord::from_value(json!({
            "email": "", "backup_email": "", "phone": "", "fax": "0102",
            "company": "", "last_name": "Doe"
        }))?;
        let mut bag = ErrorBag::new();
        validate_record(&rule_set(), &record, &ValidationContext::default(), &mut bag)?;
        assert!(bag.is_empty());
        Ok(())
    }

    #[test]
    fn test_host_emptiness_is_used() -> anyhow::Result<()> {
        let record = JsonRecord::from_value(json!({
            "email": "  ", "backup_email": "", "phone": "", "fax": "",
            "company": "x", "last_name": ""
        }))?;

        let mut lenient = ErrorBag::new();
        validate_record(&rule_set(), &record, &ValidationContext::default(), &mut lenient)?;
        // whitespace counts as a value for the default predicate
        assert!(lenient.first_error("email").is_none());

        let mut strict = ErrorBag::new();
        let ctx = ValidationContext::new(&BlankEmptiness, &PlaceholderFormatter, "en-US");
        validate_record(&rule_set(), &record, &ctx, &mut strict)?;
        assert!(strict.first_error("email").is_some());
        Ok(())
    }

    #[test]
    fn test_missing_attribute_stops_validation() -> anyhow::Result<()> {
        let record = JsonRecord::from_value(json!({ "email": "" }))?;
        let mut bag = ErrorBag::new();
        let result = validate_record(&rule_set(), &record, &ValidationContext::default(), &mut bag);
        assert!(matches!(result, Err(RecordError::UnknownAttribute(a)) if a == "phone"));
        Ok(())
    }
}
