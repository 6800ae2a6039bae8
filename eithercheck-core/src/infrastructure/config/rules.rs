// eithercheck-core/src/infrastructure/config/rules.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{info, instrument, warn};

use crate::domain::rule::EitherRuleConfig;
use crate::infrastructure::adapters::emptiness::EmptinessMode;
use crate::infrastructure::adapters::json_record::JsonRecord;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::DEFAULT_LOCALE;

pub const LOCALE_ENV: &str = "EITHERCHECK_LOCALE";

/// A rule file: form-level settings plus the rule declarations.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RuleFile {
    /// Form name used to build input ids (`ContactForm` -> `contactform-email`).
    #[serde(default)]
    pub form: Option<String>,

    #[serde(default = "default_locale")]
    pub locale: String,

    #[serde(default)]
    pub emptiness: EmptinessMode,

    #[serde(default)]
    pub labels: BTreeMap<String, String>,

    #[serde(default)]
    pub rules: Vec<EitherRuleConfig>,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl RuleFile {
    /// Wraps raw record values with this file's form name and labels.
    pub fn record_from_json(&self, content: &str) -> Result<JsonRecord, InfrastructureError> {
        let mut record = JsonRecord::from_json_str(content)?.with_labels(self.labels.clone());
        if let Some(form) = &self.form {
            record = record.with_form(form.clone());
        }
        Ok(record)
    }
}

// --- LOADER ---

#[instrument]
pub fn load_rule_file(path: &Path) -> Result<RuleFile, InfrastructureError> {
    if !path.exists() {
        return Err(InfrastructureError::ConfigNotFound(
            path.display().to_string(),
        ));
    }

    let content = fs::read_to_string(path)?;
    let mut rule_file = parse_rule_file(&content)?;
    info!(path = ?path, rules = rule_file.rules.len(), "Rule file loaded");

    apply_env_overrides(&mut rule_file);
    Ok(rule_file)
}

pub fn parse_rule_file(content: &str) -> Result<RuleFile, InfrastructureError> {
    serde_yaml::from_str(content).map_err(Into::into)
}

fn apply_env_overrides(rule_file: &mut RuleFile) {
    // EITHERCHECK_LOCALE=fr-FR eithercheck check ...
    if let Ok(val) = std::env::var(LOCALE_ENV) {
        if val.trim().is_empty() {
            warn!("{} is set but empty, ignoring", LOCALE_ENV);
            return;
        }
        info!(old = ?rule_file.locale, new = ?val, "Overriding locale via ENV");
        rule_file.locale = val;
    }
}
