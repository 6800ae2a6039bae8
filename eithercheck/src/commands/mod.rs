// eithercheck/src/commands/mod.rs

pub mod check;
pub mod runtime;
pub mod script;

use std::path::Path;

use anyhow::Context;
use eithercheck_core::application::RuleSet;
use eithercheck_core::infrastructure::adapters::JsonRecord;
use eithercheck_core::infrastructure::config::{RuleFile, load_rule_file};

/// Everything a command needs: the parsed file, its rules and the record.
pub struct Loaded {
    pub file: RuleFile,
    pub rules: RuleSet,
    pub record: JsonRecord,
}

pub fn load(config: &Path, record: &Path, locale: Option<String>) -> anyhow::Result<Loaded> {
    let mut file = load_rule_file(config)
        .with_context(|| format!("Failed to load rule file {:?}", config))?;
    if let Some(locale) = locale {
        file.locale = locale;
    }

    let rules = RuleSet::from_rule_file(&file)
        .with_context(|| format!("Invalid rule declaration in {:?}", config))?;

    let content = std::fs::read_to_string(record)
        .with_context(|| format!("Failed to read record {:?}", record))?;
    let record = file
        .record_from_json(&content)
        .with_context(|| format!("Failed to parse record {:?}", record))?;

    Ok(Loaded {
        file,
        rules,
        record,
    })
}
