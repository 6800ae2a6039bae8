// eithercheck/src/commands/check.rs
//
// USE CASE: Validate a record server-side.

use std::path::PathBuf;

use comfy_table::Table;
use eithercheck_core::application::validate_record;
use eithercheck_core::infrastructure::adapters::{ErrorBag, PlaceholderFormatter};
use eithercheck_core::ports::ValidationContext;

use super::load;
use crate::cli::OutputFormat;

pub fn execute(
    config: PathBuf,
    record: PathBuf,
    locale: Option<String>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let loaded = load(&config, &record, locale)?;
    let ctx = ValidationContext::new(
        loaded.file.emptiness.predicate(),
        &PlaceholderFormatter,
        &loaded.file.locale,
    );

    let mut bag = ErrorBag::new();
    validate_record(&loaded.rules, &loaded.record, &ctx, &mut bag)?;

    match format {
        OutputFormat::Json => println!("{}", bag.to_json()?),
        OutputFormat::Table => {
            if bag.is_empty() {
                println!("✅ {} rule(s) passed.", loaded.rules.len());
            } else {
                let mut table = Table::new();
                table.set_header(vec!["Attribute", "Message"]);
                for v in bag.violations() {
                    table.add_row(vec![v.attribute.as_str(), v.message.as_str()]);
                }
                println!("{table}");
            }
        }
    }

    if !bag.is_empty() {
        eprintln!("❌ {} violation(s) found.", bag.len());
        std::process::exit(1);
    }

    Ok(())
}
