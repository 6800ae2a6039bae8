// eithercheck/src/commands/script.rs
//
// USE CASE: Emit the browser-side mirror of the declared rules.

use std::path::PathBuf;

use eithercheck_core::application::client_checks;
use eithercheck_core::infrastructure::adapters::PlaceholderFormatter;
use eithercheck_core::ports::ValidationContext;

use super::load;

pub fn execute(
    config: PathBuf,
    record: PathBuf,
    attribute: Option<String>,
    locale: Option<String>,
) -> anyhow::Result<()> {
    let loaded = load(&config, &record, locale)?;
    let ctx = ValidationContext::new(
        loaded.file.emptiness.predicate(),
        &PlaceholderFormatter,
        &loaded.file.locale,
    );

    let checks = client_checks(&loaded.rules, &loaded.record, &ctx, attribute.as_deref())?;
    if checks.is_empty() {
        if let Some(attribute) = attribute {
            anyhow::bail!("No rule is declared on attribute '{}'", attribute);
        }
        tracing::warn!("No rules declared, nothing to render");
    }

    for check in checks {
        println!("// {} (#{})", check.attribute, check.input_id);
        println!("{}", check.script);
    }

    Ok(())
}
