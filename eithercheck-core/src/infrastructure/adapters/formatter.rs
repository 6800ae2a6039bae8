// eithercheck-core/src/infrastructure/adapters/formatter.rs

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::domain::message::ErrorParams;
use crate::ports::MessageFormatter;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("placeholder pattern is valid")
});

/// Substitutes `{name}` tokens found in the params. Unknown tokens stay as written.
/// No translation: the locale is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderFormatter;

impl MessageFormatter for PlaceholderFormatter {
    fn format(&self, template: &str, params: &ErrorParams, _locale: &str) -> String {
        PLACEHOLDER
            .replace_all(template, |caps: &Captures| {
                params
                    .get(&caps[1])
                    .map(str::to_string)
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_placeholders_replaced() {
        let params = ErrorParams::for_either("Email".into(), &["Phone".to_string()]);
        let out = PlaceholderFormatter.format(
            "Either '{attribute}', '{either_attributes}' has to be filled",
            &params,
            "en-US",
        );
        assert_eq!(out, "Either 'Email', 'Phone' has to be filled");
    }

    #[test]
    fn test_unknown_placeholder_kept() {
        let params = ErrorParams::for_either("Email".into(), &["Phone".to_string()]);
        let out = PlaceholderFormatter.format("{attribute} {min} {}", &params, "fr-FR");
        assert_eq!(out, "Email {min} {}");
    }

    #[test]
    fn test_values_are_not_reformatted() {
        // A label containing a placeholder must not be expanded a second time.
        let params = ErrorParams::for_either("{either_attributes}".into(), &["Phone".to_string()]);
        let out = PlaceholderFormatter.format("{attribute}", &params, "en-US");
        assert_eq!(out, "{either_attributes}");
    }
}
