// eithercheck-core/src/infrastructure/adapters/context.rs

use super::emptiness::HostEmptiness;
use super::formatter::PlaceholderFormatter;
use crate::ports::{DEFAULT_LOCALE, ValidationContext};

/// Host emptiness, placeholder formatting, `en-US`.
impl Default for ValidationContext<'static> {
    fn default() -> Self {
        Self::new(&HostEmptiness, &PlaceholderFormatter, DEFAULT_LOCALE)
    }
}
