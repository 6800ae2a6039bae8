// eithercheck-core/src/ports/formatter.rs

use crate::domain::message::ErrorParams;

pub trait MessageFormatter: Send + Sync {
    /// Formats `template` with `params` for `locale`.
    fn format(&self, template: &str, params: &ErrorParams, locale: &str) -> String;
}
