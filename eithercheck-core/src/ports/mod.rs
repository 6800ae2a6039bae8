// eithercheck-core/src/ports/mod.rs

pub mod emptiness;
pub mod formatter;
pub mod record;
pub mod renderer;
pub mod sink;

pub use emptiness::Emptiness;
pub use formatter::MessageFormatter;
pub use record::{AttributeValue, Record, RecordError};
pub use renderer::ClientRenderer;
pub use sink::ErrorSink;

pub const DEFAULT_LOCALE: &str = "en-US";

/// Host services a rule needs on every call.
#[derive(Clone, Copy)]
pub struct ValidationContext<'a> {
    pub emptiness: &'a dyn Emptiness,
    pub formatter: &'a dyn MessageFormatter,
    pub locale: &'a str,
}

impl<'a> ValidationContext<'a> {
    pub fn new(
        emptiness: &'a dyn Emptiness,
        formatter: &'a dyn MessageFormatter,
        locale: &'a str,
    ) -> Self {
        Self {
            emptiness,
            formatter,
            locale,
        }
    }

    pub fn with_locale(self, locale: &'a str) -> Self {
        Self { locale, ..self }
    }
}
