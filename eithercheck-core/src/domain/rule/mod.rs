// eithercheck-core/src/domain/rule/mod.rs

pub mod config;
pub mod either;

pub use config::EitherRuleConfig;
pub use either::EitherRequiredRule;

use crate::error::EitherError;
use crate::ports::{ClientRenderer, ErrorSink, Record, RecordError, ValidationContext};

/// A rule the host runs once per declared attribute.
pub trait AttributeRule: Send + Sync {
    /// Whether the host may skip this rule when the attribute's own value is empty.
    /// Fixed per rule type so a declaration cannot switch it.
    const SKIP_ON_EMPTY: bool;

    fn validate_attribute(
        &self,
        record: &dyn Record,
        attribute: &str,
        ctx: &ValidationContext<'_>,
        sink: &mut dyn ErrorSink,
    ) -> Result<(), RecordError>;

    /// Client-side mirror of `validate_attribute`, if the rule has one.
    fn client_validate_attribute(
        &self,
        _record: &dyn Record,
        _attribute: &str,
        _ctx: &ValidationContext<'_>,
        _renderer: &dyn ClientRenderer,
    ) -> Result<Option<String>, EitherError> {
        Ok(None)
    }

    /// Validates each attribute in turn, honoring `SKIP_ON_EMPTY`.
    fn validate_attributes(
        &self,
        record: &dyn Record,
        attributes: &[String],
        ctx: &ValidationContext<'_>,
        sink: &mut dyn ErrorSink,
    ) -> Result<(), RecordError> {
        for attribute in attributes {
            if Self::SKIP_ON_EMPTY && ctx.emptiness.is_empty(&record.value(attribute)?) {
                continue;
            }
            self.validate_attribute(record, attribute, ctx, sink)?;
        }
        Ok(())
    }
}
