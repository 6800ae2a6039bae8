// eithercheck-core/src/domain/rule/either.rs

// "Either this attribute or one of those is required".
// The rule passes as soon as ONE value among the primary attribute and its alternatives is
// filled. It must run even when the primary value is empty, which is why SKIP_ON_EMPTY is false.

use std::iter;

use tracing::debug;

use super::AttributeRule;
use super::config::EitherRuleConfig;
use crate::domain::client::ClientOptions;
use crate::domain::error::DomainError;
use crate::domain::message::{DEFAULT_MESSAGE, ErrorParams, Violation};
use crate::error::EitherError;
use crate::ports::{ClientRenderer, ErrorSink, Record, RecordError, ValidationContext};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EitherRequiredRule {
    either_attributes: Vec<String>,
    message: String,
}

impl EitherRequiredRule {
    pub fn new<I, S>(either_attributes: I, message: Option<String>) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let either_attributes: Vec<String> = either_attributes.into_iter().map(Into::into).collect();
        if either_attributes.is_empty() {
            return Err(DomainError::Configuration(
                "either_attributes are not set".to_string(),
            ));
        }

        Ok(Self {
            either_attributes,
            message: message.unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
        })
    }

    /// Builds the rule from a declaration, rejecting any attempt to skip empty values.
    pub fn from_config(config: &EitherRuleConfig) -> Result<Self, DomainError> {
        let rule = Self::new(config.either_attributes.iter().cloned(), config.message.clone())?;

        if config.skip_on_empty == Some(true) {
            return Err(DomainError::SkipOnEmpty {
                attribute: config.attributes.join(", "),
            });
        }
        config.validate()?;

        Ok(rule)
    }

    pub fn either_attributes(&self) -> &[String] {
        &self.either_attributes
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// `{attribute}` and `{either_attributes}` values for `attribute` on `record`.
    pub fn error_params(
        &self,
        record: &dyn Record,
        attribute: &str,
    ) -> Result<ErrorParams, RecordError> {
        let either_labels = self
            .either_attributes
            .iter()
            .map(|a| record.label(a))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ErrorParams::for_either(record.label(attribute)?, &either_labels))
    }

    fn formatted_message(
        &self,
        record: &dyn Record,
        attribute: &str,
        ctx: &ValidationContext<'_>,
    ) -> Result<(String, ErrorParams), RecordError> {
        let params = self.error_params(record, attribute)?;
        let message = ctx.formatter.format(&self.message, &params, ctx.locale);
        Ok((message, params))
    }

    /// Payload of the browser-side check: input ids plus the same message the server reports.
    pub fn client_options(
        &self,
        record: &dyn Record,
        attribute: &str,
        ctx: &ValidationContext<'_>,
    ) -> Result<ClientOptions, RecordError> {
        let either_attributes = self
            .either_attributes
            .iter()
            .map(|a| record.input_id(a))
            .collect::<Result<Vec<_>, _>>()?;
        let (message, _) = self.formatted_message(record, attribute, ctx)?;

        Ok(ClientOptions {
            attribute: record.input_id(attribute)?,
            either_attributes,
            message,
            trim: ctx.emptiness.trims_whitespace(),
        })
    }

    /// Self-contained script fragment that pushes the message onto `messages`
    /// when every listed input is empty.
    pub fn render_client_check(
        &self,
        record: &dyn Record,
        attribute: &str,
        ctx: &ValidationContext<'_>,
        renderer: &dyn ClientRenderer,
    ) -> Result<String, EitherError> {
        let options = self.client_options(record, attribute, ctx)?;
        renderer.render_check(&options)
    }
}

impl AttributeRule for EitherRequiredRule {
    const SKIP_ON_EMPTY: bool = false;

    fn validate_attribute(
        &self,
        record: &dyn Record,
        attribute: &str,
        ctx: &ValidationContext<'_>,
        sink: &mut dyn ErrorSink,
    ) -> Result<(), RecordError> {
        let mut filled = 0usize;
        for key in iter::once(attribute).chain(self.either_attributes.iter().map(String::as_str)) {
            if !ctx.emptiness.is_empty(&record.value(key)?) {
                filled += 1;
            }
        }

        debug!(
            attribute,
            either = ?self.either_attributes,
            filled,
            "either rule evaluated"
        );

        if filled == 0 {
            let (message, params) = self.formatted_message(record, attribute, ctx)?;
            sink.add_error(Violation {
                attribute: attribute.to_string(),
                message,
                params,
            });
        }
        Ok(())
    }

    fn client_validate_attribute(
        &self,
        record: &dyn Record,
        attribute: &str,
        ctx: &ValidationContext<'_>,
        renderer: &dyn ClientRenderer,
    ) -> Result<Option<String>, EitherError> {
        self.render_client_check(record, attribute, ctx, renderer).map(Some)
    }
}
