// eithercheck-core/src/ports/record.rs

// The record under validation is owned by the host. The rule only reads through this port,
// so it never knows whether values come from a form struct, a JSON body or an ORM model.

use miette::Diagnostic;
use thiserror::Error;

/// Attribute values as the host hands them over.
pub type AttributeValue = serde_json::Value;

#[derive(Error, Debug, Diagnostic)]
pub enum RecordError {
    #[error("Unknown attribute '{0}'")]
    #[diagnostic(code(eithercheck::record::unknown_attribute))]
    UnknownAttribute(String),

    /// Adapter-specific failure, carried as-is.
    #[error(transparent)]
    Host(Box<dyn std::error::Error + Send + Sync>),
}

pub trait Record {
    /// Current value of `attribute`.
    fn value(&self, attribute: &str) -> Result<AttributeValue, RecordError>;

    /// Human-readable label of `attribute`, used in error messages.
    fn label(&self, attribute: &str) -> Result<String, RecordError>;

    /// Id of the input element rendered for `attribute`.
    fn input_id(&self, attribute: &str) -> Result<String, RecordError>;
}
