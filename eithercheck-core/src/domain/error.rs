// eithercheck-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Configuration Error: {0}")]
    #[diagnostic(
        code(eithercheck::domain::configuration),
        help("An either rule needs at least one entry in 'either_attributes'.")
    )]
    Configuration(String),

    #[error("Rule declared on '{attribute}' cannot skip empty values")]
    #[diagnostic(
        code(eithercheck::domain::skip_on_empty),
        help("Remove 'skip_on_empty' or set it to false: skipping empty values disables the rule.")
    )]
    SkipOnEmpty { attribute: String },

    #[error("Invalid rule declaration: {0}")]
    #[diagnostic(code(eithercheck::domain::declaration))]
    InvalidDeclaration(#[from] validator::ValidationErrors),
}
