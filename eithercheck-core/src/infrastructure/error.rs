// eithercheck-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(eithercheck::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(eithercheck::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Rule file not found at '{0}'")]
    #[diagnostic(code(eithercheck::infra::config_missing))]
    ConfigNotFound(String),

    // --- RECORDS / PAYLOADS ---
    #[error("JSON Error: {0}")]
    #[diagnostic(
        code(eithercheck::infra::json),
        help("Records must be a JSON object keyed by attribute name.")
    )]
    JsonError(#[from] serde_json::Error),

    #[error("Record Error: {0}")]
    #[diagnostic(code(eithercheck::infra::record))]
    RecordShape(String),

    // --- TEMPLATING ---
    #[error("Template Rendering Error: {0}")]
    #[diagnostic(code(eithercheck::infra::template))]
    TemplateError(#[from] minijinja::Error),
}
