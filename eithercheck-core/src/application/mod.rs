// eithercheck-core/src/application/mod.rs

pub mod client;
pub mod ruleset;
pub mod validation;

// --- RE-EXPORTS (FACADE PATTERN) ---
// `use eithercheck_core::application::{RuleSet, validate_record, client_checks};`

pub use client::{ClientCheck, client_checks};
pub use ruleset::{BoundRule, RuleSet};
pub use validation::validate_record;
