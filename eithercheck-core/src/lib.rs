// eithercheck-core/src/lib.rs

// 1. Mandatory documentation for production code
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// What the rule needs from its host: Record, ErrorSink, MessageFormatter, Emptiness.
pub mod ports;

// 2. Domain
// The either-required rule, its declaration and its wire payload.
// Depends on the ports and the crate error type, never on infrastructure.
pub mod domain;

// 3. Infrastructure (Adapters)
// JSON record, error bag, formatter, script renderer, rule-file loader.
pub mod infrastructure;

// 4. Application (Use Cases)
// Binds declared rules to attributes and runs them against a record.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use domain::rule::{AttributeRule, EitherRequiredRule, EitherRuleConfig};
pub use error::EitherError;
pub use ports::{Record, RecordError, ValidationContext};
