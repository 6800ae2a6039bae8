// eithercheck-core/src/infrastructure/adapters/mod.rs

pub mod context;
pub mod emptiness;
pub mod error_bag;
pub mod formatter;
pub mod json_record;

pub use emptiness::{BlankEmptiness, EmptinessMode, HostEmptiness};
pub use error_bag::ErrorBag;
pub use formatter::PlaceholderFormatter;
pub use json_record::JsonRecord;
