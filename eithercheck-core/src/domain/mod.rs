pub mod client;
pub mod error;
pub mod message;
pub mod rule;

pub use client::ClientOptions;
pub use error::DomainError;
pub use message::{DEFAULT_MESSAGE, ErrorParams, Violation};
