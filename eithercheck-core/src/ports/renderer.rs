// eithercheck-core/src/ports/renderer.rs

use crate::domain::client::ClientOptions;
use crate::error::EitherError;

/// Turns a client payload into browser code.
pub trait ClientRenderer: Send + Sync {
    fn render_check(&self, options: &ClientOptions) -> Result<String, EitherError>;
}
