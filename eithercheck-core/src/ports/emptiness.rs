// eithercheck-core/src/ports/emptiness.rs

use super::record::AttributeValue;

/// The host's "is this value absent" predicate, shared by every rule it runs.
pub trait Emptiness: Send + Sync {
    fn is_empty(&self, value: &AttributeValue) -> bool;

    /// Whether whitespace-only strings count as empty. The browser mirror trims when true.
    fn trims_whitespace(&self) -> bool {
        false
    }
}
