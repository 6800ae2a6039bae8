// eithercheck-core/src/ports/sink.rs

use crate::domain::message::Violation;

/// Host-side `addError`: receives each failed check.
pub trait ErrorSink {
    fn add_error(&mut self, violation: Violation);
}

impl ErrorSink for Vec<Violation> {
    fn add_error(&mut self, violation: Violation) {
        self.push(violation);
    }
}
