// eithercheck-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::record::RecordError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EitherError {
    // --- DOMAIN ERRORS (rule configuration) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, Parsing, Templating) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- HOST LOOKUP ERRORS (passed through untouched) ---
    #[error(transparent)]
    Record(#[from] RecordError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_payload(raw: &str) -> Result<serde_json::Value, EitherError> {
        let value = serde_json::from_str(raw).map_err(InfrastructureError::from)?;
        Ok(value)
    }

    #[test]
    fn test_library_errors_arrive_through_their_layer() {
        assert!(matches!(
            parse_payload("{"),
            Err(EitherError::Infrastructure(InfrastructureError::JsonError(_)))
        ));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = EitherError::from(InfrastructureError::from(io));
        assert!(matches!(
            err,
            EitherError::Infrastructure(InfrastructureError::Io(_))
        ));
        assert!(err.to_string().contains("denied"));
    }
}
