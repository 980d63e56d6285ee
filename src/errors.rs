use serde::Serialize;

/// Errors surfaced by the hub services.
///
/// The browsing primitives in [`crate::resource`] never fail: an unmatched
/// filter is an empty view, not an error. Failures only appear at the service
/// boundary, where input is parsed and records are looked up.
#[derive(Debug, thiserror::Error, Serialize)]
pub enum ServiceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Operation cancelled: {0}")]
    Cancelled(String),

    #[error("Event error: {0}")]
    EventError(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Other error: {0}")]
    #[serde(skip_serializing)]
    Other(#[from] anyhow::Error),
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::ValidationError(err.to_string())
    }
}

impl ServiceError {
    pub fn not_found(kind: &str, id: impl std::fmt::Display) -> Self {
        ServiceError::NotFound(format!("{} {} not found", kind, id))
    }

    /// Short machine-readable code, used by the CLI's JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::NotFound(_) => "not_found",
            ServiceError::ValidationError(_) => "validation_error",
            ServiceError::InvalidOperation(_) => "invalid_operation",
            ServiceError::Conflict(_) => "conflict",
            ServiceError::Cancelled(_) => "cancelled",
            ServiceError::EventError(_) => "event_error",
            ServiceError::InternalError(_) | ServiceError::Other(_) => "internal_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::{ValidationError, ValidationErrors};

    #[test]
    fn not_found_message_names_kind_and_id() {
        let err = ServiceError::not_found("Inventory item", "SKU-99999");
        assert_eq!(err.to_string(), "Not found: Inventory item SKU-99999 not found");
        assert_eq!(err.code(), "not_found");
    }

    #[test]
    fn validation_errors_convert() {
        let mut errors = ValidationErrors::new();
        errors.add("reason", ValidationError::new("length"));
        let err: ServiceError = errors.into();
        assert!(matches!(err, ServiceError::ValidationError(_)));
        assert_eq!(err.code(), "validation_error");
    }

    #[test]
    fn serializes_variant_with_message() {
        let err = ServiceError::Cancelled("auto-assign".into());
        let json = serde_json::to_value(&err).expect("serialize");
        assert_eq!(json, serde_json::json!({ "Cancelled": "auto-assign" }));
    }
}
