//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// What exactly was wrong with an input record.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InvalidInputKind {
    /// A date field could not be parsed as a calendar date.
    UnparseableDate,
    /// A required field was absent.
    MissingField,
}

impl core::fmt::Display for InvalidInputKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InvalidInputKind::UnparseableDate => f.write_str("unparseable date"),
            InvalidInputKind::MissingField => f.write_str("missing required field"),
        }
    }
}

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// malformed input, lookups). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An input record was malformed (bad date, missing field).
    #[error("invalid input ({kind}): {detail}")]
    InvalidInput {
        kind: InvalidInputKind,
        detail: String,
    },

    /// A value failed validation (e.g. blank name, negative quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A requested resource was not found (domain-level).
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn unparseable_date(detail: impl Into<String>) -> Self {
        Self::InvalidInput {
            kind: InvalidInputKind::UnparseableDate,
            detail: detail.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::InvalidInput {
            kind: InvalidInputKind::MissingField,
            detail: field.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Sub-kind of an `InvalidInput` error, if this is one.
    pub fn invalid_input_kind(&self) -> Option<InvalidInputKind> {
        match self {
            DomainError::InvalidInput { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message_names_kind_and_detail() {
        let err = DomainError::missing_field("expiry_date");
        assert_eq!(
            err.to_string(),
            "invalid input (missing required field): expiry_date"
        );
        assert_eq!(err.invalid_input_kind(), Some(InvalidInputKind::MissingField));
    }

    #[test]
    fn non_input_errors_have_no_input_kind() {
        assert_eq!(DomainError::validation("x").invalid_input_kind(), None);
        assert_eq!(DomainError::not_found("kale").invalid_input_kind(), None);
    }
}
