//! Error types for the domain layer
//!
//! `DomainError` covers construction of value objects (names, ids, node kinds).
//! `PlanError` covers the two ways a grid plan can be refused. Both are plain
//! data so adapters can map them without reaching for `anyhow`.

use thiserror::Error;

use crate::value_objects::CollectionName;

/// Error raised while constructing domain values
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., empty or overlong names)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Invalid ID format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for values that break a domain invariant.
    ///
    /// # Example
    /// ```ignore
    /// if name.trim().is_empty() {
    ///     return Err(DomainError::validation("Mode name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

/// Reasons a grid plan cannot be produced.
///
/// Planning is all-or-nothing: when one of these is returned no variant has
/// been emitted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// No collection was enabled, or none of the enabled ones resolved
    #[error("Select at least one collection to generate variants")]
    NoAxesSelected,

    /// A resolved collection has no modes, so the product of mode counts is zero
    #[error("Collection '{collection}' has no modes")]
    EmptyAxis { collection: CollectionName },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("name cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: name cannot be empty");
    }

    #[test]
    fn test_invalid_id_error() {
        let err = DomainError::invalid_id("not-a-uuid");
        assert_eq!(err.to_string(), "Invalid ID format: not-a-uuid");
    }

    #[test]
    fn test_empty_axis_names_collection() {
        let err = PlanError::EmptyAxis {
            collection: CollectionName::new("Theme").unwrap(),
        };
        assert_eq!(err.to_string(), "Collection 'Theme' has no modes");
    }

    #[test]
    fn test_no_axes_message_is_user_facing() {
        assert_eq!(
            PlanError::NoAxesSelected.to_string(),
            "Select at least one collection to generate variants"
        );
    }
}
