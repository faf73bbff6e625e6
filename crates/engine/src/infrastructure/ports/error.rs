//! Error types for port operations.

use modegrid_domain::NodeId;

/// Host operation errors with context for debugging.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HostError {
    /// Node not found - includes the ID for actionable error messages.
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// Host API call failed - includes operation name for tracing.
    #[error("Host error in {operation}: {message}")]
    Operation {
        operation: &'static str,
        message: String,
    },
}

impl HostError {
    /// Create an Operation error with operation context.
    pub fn operation(operation: &'static str, message: impl ToString) -> Self {
        Self::Operation {
            operation,
            message: message.to_string(),
        }
    }

    /// Check if this is a NodeNotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NodeNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_error_names_operation() {
        let err = HostError::operation("clone_node", "read-only page");
        assert_eq!(err.to_string(), "Host error in clone_node: read-only page");
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_is_detectable() {
        assert!(HostError::NodeNotFound(NodeId::new()).is_not_found());
    }
}
