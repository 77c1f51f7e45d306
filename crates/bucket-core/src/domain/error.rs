//! Error taxonomy for bucket-list operations.

use std::fmt;

use thiserror::Error;

/// Result type for everything that talks to the gateway
pub type BucketResult<T> = Result<T, BucketError>;

/// The gateway call an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    SetCompleted,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phrase = match self {
            Operation::List => "list items",
            Operation::Create => "add item",
            Operation::SetCompleted => "update item",
            Operation::Delete => "delete item",
        };
        f.write_str(phrase)
    }
}

/// Why a bucket-list action did not take effect
///
/// None of these are fatal: each one ends only the action that raised it.
#[derive(Debug, Error)]
pub enum BucketError {
    /// Blank submission, rejected before any request is sent
    #[error("description must not be empty")]
    EmptyDescription,

    #[error("failed to {operation}: {source}")]
    Transport {
        operation: Operation,
        source: reqwest::Error,
    },

    #[error("failed to {operation}: server responded with status {status}")]
    Status { operation: Operation, status: u16 },

    #[error("failed to {operation}: malformed response: {source}")]
    Decode {
        operation: Operation,
        source: reqwest::Error,
    },
}

impl BucketError {
    /// The gateway call that failed, if one was made
    pub fn operation(&self) -> Option<Operation> {
        match self {
            BucketError::EmptyDescription => None,
            BucketError::Transport { operation, .. }
            | BucketError::Status { operation, .. }
            | BucketError::Decode { operation, .. } => Some(*operation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = BucketError::Status { operation: Operation::Delete, status: 404 };
        assert_eq!(err.to_string(), "failed to delete item: server responded with status 404");
        assert_eq!(err.operation(), Some(Operation::Delete));
    }

    #[test]
    fn test_validation_has_no_operation() {
        assert_eq!(BucketError::EmptyDescription.operation(), None);
    }
}
