use thiserror::Error;

/// Custom error type for the micrograd framework.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum MicrogradError {
    #[error("Cycle detected in the computation graph at node {node}")]
    CycleDetected { node: String },

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Operation {operation} expects {expected} operand(s), found {actual}")]
    ArityMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },

    #[error("Shape mismatch: expected {expected}, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
