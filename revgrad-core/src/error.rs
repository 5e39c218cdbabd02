use thiserror::Error;

/// Custom error type for the revgrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum RevgradError {
    /// A value could not be wrapped into a `Node` (unrepresentable scalar,
    /// malformed raw buffer, or an empty node used where data is required).
    #[error("Invalid value type: {0}")]
    InvalidValueType(String),

    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Arity mismatch in {operation}: expected {expected} values, got {actual}")]
    ArityMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },

    /// A node's value was replaced where that would change what a recorded
    /// operation reads during backward.
    #[error("In-place modification error in {operation}: {reason}")]
    InplaceModificationError { operation: String, reason: String },

    /// The backward scheduler reached a state that correct graph construction
    /// cannot produce. Gradients computed so far must be treated as undefined.
    #[error("Broken graph invariant: {0}")]
    BrokenInvariant(String),
}
