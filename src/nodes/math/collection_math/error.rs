//! Error taxonomy for the float collection math node

/// Failures surfaced by a single collection math invocation.
///
/// Every variant is terminal: the invocation produces no partial result.
#[derive(Debug, thiserror::Error)]
pub enum CollectionMathError {
    /// The operation selector does not name a known operation
    #[error("Unknown operation: {0}")]
    InvalidOperation(String),

    /// DIVIDE met a zero divisor within the truncated range
    #[error("Division by zero at index {index}")]
    DivisionByZero { index: usize },

    /// An operand is neither a scalar nor a list of scalars
    #[error("Type mismatch on {port}: expected a float or a float collection, found {found}")]
    TypeMismatch { port: String, found: String },

    #[error("Invalid invocation JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read invocation: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for node computations and the invocation boundary
pub type Result<T> = std::result::Result<T, CollectionMathError>;

impl CollectionMathError {
    /// Build a type mismatch error for the named port
    pub fn type_mismatch(port: impl Into<String>, found: impl Into<String>) -> Self {
        CollectionMathError::TypeMismatch {
            port: port.into(),
            found: found.into(),
        }
    }
}
