//! Errors raised by the host-facing node layer

use crate::nodes::math::collection_math::CollectionMathError;

/// Failures of a registry lookup or of the node it dispatched to
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    /// No factory is registered for the requested node type
    #[error("Unknown node type: {0}")]
    UnknownNodeType(String),

    #[error(transparent)]
    CollectionMath(#[from] CollectionMathError),
}

pub type NodeResult<T> = std::result::Result<T, NodeError>;
