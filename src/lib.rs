//! Float collection math node library
//!
//! Applies an elementwise or reducing operation to one or two float
//! collections, broadcasting scalars, and returns a float collection.

// Public modules
pub mod constants;
pub mod error;
pub mod invocation;
pub mod nodes;
pub mod plugin_interface;

// Re-export commonly used types
pub use error::{NodeError, NodeResult};
pub use plugin_interface::{NodeData, ParameterChange, PluginCore};
pub use nodes::math::collection_math::{
    evaluate, CollectionMathError, CollectionOperation, FloatCollectionMathNode,
    FloatCollectionMathNodeFactory, Operand, Result,
};
pub use invocation::{invoke, invoke_json, InvocationOutput, InvocationRequest};
