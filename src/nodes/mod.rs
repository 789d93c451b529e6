//! Node system - Core data structures and node implementations

// Core node system modules
pub mod node;
pub mod port;
pub mod factory;

// Node implementations
pub mod math;

// Re-export core types
pub use node::{Node, NodeId};
pub use port::{Port, PortId, PortType};

// Re-export factory types
pub use factory::{
    NodeFactory, NodeMetadata, NodeCategory, NodeRegistry,
    DataType, PortDefinition, global_registry,
};
