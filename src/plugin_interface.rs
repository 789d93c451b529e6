//! Plugin interface traits and types
//!
//! Values that cross the boundary between the host graph and this node.

use std::any::Any;
use serde::{Serialize, Deserialize};

/// Core plugin trait that host adapters extend
pub trait PluginCore: Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

/// Node data types exchanged with the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeData {
    // Basic types
    Float(f64),
    Int(i32),
    Boolean(bool),
    String(String),

    // Collections
    FloatArray(Vec<f64>),

    // Special
    None,
}

impl NodeData {
    /// Variant name, used when reporting type mismatches
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeData::Float(_) => "Float",
            NodeData::Int(_) => "Int",
            NodeData::Boolean(_) => "Boolean",
            NodeData::String(_) => "String",
            NodeData::FloatArray(_) => "FloatArray",
            NodeData::None => "None",
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            NodeData::Float(f) => Some(*f),
            NodeData::Int(i) => Some(f64::from(*i)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            NodeData::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Parameter change notification
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterChange {
    pub parameter: String,
    pub value: NodeData,
}

impl ParameterChange {
    pub fn new(parameter: impl Into<String>, value: NodeData) -> Self {
        Self {
            parameter: parameter.into(),
            value,
        }
    }
}
