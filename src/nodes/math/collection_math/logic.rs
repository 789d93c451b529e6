//! Port-level processing for the float collection math node

use std::any::Any;

use super::error::{CollectionMathError, Result};
use super::functions::{evaluate, Operand};
use super::parameters::FloatCollectionMathNode;
use crate::constants::port;
use crate::plugin_interface::{NodeData, PluginCore};

/// Convert a port value into an operand.
///
/// `NodeData::None` means "not connected" and yields `Ok(None)` so the
/// caller can fall back to the parameter value.
pub fn operand_from_data(port_name: &str, data: &NodeData) -> Result<Option<Operand>> {
    match data {
        NodeData::Float(f) => Ok(Some(Operand::Scalar(*f))),
        NodeData::Int(i) => Ok(Some(Operand::Scalar(f64::from(*i)))),
        NodeData::FloatArray(values) => Ok(Some(Operand::Sequence(values.clone()))),
        NodeData::None => Ok(None),
        other => Err(CollectionMathError::type_mismatch(port_name, other.type_name())),
    }
}

/// Convert an operand back into port data
pub fn operand_to_data(operand: &Operand) -> NodeData {
    match operand {
        Operand::Scalar(value) => NodeData::Float(*value),
        Operand::Sequence(values) => NodeData::FloatArray(values.clone()),
    }
}

/// Float collection math evaluation bound to a set of parameter values
#[derive(Debug, Clone, Default)]
pub struct FloatCollectionMathLogic {
    pub params: FloatCollectionMathNode,
}

impl FloatCollectionMathLogic {
    pub fn new(params: FloatCollectionMathNode) -> Self {
        Self { params }
    }

    /// Process input data and produce the `Collection` output.
    ///
    /// Inputs are read in port order (`A`, `B`); a missing or unconnected
    /// port uses the parameter value instead.
    pub fn process(&self, inputs: &[NodeData]) -> Result<Vec<NodeData>> {
        let a = match inputs.first() {
            Some(data) => operand_from_data(port::INPUT_A, data)?,
            None => None,
        }
        .unwrap_or_else(|| self.params.a.clone());

        let b = match inputs.get(1) {
            Some(data) => operand_from_data(port::INPUT_B, data)?,
            None => None,
        }
        .unwrap_or_else(|| self.params.b.clone());

        let collection = evaluate(self.params.operation, &a, &b, self.params.s)?;
        Ok(vec![NodeData::FloatArray(collection)])
    }
}

impl PluginCore for FloatCollectionMathLogic {
    fn as_any(&self) -> &dyn Any {
        self
    }
}
