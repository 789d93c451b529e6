//! Float collection math node parameters

use super::error::{CollectionMathError, Result};
use super::functions::{evaluate, CollectionOperation, Operand};
use super::logic::{operand_from_data, operand_to_data};
use crate::constants::parameter;
use crate::nodes::Node;
use crate::plugin_interface::{NodeData, ParameterChange};

/// Parameter values of a float collection math node
#[derive(Debug, Clone, PartialEq)]
pub struct FloatCollectionMathNode {
    pub operation: CollectionOperation,
    pub a: Operand,
    pub b: Operand,
    pub s: f64,
}

impl Default for FloatCollectionMathNode {
    fn default() -> Self {
        Self {
            operation: CollectionOperation::Add,
            a: Operand::Scalar(parameter::DEFAULT_A),
            b: Operand::Scalar(parameter::DEFAULT_B),
            s: parameter::DEFAULT_S,
        }
    }
}

impl FloatCollectionMathNode {
    /// `(selector, label)` for every operation, in menu order
    pub fn choice_labels() -> Vec<(&'static str, &'static str)> {
        CollectionOperation::ALL
            .iter()
            .map(|op| (op.as_str(), op.label()))
            .collect()
    }

    /// Read parameter values from a host node, defaulting any that are unset
    pub fn from_node(node: &Node) -> Result<Self> {
        let mut params = Self::default();
        for (name, value) in &node.parameters {
            params.set(name, value)?;
        }
        Ok(params)
    }

    /// Apply a single parameter change from the host
    pub fn apply_change(&mut self, change: &ParameterChange) -> Result<()> {
        self.set(&change.parameter, &change.value)
    }

    /// Current values as `(name, value)` pairs for the node's parameter map
    pub fn to_parameters(&self) -> Vec<(String, NodeData)> {
        vec![
            (parameter::OPERATION.to_string(), NodeData::String(self.operation.as_str().to_string())),
            (parameter::A.to_string(), operand_to_data(&self.a)),
            (parameter::B.to_string(), operand_to_data(&self.b)),
            (parameter::S.to_string(), NodeData::Float(self.s)),
        ]
    }

    /// Run the operation on the stored operands
    pub fn evaluate(&self) -> Result<Vec<f64>> {
        evaluate(self.operation, &self.a, &self.b, self.s)
    }

    fn set(&mut self, name: &str, value: &NodeData) -> Result<()> {
        match name {
            parameter::OPERATION => {
                let selector = value
                    .as_str()
                    .ok_or_else(|| CollectionMathError::type_mismatch(name, value.type_name()))?;
                self.operation = selector.parse()?;
            }
            parameter::A => {
                if let Some(operand) = operand_from_data(name, value)? {
                    self.a = operand;
                }
            }
            parameter::B => {
                if let Some(operand) = operand_from_data(name, value)? {
                    self.b = operand;
                }
            }
            parameter::S => {
                self.s = value
                    .as_float()
                    .ok_or_else(|| CollectionMathError::type_mismatch(name, value.type_name()))?;
            }
            other => {
                log::debug!("Ignoring unknown parameter '{}'", other);
            }
        }
        Ok(())
    }
}
