//! JSON invocation boundary
//!
//! A request carries the operation selector, both operands and the scalar
//! parameter; the response carries a single `collection` field.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::parameter;
use crate::nodes::math::collection_math::{
    evaluate, CollectionMathError, CollectionOperation, Operand, Result,
};

/// One invocation of the float collection math node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvocationRequest {
    /// Operation selector, validated when the request is invoked
    pub operation: String,
    pub a: Operand,
    pub b: Operand,
    pub s: f64,
}

impl Default for InvocationRequest {
    fn default() -> Self {
        Self {
            operation: CollectionOperation::default().as_str().to_string(),
            a: Operand::Scalar(parameter::DEFAULT_A),
            b: Operand::Scalar(parameter::DEFAULT_B),
            s: parameter::DEFAULT_S,
        }
    }
}

impl InvocationRequest {
    pub fn new(operation: CollectionOperation, a: impl Into<Operand>, b: impl Into<Operand>, s: f64) -> Self {
        Self {
            operation: operation.as_str().to_string(),
            a: a.into(),
            b: b.into(),
            s,
        }
    }
}

/// Output of one invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationOutput {
    pub collection: Vec<f64>,
}

/// Evaluate a parsed request
pub fn invoke(request: &InvocationRequest) -> Result<InvocationOutput> {
    let operation: CollectionOperation = request.operation.parse()?;
    let collection = evaluate(operation, &request.a, &request.b, request.s)?;
    Ok(InvocationOutput { collection })
}

/// Parse a JSON request, evaluate it and serialize the output
pub fn invoke_json(input: &str) -> Result<String> {
    let value: Value = serde_json::from_str(input)?;
    check_operation(&value)?;
    check_operand(&value, parameter::A)?;
    check_operand(&value, parameter::B)?;
    if let Some(s) = value.get(parameter::S) {
        if !s.is_number() {
            return Err(CollectionMathError::type_mismatch(parameter::S, json_type_name(s)));
        }
    }

    let request: InvocationRequest = serde_json::from_value(value)?;
    log::debug!("Invoking {} on a={:?} b={:?} s={}", request.operation, request.a, request.b, request.s);

    let output = invoke(&request)?;
    Ok(serde_json::to_string(&output)?)
}

/// Reject a selector that is not a JSON string
fn check_operation(request: &Value) -> Result<()> {
    match request.get(parameter::OPERATION) {
        None | Some(Value::String(_)) => Ok(()),
        Some(other) => Err(CollectionMathError::type_mismatch(parameter::OPERATION, json_type_name(other))),
    }
}

/// Reject operands that are neither a number nor an array of numbers
fn check_operand(request: &Value, name: &str) -> Result<()> {
    match request.get(name) {
        None | Some(Value::Number(_)) => Ok(()),
        Some(Value::Array(items)) => match items.iter().find(|item| !item.is_number()) {
            Some(item) => Err(CollectionMathError::type_mismatch(
                name,
                format!("array containing {}", json_type_name(item)),
            )),
            None => Ok(()),
        },
        Some(other) => Err(CollectionMathError::type_mismatch(name, json_type_name(other))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
