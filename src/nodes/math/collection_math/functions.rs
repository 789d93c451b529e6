//! Core computation logic for the float collection math node
//!
//! Operands are resolved once by [`broadcast`] into plain float lists, then a
//! single exhaustive match dispatches on [`CollectionOperation`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{CollectionMathError, Result};

/// A node input that is either a single float or a list of floats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    Scalar(f64),
    Sequence(Vec<f64>),
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<Vec<f64>> for Operand {
    fn from(values: Vec<f64>) -> Self {
        Operand::Sequence(values)
    }
}

impl From<&[f64]> for Operand {
    fn from(values: &[f64]) -> Self {
        Operand::Sequence(values.to_vec())
    }
}

/// Operations supported by the float collection math node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollectionOperation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Abs,
    Mag,
    Pad,
    Append,
    ClampMin,
    ClampMax,
}

impl CollectionOperation {
    /// Every operation, in menu order
    pub const ALL: [CollectionOperation; 10] = [
        CollectionOperation::Add,
        CollectionOperation::Subtract,
        CollectionOperation::Multiply,
        CollectionOperation::Divide,
        CollectionOperation::Abs,
        CollectionOperation::Mag,
        CollectionOperation::Pad,
        CollectionOperation::Append,
        CollectionOperation::ClampMin,
        CollectionOperation::ClampMax,
    ];

    /// Selector string as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionOperation::Add => "ADD",
            CollectionOperation::Subtract => "SUBTRACT",
            CollectionOperation::Multiply => "MULTIPLY",
            CollectionOperation::Divide => "DIVIDE",
            CollectionOperation::Abs => "ABS",
            CollectionOperation::Mag => "MAG",
            CollectionOperation::Pad => "PAD",
            CollectionOperation::Append => "APPEND",
            CollectionOperation::ClampMin => "CLAMP_MIN",
            CollectionOperation::ClampMax => "CLAMP_MAX",
        }
    }

    /// Human-readable label shown in operation pickers
    pub fn label(&self) -> &'static str {
        match self {
            CollectionOperation::Add => "Add C=A+B",
            CollectionOperation::Subtract => "Subtract C=A-B",
            CollectionOperation::Multiply => "Multiply C=A*B",
            CollectionOperation::Divide => "Divide C=A/B",
            CollectionOperation::Abs => "Absolute Value C=|A|",
            CollectionOperation::Mag => "Magnitude C=||A||",
            CollectionOperation::Pad => "Pad C=AU{s,...}|l(C)=l(B)",
            CollectionOperation::Append => "Append C={A,B}",
            CollectionOperation::ClampMin => "Clamp Min C={max(s,x)∀x∈A}",
            CollectionOperation::ClampMax => "Clamp Max C={min(s,x)∀x∈A}",
        }
    }
}

impl Default for CollectionOperation {
    fn default() -> Self {
        CollectionOperation::Add
    }
}

impl fmt::Display for CollectionOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionOperation {
    type Err = CollectionMathError;

    fn from_str(s: &str) -> Result<Self> {
        CollectionOperation::ALL
            .iter()
            .copied()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| CollectionMathError::InvalidOperation(s.to_string()))
    }
}

/// Widen both operands into lists.
///
/// Checked in order: both scalars, then A scalar, then B scalar. A scalar
/// facing a list is repeated to that list's length; two lists pass through
/// untouched even when their lengths differ.
pub fn broadcast(a: &Operand, b: &Operand) -> (Vec<f64>, Vec<f64>) {
    match (a, b) {
        (Operand::Scalar(x), Operand::Scalar(y)) => (vec![*x], vec![*y]),
        (Operand::Scalar(x), Operand::Sequence(ys)) => (vec![*x; ys.len()], ys.clone()),
        (Operand::Sequence(xs), Operand::Scalar(y)) => (xs.clone(), vec![*y; xs.len()]),
        (Operand::Sequence(xs), Operand::Sequence(ys)) => (xs.clone(), ys.clone()),
    }
}

/// Apply `operation` to the operands and return a new list.
///
/// Elementwise operations zip A and B, so the result is as long as the
/// shorter list. DIVIDE fails on the first zero divisor it would use.
pub fn evaluate(operation: CollectionOperation, a: &Operand, b: &Operand, s: f64) -> Result<Vec<f64>> {
    let (a, b) = broadcast(a, b);

    let result = match operation {
        CollectionOperation::Add => zip_with(&a, &b, |x, y| x + y),
        CollectionOperation::Subtract => zip_with(&a, &b, |x, y| x - y),
        CollectionOperation::Multiply => zip_with(&a, &b, |x, y| x * y),
        CollectionOperation::Divide => {
            if let Some(index) = b.iter().take(a.len()).position(|y| *y == 0.0) {
                return Err(CollectionMathError::DivisionByZero { index });
            }
            zip_with(&a, &b, |x, y| x / y)
        }
        CollectionOperation::Abs => a.iter().map(|x| x.abs()).collect(),
        CollectionOperation::Mag => vec![a.iter().map(|x| x * x).sum::<f64>().sqrt()],
        CollectionOperation::Pad => {
            let fill = b.len().saturating_sub(a.len());
            let mut padded = a;
            padded.extend(std::iter::repeat(s).take(fill));
            padded
        }
        CollectionOperation::Append => {
            let mut appended = a;
            appended.extend_from_slice(&b);
            appended
        }
        // Keep s unless x is strictly greater/smaller, so a NaN element yields s
        CollectionOperation::ClampMin => a.iter().map(|&x| if x > s { x } else { s }).collect(),
        CollectionOperation::ClampMax => a.iter().map(|&x| if x < s { x } else { s }).collect(),
    };

    Ok(result)
}

fn zip_with(a: &[f64], b: &[f64], op: impl Fn(f64, f64) -> f64) -> Vec<f64> {
    a.iter().zip(b.iter()).map(|(&x, &y)| op(x, y)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(values: &[f64]) -> Operand {
        Operand::from(values)
    }

    fn eval(op: CollectionOperation, a: Operand, b: Operand, s: f64) -> Vec<f64> {
        evaluate(op, &a, &b, s).unwrap()
    }

    #[test]
    fn test_scalar_arithmetic() {
        let a = Operand::Scalar(2.0);
        let b = Operand::Scalar(3.0);
        assert_eq!(eval(CollectionOperation::Add, a.clone(), b.clone(), 0.0), vec![5.0]);
        assert_eq!(eval(CollectionOperation::Subtract, a.clone(), b.clone(), 0.0), vec![-1.0]);
        assert_eq!(eval(CollectionOperation::Multiply, a.clone(), b.clone(), 0.0), vec![6.0]);

        let quotient = eval(CollectionOperation::Divide, a, b, 0.0);
        assert_eq!(quotient.len(), 1);
        assert!((quotient[0] - 2.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_broadcast_scalar_b() {
        let result = eval(CollectionOperation::Multiply, seq(&[1.0, 2.0, 3.0]), Operand::Scalar(2.0), 0.0);
        assert_eq!(result, vec![2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_broadcast_scalar_a() {
        let result = eval(CollectionOperation::Subtract, Operand::Scalar(10.0), seq(&[1.0, 2.0]), 0.0);
        assert_eq!(result, vec![9.0, 8.0]);
    }

    #[test]
    fn test_broadcast_shapes() {
        assert_eq!(broadcast(&Operand::Scalar(1.0), &Operand::Scalar(2.0)), (vec![1.0], vec![2.0]));
        assert_eq!(
            broadcast(&Operand::Scalar(4.0), &seq(&[0.0, 0.0, 0.0])),
            (vec![4.0, 4.0, 4.0], vec![0.0, 0.0, 0.0])
        );
        assert_eq!(broadcast(&seq(&[]), &Operand::Scalar(7.0)), (vec![], vec![]));
        assert_eq!(
            broadcast(&seq(&[1.0]), &seq(&[2.0, 3.0])),
            (vec![1.0], vec![2.0, 3.0])
        );
    }

    #[test]
    fn test_truncates_to_shorter() {
        let result = eval(CollectionOperation::Add, seq(&[1.0, 2.0, 3.0]), seq(&[10.0, 20.0]), 0.0);
        assert_eq!(result, vec![11.0, 22.0]);

        let result = eval(CollectionOperation::Multiply, seq(&[2.0]), seq(&[3.0, 4.0, 5.0]), 0.0);
        assert_eq!(result, vec![6.0]);
    }

    #[test]
    fn test_abs() {
        let result = eval(CollectionOperation::Abs, seq(&[-1.0, 2.0, -3.0]), Operand::Scalar(99.0), 5.0);
        assert_eq!(result, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_mag() {
        let result = eval(CollectionOperation::Mag, seq(&[3.0, 4.0]), seq(&[]), 0.0);
        assert_eq!(result, vec![5.0]);
    }

    #[test]
    fn test_mag_of_large_values() {
        // 1e40 has to survive as an intermediate
        let result = eval(CollectionOperation::Mag, seq(&[1e20, 0.0]), seq(&[]), 0.0);
        assert_eq!(result.len(), 1);
        assert!(result[0].is_finite());
        assert!((result[0] - 1e20).abs() / 1e20 < 1e-12);

        let result = eval(CollectionOperation::Mag, seq(&[3e200, 4e200]), seq(&[]), 0.0);
        assert!((result[0] - 5e200).abs() / 5e200 < 1e-12);
    }

    #[test]
    fn test_double_precision_sum() {
        let result = eval(CollectionOperation::Add, Operand::Scalar(0.1), Operand::Scalar(0.2), 0.0);
        assert_eq!(result, vec![0.30000000000000004]);
    }

    #[test]
    fn test_mag_of_empty_list() {
        let result = eval(CollectionOperation::Mag, seq(&[]), seq(&[]), 0.0);
        assert_eq!(result, vec![0.0]);
    }

    #[test]
    fn test_pad() {
        let result = eval(CollectionOperation::Pad, seq(&[1.0, 2.0]), seq(&[0.0, 0.0, 0.0, 0.0]), 9.0);
        assert_eq!(result, vec![1.0, 2.0, 9.0, 9.0]);
    }

    #[test]
    fn test_pad_never_truncates() {
        let result = eval(CollectionOperation::Pad, seq(&[1.0, 2.0, 3.0]), seq(&[0.0]), 9.0);
        assert_eq!(result, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_append() {
        let result = eval(CollectionOperation::Append, seq(&[1.0, 2.0]), seq(&[3.0, 4.0]), 0.0);
        assert_eq!(result, vec![1.0, 2.0, 3.0, 4.0]);

        // Scalar B is broadcast to A's length before appending
        let result = eval(CollectionOperation::Append, seq(&[1.0, 2.0]), Operand::Scalar(5.0), 0.0);
        assert_eq!(result, vec![1.0, 2.0, 5.0, 5.0]);
    }

    #[test]
    fn test_clamp_min() {
        let result = eval(CollectionOperation::ClampMin, seq(&[-5.0, 0.0, 5.0]), Operand::Scalar(0.0), 1.0);
        assert_eq!(result, vec![1.0, 1.0, 5.0]);
    }

    #[test]
    fn test_clamp_max() {
        let result = eval(CollectionOperation::ClampMax, seq(&[-5.0, 0.0, 5.0]), Operand::Scalar(0.0), 1.0);
        assert_eq!(result, vec![-5.0, 0.0, 1.0]);
    }

    #[test]
    fn test_clamp_nan_element_yields_bound() {
        let result = eval(CollectionOperation::ClampMin, seq(&[f64::NAN]), seq(&[]), 2.0);
        assert_eq!(result, vec![2.0]);
    }

    #[test]
    fn test_divide_by_zero() {
        let err = evaluate(CollectionOperation::Divide, &seq(&[1.0, 2.0]), &seq(&[0.0, 2.0]), 0.0).unwrap_err();
        assert!(matches!(err, CollectionMathError::DivisionByZero { index: 0 }));

        let err = evaluate(CollectionOperation::Divide, &seq(&[1.0, 2.0]), &seq(&[1.0, -0.0]), 0.0).unwrap_err();
        assert!(matches!(err, CollectionMathError::DivisionByZero { index: 1 }));
    }

    #[test]
    fn test_divide_ignores_zero_past_truncation() {
        let result = eval(CollectionOperation::Divide, seq(&[8.0]), seq(&[2.0, 0.0]), 0.0);
        assert_eq!(result, vec![4.0]);
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let a = seq(&[1.0, 2.0]);
        let b = Operand::Scalar(3.0);
        let _ = evaluate(CollectionOperation::Append, &a, &b, 0.0).unwrap();
        assert_eq!(a, seq(&[1.0, 2.0]));
        assert_eq!(b, Operand::Scalar(3.0));
    }

    #[test]
    fn test_idempotent() {
        let a = seq(&[0.1, 0.2, 0.3]);
        let b = seq(&[0.7, 0.11, 0.13]);
        for op in CollectionOperation::ALL {
            let first = evaluate(op, &a, &b, 0.25).unwrap();
            let second = evaluate(op, &a, &b, 0.25).unwrap();
            let first_bits: Vec<u64> = first.iter().map(|x| x.to_bits()).collect();
            let second_bits: Vec<u64> = second.iter().map(|x| x.to_bits()).collect();
            assert_eq!(first_bits, second_bits, "{} is not deterministic", op);
        }
    }

    #[test]
    fn test_operation_parsing() {
        for op in CollectionOperation::ALL {
            assert_eq!(op.as_str().parse::<CollectionOperation>().unwrap(), op);
        }
        assert_eq!("CLAMP_MIN".parse::<CollectionOperation>().unwrap(), CollectionOperation::ClampMin);

        let err = "POWER".parse::<CollectionOperation>().unwrap_err();
        assert!(matches!(err, CollectionMathError::InvalidOperation(ref name) if name == "POWER"));

        // Selectors are case sensitive
        assert!("add".parse::<CollectionOperation>().is_err());
    }

    #[test]
    fn test_operation_serde_names() {
        let json = serde_json::to_string(&CollectionOperation::ClampMax).unwrap();
        assert_eq!(json, "\"CLAMP_MAX\"");
        let op: CollectionOperation = serde_json::from_str("\"APPEND\"").unwrap();
        assert_eq!(op, CollectionOperation::Append);
    }

    #[test]
    fn test_operand_deserializes_untagged() {
        let scalar: Operand = serde_json::from_str("2.5").unwrap();
        assert_eq!(scalar, Operand::Scalar(2.5));
        let integer: Operand = serde_json::from_str("3").unwrap();
        assert_eq!(integer, Operand::Scalar(3.0));
        let list: Operand = serde_json::from_str("[1, 2.5]").unwrap();
        assert_eq!(list, Operand::Sequence(vec![1.0, 2.5]));
        assert!(serde_json::from_str::<Operand>("\"text\"").is_err());
    }
}
