use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;

pub const OPERAND_SEPARATOR: char = '&';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Path template advertised by the index, e.g. `/add/<a>&<b>`.
    pub fn path_template(self) -> String {
        format!("/{}/<a>{OPERAND_SEPARATOR}<b>", self.name())
    }

    /// IEEE-754 arithmetic; only an exact zero divisor is rejected.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, AppError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => {
                if b == 0.0 {
                    return Err(AppError::DivisionByZero);
                }
                Ok(a / b)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRequest {
    pub operation: Operation,
    pub operand_a: String,
    pub operand_b: String,
}

impl OperationRequest {
    /// Splits an `<a>&<b>` path segment at its last separator.
    ///
    /// Returns `None` when the segment has no separator or either side is empty,
    /// which the router reports as an unmatched path.
    pub fn from_segment(operation: Operation, segment: &str) -> Option<Self> {
        let (operand_a, operand_b) = segment.rsplit_once(OPERAND_SEPARATOR)?;
        if operand_a.is_empty() || operand_b.is_empty() {
            return None;
        }

        Some(Self {
            operation,
            operand_a: operand_a.to_string(),
            operand_b: operand_b.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Operands {
    pub a: f64,
    pub b: f64,
}

/// Success body of an arithmetic endpoint.
///
/// serde_json has no literal for NaN or ±Infinity, so such values (in `input` as
/// well as `result`) serialize as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OperationResult {
    pub operation: Operation,
    pub input: Operands,
    pub result: f64,
}

pub fn parse_operand(raw: &str) -> Result<f64, AppError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| AppError::InvalidInput)
}

pub fn evaluate(request: &OperationRequest) -> Result<OperationResult, AppError> {
    let a = parse_operand(&request.operand_a)?;
    let b = parse_operand(&request.operand_b)?;

    debug!(
        operation = request.operation.name(),
        a, b, "evaluating operation"
    );
    let result = request.operation.apply(a, b)?;

    Ok(OperationResult {
        operation: request.operation,
        input: Operands { a, b },
        result,
    })
}
