//! Calculator domain
//!
//! Operand parsing and arithmetic evaluation, independent of the HTTP layer.

pub mod operation;

pub use operation::{
    evaluate, parse_operand, Operands, Operation, OperationRequest, OperationResult,
};
