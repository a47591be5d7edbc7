//! Binary and unary operator implementations for the evaluator.
//!
//! Direct enum dispatch over `BinaryOp`. Every operand is a `ScalarInt`, so
//! there is no type dispatch, only the operator match.
//!
//! `&&` and `||` never reach this module from the interpreter: it
//! short-circuits them itself, and the validator rejects them as compound
//! assignment operators. Their arms below keep the match exhaustive and give
//! the eager truth table to callers that already hold both values.

use cfo_ir::{BinaryOp, UnaryOp};

use crate::{division_by_zero, modulo_by_zero, EvalResult, ScalarInt};

/// Evaluate a binary operation on two already evaluated operands.
pub fn evaluate_binary(left: ScalarInt, right: ScalarInt, op: BinaryOp) -> EvalResult {
    let result = match op {
        BinaryOp::Add => left.wrapping_add(right),
        BinaryOp::Sub => left.wrapping_sub(right),
        BinaryOp::Mul => left.wrapping_mul(right),
        BinaryOp::Div => left.wrapping_div(right).ok_or_else(division_by_zero)?,
        BinaryOp::Mod => left.wrapping_rem(right).ok_or_else(modulo_by_zero)?,
        BinaryOp::Eq => ScalarInt::from_bool(left == right),
        BinaryOp::NotEq => ScalarInt::from_bool(left != right),
        BinaryOp::Lt => ScalarInt::from_bool(left < right),
        BinaryOp::LtEq => ScalarInt::from_bool(left <= right),
        BinaryOp::Gt => ScalarInt::from_bool(left > right),
        BinaryOp::GtEq => ScalarInt::from_bool(left >= right),
        BinaryOp::And => ScalarInt::from_bool(left.is_truthy() && right.is_truthy()),
        BinaryOp::Or => ScalarInt::from_bool(left.is_truthy() || right.is_truthy()),
    };
    Ok(result)
}

/// Evaluate a unary operation.
#[inline]
pub fn evaluate_unary(operand: ScalarInt, op: UnaryOp) -> ScalarInt {
    match op {
        UnaryOp::Neg => operand.wrapping_neg(),
        UnaryOp::Not => ScalarInt::from_bool(!operand.is_truthy()),
    }
}
