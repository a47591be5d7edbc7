//! Tests for binary and unary operator implementations.

use crate::operators::{evaluate_binary, evaluate_unary};
use crate::{EvalErrorKind, ScalarInt};
use cfo_ir::{BinaryOp, UnaryOp};

fn int(v: i32) -> ScalarInt {
    ScalarInt::new(v)
}

fn bin(a: i32, op: BinaryOp, b: i32) -> i32 {
    evaluate_binary(int(a), int(b), op).unwrap().raw()
}

#[test]
fn test_int_operations() {
    assert_eq!(bin(2, BinaryOp::Add, 3), 5);
    assert_eq!(bin(5, BinaryOp::Sub, 3), 2);
    assert_eq!(bin(2, BinaryOp::Mul, 3), 6);
    assert_eq!(bin(7, BinaryOp::Div, 2), 3);
    assert_eq!(bin(7, BinaryOp::Mod, 2), 1);
}

#[test]
fn test_overflow_wraps() {
    assert_eq!(bin(i32::MAX, BinaryOp::Add, 1), i32::MIN);
    assert_eq!(bin(i32::MIN, BinaryOp::Sub, 1), i32::MAX);
    assert_eq!(bin(i32::MIN, BinaryOp::Div, -1), i32::MIN);
    assert_eq!(bin(i32::MIN, BinaryOp::Mod, -1), 0);
}

#[test]
fn test_truncating_division_and_remainder() {
    assert_eq!(bin(-7, BinaryOp::Div, 2), -3);
    assert_eq!(bin(-7, BinaryOp::Mod, 2), -1);
    assert_eq!(bin(7, BinaryOp::Mod, -2), 1);
    assert_eq!(bin(-458, BinaryOp::Mod, 10), -8);
}

#[test]
fn test_division_by_zero() {
    let div = evaluate_binary(int(1), int(0), BinaryOp::Div).unwrap_err();
    assert_eq!(div.kind, EvalErrorKind::DivisionByZero);
    let rem = evaluate_binary(int(1), int(0), BinaryOp::Mod).unwrap_err();
    assert_eq!(rem.kind, EvalErrorKind::ModuloByZero);
}

#[test]
fn test_comparisons() {
    assert_eq!(bin(2, BinaryOp::Lt, 3), 1);
    assert_eq!(bin(3, BinaryOp::Lt, 3), 0);
    assert_eq!(bin(3, BinaryOp::LtEq, 3), 1);
    assert_eq!(bin(3, BinaryOp::Gt, 2), 1);
    assert_eq!(bin(2, BinaryOp::GtEq, 3), 0);
    assert_eq!(bin(2, BinaryOp::Eq, 2), 1);
    assert_eq!(bin(2, BinaryOp::NotEq, 2), 0);
}

#[test]
fn test_logical_truth_table_on_evaluated_operands() {
    assert_eq!(bin(5, BinaryOp::And, -1), 1);
    assert_eq!(bin(5, BinaryOp::And, 0), 0);
    assert_eq!(bin(0, BinaryOp::Or, 0), 0);
    assert_eq!(bin(0, BinaryOp::Or, 9), 1);
}

#[test]
fn test_unary() {
    assert_eq!(evaluate_unary(int(5), UnaryOp::Neg), int(-5));
    assert_eq!(evaluate_unary(ScalarInt::MIN, UnaryOp::Neg), ScalarInt::MIN);
    assert_eq!(evaluate_unary(int(0), UnaryOp::Not), ScalarInt::ONE);
    assert_eq!(evaluate_unary(int(-3), UnaryOp::Not), ScalarInt::ZERO);
}
