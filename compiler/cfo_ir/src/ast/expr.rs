//! Expression Types

use super::operators::{BinaryOp, UnaryOp};
use crate::{ExprId, Name};

/// Expression kinds.
///
/// Assignments are expressions, as in C, so an assignment can sit in the
/// right operand of `&&` / `||` and its execution is observable.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Integer literal.
    Int(i32),
    /// Variable read.
    Ident(Name),
    /// `left op right`
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    /// `op operand`
    Unary { op: UnaryOp, operand: ExprId },
    /// `target = value`, yields the stored value.
    Assign { target: Name, value: ExprId },
    /// `target op= value`, yields the stored value.
    CompoundAssign {
        target: Name,
        op: BinaryOp,
        value: ExprId,
    },
}
