//! Statement Types
//!
//! Statements, the ordered case table of a switch, and the guard chain of an
//! if/else-if/else.

use super::ranges::{CaseRange, GuardRange, StmtRange};
use crate::{ExprId, Name, StmtId};

/// Statement kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// Expression statement.
    Expr(ExprId),

    /// Declaration in the current scope.
    Let { name: Name, init: ExprId },

    /// Nested block with its own scope.
    Block(StmtRange),

    /// `if (g0) {..} else if (g1) {..} else {..}`
    ///
    /// Guards are tried in source order; `else_branch` runs when none holds.
    If {
        arms: GuardRange,
        else_branch: Option<StmtRange>,
    },

    /// `switch (subject) { case ..: ... }`
    ///
    /// Arms are kept in source order. Execution starts at the first matching
    /// arm and falls through every later arm until a `break`.
    Switch { subject: ExprId, arms: CaseRange },

    /// `for (init; cond; step) body`. An absent condition is always true.
    For {
        init: Option<StmtId>,
        cond: Option<ExprId>,
        step: Option<ExprId>,
        body: StmtRange,
    },

    /// `while (cond) body`
    While { cond: ExprId, body: StmtRange },

    /// `do body while (cond);`
    DoWhile { body: StmtRange, cond: ExprId },

    Break,
    Continue,
    Return(ExprId),
}

/// Label of one switch arm.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CaseLabel {
    Value(i32),
    Default,
}

/// One arm of a switch: a label and the statements up to the next label.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CaseArm {
    pub label: CaseLabel,
    pub body: StmtRange,
}

/// One `if`/`else if` link of a guard chain.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct GuardArm {
    pub guard: ExprId,
    pub body: StmtRange,
}

/// A top-level invocation unit: `int name(int param) { body }`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Construct {
    pub name: Name,
    pub param: Name,
    pub body: StmtRange,
}
