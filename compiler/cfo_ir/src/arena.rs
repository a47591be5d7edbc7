//! Arena holding every node of a construct.
//!
//! Nodes are appended bottom-up (children before parents) and never removed.
//! Bodies, case tables and guard chains are contiguous runs in flat lists,
//! addressed by `StmtRange` / `CaseRange` / `GuardRange`.

use crate::ast::{CaseArm, CaseRange, ExprKind, GuardArm, GuardRange, StmtKind, StmtRange};
use crate::{ExprId, StmtId};

/// Convert a list length to a `u32` index.
///
/// A construct with four billion nodes is a builder bug, not an input.
#[inline]
fn to_index(len: usize, list: &'static str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("construct arena {list} list exceeded u32::MAX"))
}

/// Flat storage for expressions, statements and their lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExprArena {
    exprs: Vec<ExprKind>,
    stmts: Vec<StmtKind>,
    stmt_lists: Vec<StmtId>,
    case_arms: Vec<CaseArm>,
    guard_arms: Vec<GuardArm>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expression.
    pub fn alloc_expr(&mut self, kind: ExprKind) -> ExprId {
        let id = ExprId::new(to_index(self.exprs.len(), "expression"));
        self.exprs.push(kind);
        id
    }

    /// Append a statement.
    pub fn alloc_stmt(&mut self, kind: StmtKind) -> StmtId {
        let id = StmtId::new(to_index(self.stmts.len(), "statement"));
        self.stmts.push(kind);
        id
    }

    /// Append a body as one contiguous run.
    pub fn alloc_stmt_list(&mut self, stmts: impl IntoIterator<Item = StmtId>) -> StmtRange {
        let start = to_index(self.stmt_lists.len(), "statement-list");
        self.stmt_lists.extend(stmts);
        let end = to_index(self.stmt_lists.len(), "statement-list");
        StmtRange::new(start, end - start)
    }

    /// Append a case table, preserving the given order.
    pub fn alloc_case_arms(&mut self, arms: impl IntoIterator<Item = CaseArm>) -> CaseRange {
        let start = to_index(self.case_arms.len(), "case-arm");
        self.case_arms.extend(arms);
        let end = to_index(self.case_arms.len(), "case-arm");
        CaseRange::new(start, end - start)
    }

    /// Append a guard chain, preserving the given order.
    pub fn alloc_guard_arms(&mut self, arms: impl IntoIterator<Item = GuardArm>) -> GuardRange {
        let start = to_index(self.guard_arms.len(), "guard-arm");
        self.guard_arms.extend(arms);
        let end = to_index(self.guard_arms.len(), "guard-arm");
        GuardRange::new(start, end - start)
    }

    #[inline]
    pub fn expr_kind(&self, id: ExprId) -> ExprKind {
        self.exprs[id.index()]
    }

    #[inline]
    pub fn stmt_kind(&self, id: StmtId) -> StmtKind {
        self.stmts[id.index()]
    }

    #[inline]
    pub fn stmt_list(&self, range: StmtRange) -> &[StmtId] {
        &self.stmt_lists[range.indices()]
    }

    #[inline]
    pub fn case_arms(&self, range: CaseRange) -> &[CaseArm] {
        &self.case_arms[range.indices()]
    }

    #[inline]
    pub fn guard_arms(&self, range: GuardRange) -> &[GuardArm] {
        &self.guard_arms[range.indices()]
    }

    /// Number of expressions.
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    /// Number of statements.
    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }
}
