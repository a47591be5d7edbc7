//! Programmatic construction of constructs.
//!
//! There is no surface syntax: constructs are assembled bottom-up through
//! [`ConstructBuilder`]. Every method takes `&self`, so calls nest the way the
//! modeled source reads:
//!
//! ```text
//! let b = ConstructBuilder::new(&interner);
//! let ret = b.ret(b.ident("in"));
//! let (construct, arena) = b.finish("identity", "in", b.body([ret]))?;
//! ```
//!
//! [`finish`](ConstructBuilder::finish) runs the structural validator, so a
//! construct that comes out of the builder is well formed.

use std::cell::RefCell;

use crate::ast::{
    BinaryOp, CaseArm, CaseLabel, Construct, ExprKind, GuardArm, StmtKind, StmtRange, UnaryOp,
};
use crate::validate::{validate, MalformedConstruct};
use crate::{ExprArena, ExprId, Name, StmtId, StringInterner};

/// Builder for one construct and its arena.
pub struct ConstructBuilder<'a> {
    interner: &'a StringInterner,
    arena: RefCell<ExprArena>,
}

impl<'a> ConstructBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        ConstructBuilder {
            interner,
            arena: RefCell::new(ExprArena::new()),
        }
    }

    /// Intern an identifier.
    #[inline]
    pub fn name(&self, text: &str) -> Name {
        self.interner.intern(text)
    }

    fn expr(&self, kind: ExprKind) -> ExprId {
        self.arena.borrow_mut().alloc_expr(kind)
    }

    fn stmt(&self, kind: StmtKind) -> StmtId {
        self.arena.borrow_mut().alloc_stmt(kind)
    }

    // Expressions

    pub fn int(&self, value: i32) -> ExprId {
        self.expr(ExprKind::Int(value))
    }

    pub fn ident(&self, name: &str) -> ExprId {
        self.expr(ExprKind::Ident(self.name(name)))
    }

    pub fn binary(&self, left: ExprId, op: BinaryOp, right: ExprId) -> ExprId {
        self.expr(ExprKind::Binary { op, left, right })
    }

    pub fn unary(&self, op: UnaryOp, operand: ExprId) -> ExprId {
        self.expr(ExprKind::Unary { op, operand })
    }

    pub fn assign(&self, target: &str, value: ExprId) -> ExprId {
        self.expr(ExprKind::Assign {
            target: self.name(target),
            value,
        })
    }

    pub fn compound_assign(&self, target: &str, op: BinaryOp, value: ExprId) -> ExprId {
        self.expr(ExprKind::CompoundAssign {
            target: self.name(target),
            op,
            value,
        })
    }

    // Statements

    pub fn expr_stmt(&self, expr: ExprId) -> StmtId {
        self.stmt(StmtKind::Expr(expr))
    }

    pub fn let_(&self, name: &str, init: ExprId) -> StmtId {
        self.stmt(StmtKind::Let {
            name: self.name(name),
            init,
        })
    }

    /// Store a statement sequence as one body.
    pub fn body(&self, stmts: impl IntoIterator<Item = StmtId>) -> StmtRange {
        // Collect first: the iterator may itself call back into the builder.
        let stmts: Vec<StmtId> = stmts.into_iter().collect();
        self.arena.borrow_mut().alloc_stmt_list(stmts)
    }

    pub fn block(&self, stmts: impl IntoIterator<Item = StmtId>) -> StmtId {
        let body = self.body(stmts);
        self.stmt(StmtKind::Block(body))
    }

    /// `if (g0) b0 else if (g1) b1 ... else else_branch`
    pub fn if_chain(
        &self,
        arms: impl IntoIterator<Item = (ExprId, StmtRange)>,
        else_branch: Option<StmtRange>,
    ) -> StmtId {
        let arms: Vec<GuardArm> = arms
            .into_iter()
            .map(|(guard, body)| GuardArm { guard, body })
            .collect();
        let arms = self.arena.borrow_mut().alloc_guard_arms(arms);
        self.stmt(StmtKind::If { arms, else_branch })
    }

    /// `switch (subject) { arms }`, arms in source order.
    pub fn switch(
        &self,
        subject: ExprId,
        arms: impl IntoIterator<Item = (CaseLabel, StmtRange)>,
    ) -> StmtId {
        let arms: Vec<CaseArm> = arms
            .into_iter()
            .map(|(label, body)| CaseArm { label, body })
            .collect();
        let arms = self.arena.borrow_mut().alloc_case_arms(arms);
        self.stmt(StmtKind::Switch { subject, arms })
    }

    pub fn for_loop(
        &self,
        init: Option<StmtId>,
        cond: Option<ExprId>,
        step: Option<ExprId>,
        body: StmtRange,
    ) -> StmtId {
        self.stmt(StmtKind::For {
            init,
            cond,
            step,
            body,
        })
    }

    pub fn while_loop(&self, cond: ExprId, body: StmtRange) -> StmtId {
        self.stmt(StmtKind::While { cond, body })
    }

    pub fn do_while(&self, body: StmtRange, cond: ExprId) -> StmtId {
        self.stmt(StmtKind::DoWhile { body, cond })
    }

    pub fn brk(&self) -> StmtId {
        self.stmt(StmtKind::Break)
    }

    pub fn cont(&self) -> StmtId {
        self.stmt(StmtKind::Continue)
    }

    pub fn ret(&self, value: ExprId) -> StmtId {
        self.stmt(StmtKind::Return(value))
    }

    /// Close the construct `int name(int param) { body }` and validate it.
    pub fn finish(
        self,
        name: &str,
        param: &str,
        body: StmtRange,
    ) -> Result<(Construct, ExprArena), MalformedConstruct> {
        let construct = Construct {
            name: self.name(name),
            param: self.name(param),
            body,
        };
        let arena = self.arena.into_inner();
        validate(&construct, &arena, self.interner)?;
        Ok((construct, arena))
    }
}
