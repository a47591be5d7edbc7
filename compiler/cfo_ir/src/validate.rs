//! Structural validation of constructs.
//!
//! Runs once, before any evaluation. A construct that fails here is a bug in
//! the construct definition, so the evaluator never has to guess what an
//! ill-formed case table or a stray `break` was meant to do.

use std::fmt;

use cfo_stack::ensure_sufficient_stack;
use rustc_hash::FxHashSet;

use crate::ast::{CaseArm, CaseLabel, Construct, ExprKind, StmtKind, StmtRange};
use crate::{ExprArena, ExprId, Name, StmtId, StringInterner};

/// What is wrong with a construct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MalformedKind {
    /// Two `case` labels with the same value in one switch.
    DuplicateCase { value: i32 },
    /// More than one `default` label in one switch.
    MultipleDefaults,
    /// An `if` with no guard arm.
    EmptyGuardChain,
    /// `break` with no enclosing loop or switch.
    BreakOutsideLoop,
    /// `continue` with no enclosing loop.
    ContinueOutsideLoop,
    /// Read or assignment of a name with no visible declaration.
    UndeclaredName { name: String },
    /// Declaration directly inside a case arm; dispatch can jump past it.
    DeclarationInCase { name: String },
    /// A `for` init that is neither a declaration nor an expression.
    InvalidLoopInit,
    /// Compound assignment with a logical or comparison operator.
    InvalidCompoundOperator { op: &'static str },
}

impl fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedKind::DuplicateCase { value } => write!(f, "duplicate case label {value}"),
            MalformedKind::MultipleDefaults => write!(f, "multiple default labels in one switch"),
            MalformedKind::EmptyGuardChain => write!(f, "if statement without a guard"),
            MalformedKind::BreakOutsideLoop => write!(f, "break outside of a loop or switch"),
            MalformedKind::ContinueOutsideLoop => write!(f, "continue outside of a loop"),
            MalformedKind::UndeclaredName { name } => write!(f, "use of undeclared name `{name}`"),
            MalformedKind::DeclarationInCase { name } => {
                write!(f, "declaration of `{name}` directly inside a case arm")
            }
            MalformedKind::InvalidLoopInit => {
                write!(f, "for-loop init must be a declaration or an expression")
            }
            MalformedKind::InvalidCompoundOperator { op } => {
                write!(f, "`{op}` cannot be used as a compound assignment operator")
            }
        }
    }
}

/// A construct definition that violates a structural invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MalformedConstruct {
    /// Name of the offending construct.
    pub construct: String,
    pub kind: MalformedKind,
}

impl fmt::Display for MalformedConstruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed construct `{}`: {}", self.construct, self.kind)
    }
}

impl std::error::Error for MalformedConstruct {}

/// Check every structural invariant of `construct`.
pub fn validate(
    construct: &Construct,
    arena: &ExprArena,
    interner: &StringInterner,
) -> Result<(), MalformedConstruct> {
    let mut validator = Validator {
        arena,
        interner,
        scopes: Vec::new(),
        loop_depth: 0,
        switch_depth: 0,
    };
    validator.push_scope();
    validator.declare(construct.param);
    let result = validator.check_body(construct.body);
    result.map_err(|kind| MalformedConstruct {
        construct: interner.lookup(construct.name).to_string(),
        kind,
    })
}

struct Validator<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    /// Declared names, innermost scope last.
    scopes: Vec<FxHashSet<Name>>,
    loop_depth: u32,
    switch_depth: u32,
}

impl Validator<'_> {
    fn push_scope(&mut self) {
        self.scopes.push(FxHashSet::default());
    }

    fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    fn declare(&mut self, name: Name) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name);
        }
    }

    fn require_declared(&self, name: Name) -> Result<(), MalformedKind> {
        if self.scopes.iter().rev().any(|scope| scope.contains(&name)) {
            Ok(())
        } else {
            Err(MalformedKind::UndeclaredName {
                name: self.interner.lookup(name).to_string(),
            })
        }
    }

    /// Check a body in a fresh scope.
    fn check_body(&mut self, body: StmtRange) -> Result<(), MalformedKind> {
        let arena = self.arena;
        self.push_scope();
        let result = arena
            .stmt_list(body)
            .iter()
            .try_for_each(|&stmt| self.check_stmt(stmt));
        self.pop_scope();
        result
    }

    fn check_loop_body(&mut self, body: StmtRange) -> Result<(), MalformedKind> {
        self.loop_depth += 1;
        let result = self.check_body(body);
        self.loop_depth -= 1;
        result
    }

    fn check_stmt(&mut self, id: StmtId) -> Result<(), MalformedKind> {
        ensure_sufficient_stack(|| self.check_stmt_inner(id))
    }

    fn check_stmt_inner(&mut self, id: StmtId) -> Result<(), MalformedKind> {
        let arena = self.arena;
        match arena.stmt_kind(id) {
            StmtKind::Expr(expr) | StmtKind::Return(expr) => self.check_expr(expr),
            StmtKind::Let { name, init } => {
                self.check_expr(init)?;
                self.declare(name);
                Ok(())
            }
            StmtKind::Block(body) => self.check_body(body),
            StmtKind::If { arms, else_branch } => {
                let arms = arena.guard_arms(arms);
                if arms.is_empty() {
                    return Err(MalformedKind::EmptyGuardChain);
                }
                for arm in arms {
                    self.check_expr(arm.guard)?;
                    self.check_body(arm.body)?;
                }
                match else_branch {
                    Some(body) => self.check_body(body),
                    None => Ok(()),
                }
            }
            StmtKind::Switch { subject, arms } => {
                self.check_expr(subject)?;
                self.switch_depth += 1;
                self.push_scope();
                let result = self.check_case_table(arena.case_arms(arms));
                self.pop_scope();
                self.switch_depth -= 1;
                result
            }
            StmtKind::For {
                init,
                cond,
                step,
                body,
            } => {
                self.push_scope();
                let result = self.check_for(init, cond, step, body);
                self.pop_scope();
                result
            }
            StmtKind::While { cond, body } => {
                self.check_expr(cond)?;
                self.check_loop_body(body)
            }
            StmtKind::DoWhile { body, cond } => {
                self.check_loop_body(body)?;
                self.check_expr(cond)
            }
            StmtKind::Break => {
                if self.loop_depth == 0 && self.switch_depth == 0 {
                    Err(MalformedKind::BreakOutsideLoop)
                } else {
                    Ok(())
                }
            }
            StmtKind::Continue => {
                if self.loop_depth == 0 {
                    Err(MalformedKind::ContinueOutsideLoop)
                } else {
                    Ok(())
                }
            }
        }
    }

    fn check_for(
        &mut self,
        init: Option<StmtId>,
        cond: Option<ExprId>,
        step: Option<ExprId>,
        body: StmtRange,
    ) -> Result<(), MalformedKind> {
        if let Some(init) = init {
            if !matches!(
                self.arena.stmt_kind(init),
                StmtKind::Let { .. } | StmtKind::Expr(_)
            ) {
                return Err(MalformedKind::InvalidLoopInit);
            }
            self.check_stmt(init)?;
        }
        if let Some(cond) = cond {
            self.check_expr(cond)?;
        }
        if let Some(step) = step {
            self.check_expr(step)?;
        }
        self.check_loop_body(body)
    }

    fn check_case_table(&mut self, arms: &[CaseArm]) -> Result<(), MalformedKind> {
        let arena = self.arena;
        let mut seen = FxHashSet::default();
        let mut has_default = false;
        for arm in arms {
            match arm.label {
                CaseLabel::Value(value) => {
                    if !seen.insert(value) {
                        return Err(MalformedKind::DuplicateCase { value });
                    }
                }
                CaseLabel::Default => {
                    if has_default {
                        return Err(MalformedKind::MultipleDefaults);
                    }
                    has_default = true;
                }
            }
            for &stmt in arena.stmt_list(arm.body) {
                if let StmtKind::Let { name, .. } = arena.stmt_kind(stmt) {
                    return Err(MalformedKind::DeclarationInCase {
                        name: self.interner.lookup(name).to_string(),
                    });
                }
                self.check_stmt(stmt)?;
            }
        }
        Ok(())
    }

    fn check_expr(&mut self, id: ExprId) -> Result<(), MalformedKind> {
        ensure_sufficient_stack(|| match self.arena.expr_kind(id) {
            ExprKind::Int(_) => Ok(()),
            ExprKind::Ident(name) => self.require_declared(name),
            ExprKind::Binary { left, right, .. } => {
                self.check_expr(left)?;
                self.check_expr(right)
            }
            ExprKind::Unary { operand, .. } => self.check_expr(operand),
            ExprKind::Assign { target, value } => {
                self.check_expr(value)?;
                self.require_declared(target)
            }
            ExprKind::CompoundAssign { target, op, value } => {
                if op.is_short_circuit() || op.is_comparison() {
                    return Err(MalformedKind::InvalidCompoundOperator {
                        op: op.as_symbol(),
                    });
                }
                self.check_expr(value)?;
                self.require_declared(target)
            }
        })
    }
}
