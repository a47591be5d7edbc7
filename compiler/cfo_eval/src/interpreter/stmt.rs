//! Statement execution: blocks, the conditional evaluator and the branch
//! dispatcher.

use cfo_ir::{CaseArm, CaseRange, ExprId, GuardRange, StmtId, StmtKind, StmtRange};
use cfo_stack::ensure_sufficient_stack;

use super::loops::LoopParts;
use super::{ExecResult, Interpreter};
use crate::exec::control::{absorb_switch_signal, ControlSignal, LoopForm};
use crate::exec::dispatch::entry_arm;

impl Interpreter<'_> {
    pub(crate) fn exec_stmt(&mut self, id: StmtId) -> ExecResult<ControlSignal> {
        ensure_sufficient_stack(|| self.exec_stmt_inner(id))
    }

    fn exec_stmt_inner(&mut self, id: StmtId) -> ExecResult<ControlSignal> {
        match self.arena.stmt_kind(id) {
            StmtKind::Expr(expr) => {
                self.eval_expr(expr)?;
                Ok(ControlSignal::Normal)
            }
            StmtKind::Let { name, init } => {
                let value = self.eval_expr(init)?;
                self.env.define(name, value);
                Ok(ControlSignal::Normal)
            }
            StmtKind::Block(body) => self.exec_block(body),
            StmtKind::If { arms, else_branch } => self.exec_if(arms, else_branch),
            StmtKind::Switch { subject, arms } => self.exec_switch(subject, arms),
            StmtKind::For {
                init,
                cond,
                step,
                body,
            } => self.exec_loop(
                LoopForm::Counting,
                LoopParts {
                    init,
                    cond,
                    step,
                    body,
                },
            ),
            StmtKind::While { cond, body } => {
                self.exec_loop(LoopForm::PreCondition, LoopParts::conditional(cond, body))
            }
            StmtKind::DoWhile { body, cond } => {
                self.exec_loop(LoopForm::PostCondition, LoopParts::conditional(cond, body))
            }
            StmtKind::Break => Ok(ControlSignal::Break),
            StmtKind::Continue => Ok(ControlSignal::Continue),
            StmtKind::Return(expr) => Ok(ControlSignal::Return(self.eval_expr(expr)?)),
        }
    }

    /// Execute a body in its own scope.
    pub(crate) fn exec_block(&mut self, body: StmtRange) -> ExecResult<ControlSignal> {
        self.env.push_scope();
        let result = self.exec_stmts(body);
        self.env.pop_scope();
        result
    }

    /// Execute statements in order until one interrupts the sequence.
    fn exec_stmts(&mut self, body: StmtRange) -> ExecResult<ControlSignal> {
        let arena = self.arena;
        for &stmt in arena.stmt_list(body) {
            let signal = self.exec_stmt(stmt)?;
            if signal.interrupts() {
                return Ok(signal);
            }
        }
        Ok(ControlSignal::Normal)
    }

    /// Guard chain: the first truthy guard's body runs, else the else branch,
    /// else nothing.
    fn exec_if(
        &mut self,
        arms: GuardRange,
        else_branch: Option<StmtRange>,
    ) -> ExecResult<ControlSignal> {
        let arena = self.arena;
        for (index, arm) in arena.guard_arms(arms).iter().enumerate() {
            if self.eval_expr(arm.guard)?.is_truthy() {
                tracing::trace!(arm = index, "guard holds");
                return self.exec_block(arm.body);
            }
        }
        match else_branch {
            Some(body) => self.exec_block(body),
            None => Ok(ControlSignal::Normal),
        }
    }

    /// Branch dispatch with fallthrough.
    ///
    /// Runs every arm from the entry point onward, in source order, until a
    /// signal interrupts. All arms share one scope.
    fn exec_switch(&mut self, subject: ExprId, arms: CaseRange) -> ExecResult<ControlSignal> {
        let subject = self.eval_expr(subject)?;
        let arena = self.arena;
        let arms = arena.case_arms(arms);
        let Some(entry) = entry_arm(arms, subject) else {
            tracing::trace!(subject = subject.raw(), "no arm matches");
            return Ok(ControlSignal::Normal);
        };
        tracing::trace!(subject = subject.raw(), entry, "switch dispatch");

        self.env.push_scope();
        let result = self.exec_fallthrough(arms.iter().skip(entry));
        self.env.pop_scope();
        result.map(absorb_switch_signal)
    }

    fn exec_fallthrough<'b>(
        &mut self,
        arms: impl Iterator<Item = &'b CaseArm>,
    ) -> ExecResult<ControlSignal> {
        for arm in arms {
            let signal = self.exec_stmts(arm.body)?;
            if signal.interrupts() {
                return Ok(signal);
            }
        }
        Ok(ControlSignal::Normal)
    }
}
