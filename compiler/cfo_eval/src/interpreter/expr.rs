//! Expression evaluation.

use cfo_ir::{BinaryOp, ExprId, ExprKind, Name};
use cfo_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::environment::AssignError;
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::{undefined_variable, EvalResult, ScalarInt};

impl Interpreter<'_> {
    /// Evaluate an expression.
    pub(crate) fn eval_expr(&mut self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(id))
    }

    fn eval_expr_inner(&mut self, id: ExprId) -> EvalResult {
        match self.arena.expr_kind(id) {
            ExprKind::Int(value) => Ok(ScalarInt::new(value)),
            ExprKind::Ident(name) => self.load(name),
            ExprKind::Binary { op, left, right } => self.eval_binary(left, op, right),
            ExprKind::Unary { op, operand } => {
                let value = self.eval_expr(operand)?;
                Ok(evaluate_unary(value, op))
            }
            ExprKind::Assign { target, value } => {
                let value = self.eval_expr(value)?;
                self.store(target, value)
            }
            ExprKind::CompoundAssign { target, op, value } => {
                // Right-hand side first, then the current value of the target.
                let rhs = self.eval_expr(value)?;
                let current = self.load(target)?;
                let value = evaluate_binary(current, rhs, op)?;
                self.store(target, value)
            }
        }
    }

    /// `&&` and `||` evaluate the right operand only when the left one does
    /// not decide the result.
    fn eval_binary(&mut self, left: ExprId, op: BinaryOp, right: ExprId) -> EvalResult {
        let left_val = self.eval_expr(left)?;
        if !op.is_short_circuit() {
            let right_val = self.eval_expr(right)?;
            return evaluate_binary(left_val, right_val, op);
        }

        let decided = match op {
            BinaryOp::Or => left_val.is_truthy(),
            _ => !left_val.is_truthy(),
        };
        if decided {
            tracing::trace!(op = op.as_symbol(), "right operand skipped");
            return Ok(ScalarInt::from_bool(left_val.is_truthy()));
        }
        let right_val = self.eval_expr(right)?;
        Ok(ScalarInt::from_bool(right_val.is_truthy()))
    }

    fn load(&self, name: Name) -> EvalResult {
        self.env
            .lookup(name)
            .ok_or_else(|| undefined_variable(&self.interner.lookup(name)))
    }

    /// Assign and yield the stored value.
    fn store(&mut self, name: Name, value: ScalarInt) -> EvalResult {
        match self.env.assign(name, value) {
            Ok(()) => Ok(value),
            Err(AssignError::Undefined) => Err(undefined_variable(&self.interner.lookup(name))),
        }
    }
}
