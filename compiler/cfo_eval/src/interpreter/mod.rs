//! Tree-walking interpreter for constructs.
//!
//! One `Interpreter` evaluates constructs stored in one `ExprArena`. Every
//! call to [`Interpreter::run`] starts from a fresh `Environment` and a fresh
//! step counter, so invocations never observe each other.
//!
//! # Module Structure
//!
//! - `builder`: `InterpreterBuilder`
//! - `expr`: expression evaluation, including short-circuit `&&` / `||`
//! - `stmt`: statements, blocks, the conditional evaluator and the dispatcher
//! - `loops`: the loop executor driving the phase state machine
//!
//! # Evaluation Modes
//!
//! - `Unbounded`: run until the construct returns
//! - `Bounded { budget }`: every loop phase entry costs one step; running out
//!   ends the invocation with [`Outcome::Diverged`]

mod builder;
mod expr;
mod loops;
mod stmt;

pub use builder::InterpreterBuilder;

use cfo_ir::{Construct, ExprArena, StringInterner};

use crate::eval_mode::{BudgetExhausted, EvalMode, ModeState};
use crate::exec::control::ControlSignal;
use crate::{missing_return, signal_escaped, Environment, EvalError, Outcome, ScalarInt};

/// Why statement execution stopped early.
#[derive(Debug)]
pub(crate) enum Interrupt {
    /// Evaluation failed.
    Error(EvalError),
    /// The step budget ran out.
    Exhausted(BudgetExhausted),
}

impl From<EvalError> for Interrupt {
    fn from(err: EvalError) -> Self {
        Interrupt::Error(err)
    }
}

impl From<BudgetExhausted> for Interrupt {
    fn from(exhausted: BudgetExhausted) -> Self {
        Interrupt::Exhausted(exhausted)
    }
}

pub(crate) type ExecResult<T> = Result<T, Interrupt>;

/// Tree-walking interpreter for constructs.
pub struct Interpreter<'a> {
    /// String interner for name lookup.
    pub(crate) interner: &'a StringInterner,
    /// Arena the constructs live in.
    pub(crate) arena: &'a ExprArena,
    /// Environment of the current invocation.
    pub(crate) env: Environment,
    /// Evaluation mode.
    pub(crate) mode: EvalMode,
    /// Step counter of the current invocation.
    pub(crate) mode_state: ModeState,
}

impl Interpreter<'_> {
    pub fn mode(&self) -> EvalMode {
        self.mode
    }

    /// Steps charged by the most recent `run`.
    pub fn steps(&self) -> u64 {
        self.mode_state.steps()
    }

    /// Invoke `construct` with `subject` bound to its parameter.
    ///
    /// Running out of step budget is an `Ok(Outcome::Diverged)`, not an error.
    ///
    /// # Panics
    /// `construct` must come from the arena this interpreter was built with,
    /// as returned together by `ConstructBuilder::finish`. Node ids from
    /// another arena index out of range.
    #[tracing::instrument(level = "trace", skip(self, construct))]
    pub fn run(&mut self, construct: &Construct, subject: i32) -> Result<Outcome, EvalError> {
        self.env = Environment::new();
        self.mode_state = ModeState::new(self.mode);
        self.env.define(construct.param, ScalarInt::new(subject));

        match self.exec_block(construct.body) {
            Ok(ControlSignal::Return(value)) => Ok(Outcome::Completed(value.raw())),
            Ok(ControlSignal::Normal) => {
                Err(missing_return(&self.interner.lookup(construct.name)))
            }
            Ok(ControlSignal::Break) => Err(signal_escaped("break")),
            Ok(ControlSignal::Continue) => Err(signal_escaped("continue")),
            Err(Interrupt::Error(err)) => Err(err),
            Err(Interrupt::Exhausted(BudgetExhausted { budget, steps })) => {
                let name = self.interner.lookup(construct.name);
                tracing::debug!(construct = &*name, budget, steps, "step budget exhausted");
                Ok(Outcome::Diverged { steps: budget })
            }
        }
    }
}
