//! `InterpreterBuilder` for creating `Interpreter` instances.

use super::Interpreter;
use crate::eval_mode::{EvalMode, ModeState};
use crate::Environment;
use cfo_ir::{ExprArena, StringInterner};

/// Builder for creating `Interpreter` instances.
///
/// The default mode is `Unbounded`; use `EvalMode::Bounded` whenever the
/// construct may not terminate.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    arena: &'a ExprArena,
    mode: EvalMode,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena) -> Self {
        Self {
            interner,
            arena,
            mode: EvalMode::default(),
        }
    }

    /// Set the evaluation mode.
    #[must_use]
    pub fn mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Shorthand for `mode(EvalMode::from_budget(step_budget))`.
    #[must_use]
    pub fn step_budget(self, step_budget: Option<u64>) -> Self {
        self.mode(EvalMode::from_budget(step_budget))
    }

    /// Build the interpreter.
    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            arena: self.arena,
            env: Environment::new(),
            mode: self.mode,
            mode_state: ModeState::new(self.mode),
        }
    }
}
