//! Evaluation modes for the construct interpreter.
//!
//! `EvalMode` is the evaluation policy: run until the construct returns, or
//! charge loop phase transitions against a step budget and report divergence
//! once it runs out. Enum dispatch keeps the mode `Copy` and hashable.

/// Evaluation mode: determines how loop execution is metered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// Run to completion. May not terminate for some inputs.
    #[default]
    Unbounded,
    /// Abort with a divergence report once more than `budget` steps ran.
    Bounded {
        /// Maximum number of loop phase entries.
        budget: u64,
    },
}

impl EvalMode {
    /// `None` maps to `Unbounded`.
    #[inline]
    pub fn from_budget(step_budget: Option<u64>) -> Self {
        match step_budget {
            Some(budget) => Self::Bounded { budget },
            None => Self::Unbounded,
        }
    }

    /// Step budget, or `None` for unbounded execution.
    #[inline]
    pub fn step_budget(self) -> Option<u64> {
        match self {
            Self::Unbounded => None,
            Self::Bounded { budget } => Some(budget),
        }
    }

    #[inline]
    pub fn is_bounded(self) -> bool {
        matches!(self, Self::Bounded { .. })
    }
}

/// Per-invocation mutable state stored alongside `EvalMode`.
#[derive(Clone, Debug)]
pub struct ModeState {
    /// Steps charged so far. Counted in every mode.
    steps: u64,
    /// Step budget (`Bounded` only).
    budget: Option<u64>,
}

impl ModeState {
    /// Create mode state appropriate for the given evaluation mode.
    pub fn new(mode: EvalMode) -> Self {
        Self {
            steps: 0,
            budget: mode.step_budget(),
        }
    }

    /// Charge one step.
    ///
    /// Always `Ok(())` in unbounded mode. In bounded mode the step that takes
    /// the count past the budget is the one that fails.
    #[inline]
    pub fn check_budget(&mut self) -> Result<(), BudgetExhausted> {
        self.steps = self.steps.saturating_add(1);
        if let Some(budget) = self.budget {
            if self.steps > budget {
                return Err(BudgetExhausted {
                    budget,
                    steps: self.steps,
                });
            }
        }
        Ok(())
    }

    /// Steps charged so far.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

/// Returned when a bounded evaluation runs out of steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BudgetExhausted {
    /// The configured budget.
    pub budget: u64,
    /// Steps charged, including the one that failed.
    pub steps: u64,
}
