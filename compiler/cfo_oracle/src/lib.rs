//! Reference oracle for three families of structured control flow.
//!
//! Reproduces, bit for bit, what the sample functions `sample_switch`,
//! `sample_if` and `sample_loop` return for a given `int` argument, so a
//! tool that transforms those constructs (a CFG builder, a lowering pass, a
//! decompiler) can be checked for equivalence against it.
//!
//! # Entry Points
//!
//! - [`evaluate_branch_construct`]: switch dispatch with fallthrough
//! - [`evaluate_conditional_construct`]: if / else-if / else guard chain
//! - [`evaluate_loop_construct`]: nested `for`, then `do-while`, then `while`
//!
//! # Non-termination
//!
//! Without a step budget, [`evaluate_loop_construct`] runs until the construct
//! returns, which in general may be never. For the sample loop, 32-bit
//! wraparound eventually drives the accumulator negative: subject 233 returns
//! `0` after 65 546 iterations of the post-condition loop. With a budget of
//! 10 000 steps the same call reports [`Outcome::Diverged`].

mod error;
mod kind;
mod oracle;
mod samples;

use std::sync::OnceLock;

pub use cfo_eval::{EvalMode, Outcome};
pub use error::OracleError;
pub use kind::{ConstructKind, ParseConstructKindError};
pub use oracle::Oracle;
pub use samples::{BRANCH_NAME, CONDITIONAL_NAME, LOOP_NAME};

/// Process-wide oracle, built on first use.
fn shared() -> Result<&'static Oracle, OracleError> {
    static ORACLE: OnceLock<Result<Oracle, OracleError>> = OnceLock::new();
    ORACLE.get_or_init(Oracle::new).as_ref().map_err(Clone::clone)
}

/// Evaluate `sample_switch(subject)`.
pub fn evaluate_branch_construct(subject: i32) -> Result<i32, OracleError> {
    shared()?.evaluate_value(ConstructKind::Branch, subject)
}

/// Evaluate `sample_if(subject)`.
pub fn evaluate_conditional_construct(subject: i32) -> Result<i32, OracleError> {
    shared()?.evaluate_value(ConstructKind::Conditional, subject)
}

/// Evaluate `sample_loop(subject)`.
///
/// `None` runs unbounded and may not terminate for every construct of this
/// shape; `Some(budget)` returns [`Outcome::Diverged`] once `budget` loop
/// steps have run.
pub fn evaluate_loop_construct(
    subject: i32,
    step_budget: Option<u64>,
) -> Result<Outcome, OracleError> {
    shared()?.evaluate(ConstructKind::Loop, subject, EvalMode::from_budget(step_budget))
}

/// Evaluate any of the three constructs under an explicit mode.
pub fn evaluate(
    kind: ConstructKind,
    subject: i32,
    mode: EvalMode,
) -> Result<Outcome, OracleError> {
    shared()?.evaluate(kind, subject, mode)
}
