//! Evaluator for switch dispatch, guard chains and loops over 32-bit integers.
//!
//! # Architecture
//!
//! - `value`: `ScalarInt`, wraparound `i32` arithmetic
//! - `environment`: per-invocation scope stack
//! - `operators`: eager binary and unary operators
//! - `exec`: control signals, loop phase state machine, switch entry selection
//! - `interpreter`: the tree walker tying it together
//! - `eval_mode`: unbounded vs. step-budgeted evaluation
//!
//! Evaluation never traps on overflow. A bounded run that runs out of steps
//! ends in [`Outcome::Diverged`], which is a result, not an error.

#![deny(clippy::arithmetic_side_effects)]

mod environment;
mod errors;
mod eval_mode;
pub mod exec;
mod interpreter;
mod operators;
mod outcome;
mod value;

#[cfg(test)]
mod tests;

pub use environment::{AssignError, Environment, Scope};
pub use errors::{
    division_by_zero, missing_return, modulo_by_zero, signal_escaped, undefined_variable,
    EvalError, EvalErrorKind, EvalResult,
};
pub use eval_mode::{BudgetExhausted, EvalMode, ModeState};
pub use exec::control::{ControlSignal, LoopAction, LoopForm, LoopPhase, PhaseEvent};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::{evaluate_binary, evaluate_unary};
pub use outcome::Outcome;
pub use value::ScalarInt;
