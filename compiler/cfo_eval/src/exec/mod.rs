//! Execution helpers for the construct interpreter.
//!
//! - `control`: control signals and the loop phase state machine
//! - `dispatch`: switch entry-point selection
//!
//! Both are pure: they decide where execution goes next, the `Interpreter`
//! does the evaluating.

pub mod control;
pub mod dispatch;
