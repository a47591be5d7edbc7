//! Tests for the pure execution helpers and operators.

mod control_tests;
mod operators_tests;
