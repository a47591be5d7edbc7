//! Evaluation errors.
//!
//! `EvalErrorKind` is the typed category; [`EvalError`] pairs it with the
//! rendered message. Factory functions are the public way to build errors.
//!
//! Running out of step budget is NOT an error: it is the
//! [`Outcome::Diverged`](crate::Outcome::Diverged) result. Arithmetic overflow
//! is not an error either; it wraps.

use std::fmt;

use crate::ScalarInt;

/// Result of evaluating an expression.
pub type EvalResult = Result<ScalarInt, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Arithmetic
    DivisionByZero,
    ModuloByZero,

    // Access
    UndefinedVariable { name: String },

    // Control flow
    /// The construct body finished without a `return`.
    MissingReturn { construct: String },
    /// A `break` or `continue` reached the construct boundary.
    SignalEscaped { signal: &'static str },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalErrorKind::DivisionByZero => write!(f, "division by zero"),
            EvalErrorKind::ModuloByZero => write!(f, "modulo by zero"),
            EvalErrorKind::UndefinedVariable { name } => write!(f, "undefined variable: {name}"),
            EvalErrorKind::MissingReturn { construct } => {
                write!(f, "construct `{construct}` finished without returning a value")
            }
            EvalErrorKind::SignalEscaped { signal } => {
                write!(f, "`{signal}` escaped the construct body")
            }
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Rendered message, `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

/// Division by zero error.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Modulo by zero error.
#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

/// Undefined variable.
#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

/// Construct body fell off its end.
#[cold]
pub fn missing_return(construct: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingReturn {
        construct: construct.to_string(),
    })
}

/// `break`/`continue` with nothing left to absorb it.
#[cold]
pub fn signal_escaped(signal: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::SignalEscaped { signal })
}
