//! Oracle errors.

use std::fmt;

use cfo_eval::EvalError;
use cfo_ir::MalformedConstruct;

/// Failure to produce a result for a construct.
///
/// Divergence of a loop construct under a step budget is not an error; see
/// [`Outcome::Diverged`](cfo_eval::Outcome::Diverged).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OracleError {
    /// A sample construct failed structural validation.
    Malformed(MalformedConstruct),
    /// Evaluation failed.
    Eval(EvalError),
    /// A construct that must return a value ran out of steps.
    Diverged { construct: &'static str, steps: u64 },
}

impl fmt::Display for OracleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OracleError::Malformed(err) => write!(f, "{err}"),
            OracleError::Eval(err) => write!(f, "evaluation failed: {err}"),
            OracleError::Diverged { construct, steps } => {
                write!(f, "construct `{construct}` diverged after {steps} steps")
            }
        }
    }
}

impl std::error::Error for OracleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OracleError::Malformed(err) => Some(err),
            OracleError::Eval(err) => Some(err),
            OracleError::Diverged { .. } => None,
        }
    }
}

impl From<MalformedConstruct> for OracleError {
    fn from(err: MalformedConstruct) -> Self {
        OracleError::Malformed(err)
    }
}

impl From<EvalError> for OracleError {
    fn from(err: EvalError) -> Self {
        OracleError::Eval(err)
    }
}
