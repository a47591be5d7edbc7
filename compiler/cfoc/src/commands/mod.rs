//! Command implementations.
//!
//! - `run`: one construct, one subject
//! - `samples`: replay of the sample program's own run

mod run;
mod samples;

pub use run::{parse_run_args, run_construct, RunArgs};
pub use samples::{sample_lines, DEFAULT_SAMPLE_BUDGET};

use std::fmt;

use cfo_oracle::ParseConstructKindError;

/// Bad command-line input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UsageError {
    MissingArgument(&'static str),
    InvalidSubject(String),
    InvalidBudget(String),
    UnknownConstruct(ParseConstructKindError),
    UnexpectedArgument(String),
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::MissingArgument(what) => write!(f, "missing {what}"),
            UsageError::InvalidSubject(raw) => {
                write!(f, "invalid subject `{raw}`: expected a 32-bit integer")
            }
            UsageError::InvalidBudget(raw) => {
                write!(f, "invalid budget `{raw}`: expected a non-negative integer")
            }
            UsageError::UnknownConstruct(err) => write!(f, "{err}"),
            UsageError::UnexpectedArgument(arg) => write!(f, "unexpected argument `{arg}`"),
        }
    }
}

impl std::error::Error for UsageError {}

/// Parse a `--budget=N` value.
pub fn parse_budget(raw: &str) -> Result<u64, UsageError> {
    raw.parse()
        .map_err(|_| UsageError::InvalidBudget(raw.to_string()))
}
