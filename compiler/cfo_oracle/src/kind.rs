//! Selecting one of the sample constructs by name.

use std::fmt;
use std::str::FromStr;

use crate::samples::{BRANCH_NAME, CONDITIONAL_NAME, LOOP_NAME};

/// The three construct families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConstructKind {
    /// Multi-way dispatch with fallthrough (`sample_switch`).
    Branch,
    /// Guard chain with short-circuit guards (`sample_if`).
    Conditional,
    /// Counting, post-condition and pre-condition loops (`sample_loop`).
    Loop,
}

impl ConstructKind {
    pub const ALL: [ConstructKind; 3] = [Self::Branch, Self::Conditional, Self::Loop];

    /// CLI spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Branch => "branch",
            Self::Conditional => "conditional",
            Self::Loop => "loop",
        }
    }

    /// Name of the sample function modeled for this family.
    pub fn construct_name(self) -> &'static str {
        match self {
            Self::Branch => BRANCH_NAME,
            Self::Conditional => CONDITIONAL_NAME,
            Self::Loop => LOOP_NAME,
        }
    }
}

impl fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown construct kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseConstructKindError {
    pub input: String,
}

impl fmt::Display for ParseConstructKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown construct `{}` (expected branch, conditional or loop)",
            self.input
        )
    }
}

impl std::error::Error for ParseConstructKindError {}

impl FromStr for ConstructKind {
    type Err = ParseConstructKindError;

    /// Accepts the CLI spelling, the C keyword, or the sample function name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "branch" | "switch" | BRANCH_NAME => Ok(Self::Branch),
            "conditional" | "if" | CONDITIONAL_NAME => Ok(Self::Conditional),
            "loop" | LOOP_NAME => Ok(Self::Loop),
            _ => Err(ParseConstructKindError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests;
