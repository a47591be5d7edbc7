//! Terminal result of one invocation.

use std::fmt;

/// How an invocation ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The construct returned this value.
    Completed(i32),
    /// The step budget ran out after `steps` steps. A valid result, not a
    /// failure.
    Diverged { steps: u64 },
}

impl Outcome {
    /// The returned value, if the invocation completed.
    #[inline]
    pub fn completed(self) -> Option<i32> {
        match self {
            Self::Completed(value) => Some(value),
            Self::Diverged { .. } => None,
        }
    }

    #[inline]
    pub fn is_diverged(self) -> bool {
        matches!(self, Self::Diverged { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed(value) => write!(f, "{value}"),
            Self::Diverged { steps } => write!(f, "diverged after {steps} steps"),
        }
    }
}
