//! Pre-built sample constructs.

use cfo_eval::{EvalMode, InterpreterBuilder, Outcome};
use cfo_ir::{Construct, ExprArena, StringInterner};

use crate::samples::{sample_if, sample_loop, sample_switch};
use crate::{ConstructKind, OracleError};

/// A construct together with the arena it was built in.
struct Sample {
    construct: Construct,
    arena: ExprArena,
}

/// The three sample constructs, built and validated once.
///
/// Every evaluation gets its own interpreter and therefore its own
/// environment and step counter.
pub struct Oracle {
    interner: StringInterner,
    branch: Sample,
    conditional: Sample,
    loops: Sample,
}

impl Oracle {
    /// Build and validate all three constructs.
    pub fn new() -> Result<Self, OracleError> {
        let interner = StringInterner::new();
        let sample = |built: Result<(Construct, ExprArena), _>| {
            built
                .map(|(construct, arena)| Sample { construct, arena })
                .map_err(OracleError::Malformed)
        };
        let branch = sample(sample_switch(&interner))?;
        let conditional = sample(sample_if(&interner))?;
        let loops = sample(sample_loop(&interner))?;
        Ok(Oracle {
            interner,
            branch,
            conditional,
            loops,
        })
    }

    fn sample(&self, kind: ConstructKind) -> &Sample {
        match kind {
            ConstructKind::Branch => &self.branch,
            ConstructKind::Conditional => &self.conditional,
            ConstructKind::Loop => &self.loops,
        }
    }

    /// Evaluate one construct for one subject.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn evaluate(
        &self,
        kind: ConstructKind,
        subject: i32,
        mode: EvalMode,
    ) -> Result<Outcome, OracleError> {
        let Sample { construct, arena } = self.sample(kind);
        let mut interpreter = InterpreterBuilder::new(&self.interner, arena)
            .mode(mode)
            .build();
        let outcome = interpreter.run(construct, subject)?;
        tracing::debug!(
            %outcome,
            mode = ?interpreter.mode(),
            steps = interpreter.steps(),
            "evaluated"
        );
        Ok(outcome)
    }

    /// Evaluate a construct that must return a value.
    pub fn evaluate_value(&self, kind: ConstructKind, subject: i32) -> Result<i32, OracleError> {
        match self.evaluate(kind, subject, EvalMode::Unbounded)? {
            Outcome::Completed(value) => Ok(value),
            Outcome::Diverged { steps } => Err(OracleError::Diverged {
                construct: kind.construct_name(),
                steps,
            }),
        }
    }
}
