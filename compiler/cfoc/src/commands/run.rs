//! `cfoc run <construct> <subject> [--budget=N]`

use cfo_oracle::{evaluate, ConstructKind, EvalMode, OracleError};

use super::{parse_budget, UsageError};

/// Parsed arguments of `cfoc run`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunArgs {
    pub kind: ConstructKind,
    pub subject: i32,
    /// `None` runs unbounded.
    pub budget: Option<u64>,
}

/// Parse the arguments following `run`.
///
/// Anything starting with `--` is a flag; everything else (including
/// negative subjects such as `-5`) is positional.
pub fn parse_run_args(args: &[String]) -> Result<RunArgs, UsageError> {
    let mut kind = None;
    let mut subject = None;
    let mut budget = None;

    for arg in args {
        if let Some(raw) = arg.strip_prefix("--budget=") {
            budget = Some(parse_budget(raw)?);
        } else if arg.starts_with("--") {
            return Err(UsageError::UnexpectedArgument(arg.clone()));
        } else if kind.is_none() {
            kind = Some(arg.parse().map_err(UsageError::UnknownConstruct)?);
        } else if subject.is_none() {
            let value = arg
                .parse::<i32>()
                .map_err(|_| UsageError::InvalidSubject(arg.clone()))?;
            subject = Some(value);
        } else {
            return Err(UsageError::UnexpectedArgument(arg.clone()));
        }
    }

    Ok(RunArgs {
        kind: kind.ok_or(UsageError::MissingArgument("construct"))?,
        subject: subject.ok_or(UsageError::MissingArgument("subject"))?,
        budget,
    })
}

/// Evaluate and render one result line.
pub fn run_construct(args: RunArgs) -> Result<String, OracleError> {
    tracing::debug!(?args, "run");
    let outcome = evaluate(args.kind, args.subject, EvalMode::from_budget(args.budget))?;
    Ok(format!("{}({}) = {outcome}", args.kind.construct_name(), args.subject))
}
