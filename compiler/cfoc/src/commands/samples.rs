//! `cfoc samples [--budget=N]`: the sample program's own run.

use cfo_oracle::{
    evaluate_branch_construct, evaluate_conditional_construct, evaluate_loop_construct,
    OracleError,
};

/// Budget for the loop sample when none is given.
pub const DEFAULT_SAMPLE_BUDGET: u64 = 10_000;

const CONDITIONAL_SUBJECTS: [i32; 5] = [3, 8, 20, 24, 25];
const LOOP_SUBJECT: i32 = 233;

/// Output lines of the replayed run: switch for 0..13, the five if
/// subjects, the loop for 233.
pub fn sample_lines(step_budget: Option<u64>) -> Result<Vec<String>, OracleError> {
    let mut lines = Vec::new();
    for subject in 0..13 {
        let value = evaluate_branch_construct(subject)?;
        lines.push(format!("switch case {subject}: {value}"));
    }
    for subject in CONDITIONAL_SUBJECTS {
        let value = evaluate_conditional_construct(subject)?;
        lines.push(format!("if {subject}: {value}"));
    }
    let outcome = evaluate_loop_construct(LOOP_SUBJECT, step_budget)?;
    lines.push(format!("loop {LOOP_SUBJECT}: {outcome}"));
    Ok(lines)
}
