//! Property-based tests for the construct evaluator.
//!
//! Generated case tables, guards and loop bounds check the observable
//! evaluation contracts:
//! 1. A switch with no matching label and no default changes nothing
//! 2. Fallthrough runs every arm from the entry point to the next `break`
//! 3. `&&` / `||` never evaluate a right operand the left one decided
//! 4. `continue` in a counting loop still runs the step expression
//! 5. A budget large enough to finish does not change the result

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    reason = "Proptest-generated sizes are small"
)]

use cfo_eval::{EvalMode, InterpreterBuilder, Outcome};
use cfo_ir::{
    BinaryOp, CaseLabel, Construct, ConstructBuilder, ExprArena, StmtRange, StringInterner,
};
use proptest::prelude::*;

// -- Helpers --

fn build(
    interner: &StringInterner,
    body: impl FnOnce(&ConstructBuilder<'_>) -> StmtRange,
) -> (Construct, ExprArena) {
    let b = ConstructBuilder::new(interner);
    let body = body(&b);
    b.finish("prop", "n", body).unwrap()
}

fn run(
    interner: &StringInterner,
    built: &(Construct, ExprArena),
    mode: EvalMode,
    subject: i32,
) -> (Outcome, u64) {
    let (construct, arena) = built;
    let mut interp = InterpreterBuilder::new(interner, arena).mode(mode).build();
    let outcome = interp.run(construct, subject).unwrap();
    (outcome, interp.steps())
}

/// `int acc = n; switch (n) { case l0: acc += 1; ... case lj: acc += 2^j; [break;] } return acc;`
///
/// Arm `stop` (if in range) ends with `break`.
fn power_table(interner: &StringInterner, labels: &[i32], stop: usize) -> (Construct, ExprArena) {
    build(interner, |b| {
        let arms: Vec<(CaseLabel, StmtRange)> = labels
            .iter()
            .enumerate()
            .map(|(j, &label)| {
                let add = b.expr_stmt(b.compound_assign("acc", BinaryOp::Add, b.int(1 << j)));
                let body = if j == stop {
                    b.body([add, b.brk()])
                } else {
                    b.body([add])
                };
                (CaseLabel::Value(label), body)
            })
            .collect();
        b.body([
            b.let_("acc", b.ident("n")),
            b.switch(b.ident("n"), arms),
            b.ret(b.ident("acc")),
        ])
    })
}

// -- Strategies --

/// Distinct case labels in shuffled source order.
fn labels_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::btree_set(-50i32..50, 1..8)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

/// Labels, an entry index, and a break position (`len` means no break).
fn table_strategy() -> impl Strategy<Value = (Vec<i32>, usize, usize)> {
    labels_strategy().prop_flat_map(|labels| {
        let len = labels.len();
        (Just(labels), 0..len, 0..=len)
    })
}

// -- Properties --

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn no_match_is_identity(labels in labels_strategy(), subject in -60i32..60) {
        prop_assume!(!labels.contains(&subject));
        let interner = StringInterner::new();
        let table = power_table(&interner, &labels, labels.len());
        let (outcome, _) = run(&interner, &table, EvalMode::Unbounded, subject);
        prop_assert_eq!(outcome, Outcome::Completed(subject));
    }

    #[test]
    fn fallthrough_accumulates_by_position((labels, entry, stop) in table_strategy()) {
        let interner = StringInterner::new();
        let table = power_table(&interner, &labels, stop);
        let subject = labels[entry];

        let last = if stop >= entry && stop < labels.len() { stop } else { labels.len() - 1 };
        let expected: i32 = (entry..=last).map(|j| 1 << j).sum();

        let (outcome, _) = run(&interner, &table, EvalMode::Unbounded, subject);
        prop_assert_eq!(outcome, Outcome::Completed(subject.wrapping_add(expected)));
    }

    #[test]
    fn short_circuit_skips_decided_right_operand(subject in any::<i32>()) {
        let interner = StringInterner::new();
        let built = build(&interner, |b| {
            let bump = |k: i32| {
                b.binary(
                    b.compound_assign("hits", BinaryOp::Add, b.int(k)),
                    BinaryOp::NotEq,
                    b.int(0),
                )
            };
            b.body([
                b.let_("hits", b.int(0)),
                b.expr_stmt(b.binary(b.ident("n"), BinaryOp::And, bump(1))),
                b.expr_stmt(b.binary(b.ident("n"), BinaryOp::Or, bump(10))),
                b.ret(b.ident("hits")),
            ])
        });
        let expected = if subject == 0 { 10 } else { 1 };
        let (outcome, _) = run(&interner, &built, EvalMode::Unbounded, subject);
        prop_assert_eq!(outcome, Outcome::Completed(expected));
    }

    #[test]
    fn continue_in_counting_loop_reaches_advance(n in 0i32..60) {
        let interner = StringInterner::new();
        let built = build(&interner, |b| {
            b.body([
                b.let_("count", b.int(0)),
                b.for_loop(
                    Some(b.let_("i", b.int(0))),
                    Some(b.binary(b.ident("i"), BinaryOp::Lt, b.ident("n"))),
                    Some(b.compound_assign("i", BinaryOp::Add, b.int(1))),
                    b.body([
                        b.expr_stmt(b.compound_assign("count", BinaryOp::Add, b.int(1))),
                        b.cont(),
                        b.expr_stmt(b.compound_assign("count", BinaryOp::Add, b.int(100))),
                    ]),
                ),
                b.ret(b.ident("count")),
            ])
        });
        let (outcome, steps) = run(&interner, &built, EvalMode::Bounded { budget: 1_000 }, n);
        prop_assert_eq!(outcome, Outcome::Completed(n));
        prop_assert_eq!(steps, 3 * n as u64 + 2);
    }

    #[test]
    fn budget_only_matters_when_exceeded(n in 0i32..100, budget in 0u64..400) {
        let interner = StringInterner::new();
        let built = build(&interner, |b| {
            b.body([
                b.let_("i", b.int(0)),
                b.while_loop(
                    b.binary(b.ident("i"), BinaryOp::Lt, b.ident("n")),
                    b.body([b.expr_stmt(b.compound_assign("i", BinaryOp::Add, b.int(1)))]),
                ),
                b.ret(b.ident("i")),
            ])
        });
        let (unbounded, needed) = run(&interner, &built, EvalMode::Unbounded, n);
        prop_assert_eq!(unbounded, Outcome::Completed(n));
        prop_assert_eq!(needed, 2 * n as u64 + 1);

        let (bounded, _) = run(&interner, &built, EvalMode::Bounded { budget }, n);
        if budget >= needed {
            prop_assert_eq!(bounded, unbounded);
        } else {
            prop_assert_eq!(bounded, Outcome::Diverged { steps: budget });
        }
    }

    #[test]
    fn arithmetic_wraps_like_i32(a in any::<i32>(), k in any::<i32>()) {
        let interner = StringInterner::new();
        for (op, expected) in [
            (BinaryOp::Add, a.wrapping_add(k)),
            (BinaryOp::Sub, a.wrapping_sub(k)),
            (BinaryOp::Mul, a.wrapping_mul(k)),
        ] {
            let built = build(&interner, |b| b.body([b.ret(b.binary(b.ident("n"), op, b.int(k)))]));
            let (outcome, _) = run(&interner, &built, EvalMode::Unbounded, a);
            prop_assert_eq!(outcome, Outcome::Completed(expected));
        }
    }

    #[test]
    fn remainder_sign_follows_dividend(a in any::<i32>(), k in any::<i32>()) {
        prop_assume!(k != 0);
        let interner = StringInterner::new();
        let built = build(&interner, |b| {
            b.body([b.ret(b.binary(b.ident("n"), BinaryOp::Mod, b.int(k)))])
        });
        let (outcome, _) = run(&interner, &built, EvalMode::Unbounded, a);
        let rem = outcome.completed().unwrap();
        prop_assert_eq!(rem, a.wrapping_rem(k));
        prop_assert!(rem == 0 || (rem < 0) == (a < 0));
    }
}
