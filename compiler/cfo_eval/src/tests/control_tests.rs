//! Tests for control signals, the loop phase state machine and switch entry.

use crate::exec::control::{
    absorb_switch_signal, next_phase, to_loop_action, ControlSignal, LoopAction, LoopForm,
    LoopPhase, PhaseEvent,
};
use crate::exec::dispatch::entry_arm;
use crate::ScalarInt;
use cfo_ir::{CaseArm, CaseLabel, StmtRange};

const FORMS: [LoopForm; 3] = [
    LoopForm::Counting,
    LoopForm::PreCondition,
    LoopForm::PostCondition,
];

/// Drive the state machine for `iterations` passes with every body ending in
/// `action`, returning the visited phases.
fn trace(form: LoopForm, iterations: usize, action: LoopAction) -> Vec<LoopPhase> {
    let mut phases = Vec::new();
    let mut phase = form.entry_phase();
    let mut remaining = iterations;
    while phase != LoopPhase::Terminated {
        phases.push(phase);
        let event = match phase {
            LoopPhase::Init | LoopPhase::Advance => PhaseEvent::Done,
            LoopPhase::Testing => {
                let holds = remaining > 0;
                remaining = remaining.saturating_sub(1);
                PhaseEvent::Tested(holds)
            }
            LoopPhase::Body => {
                if form == LoopForm::PostCondition && phases.len() == 1 {
                    remaining = remaining.saturating_sub(1);
                }
                PhaseEvent::BodyFinished(action)
            }
            LoopPhase::Terminated => break,
        };
        phase = next_phase(form, phase, event);
    }
    phases
}

// Entry phases

#[test]
fn entry_phases() {
    assert_eq!(LoopForm::Counting.entry_phase(), LoopPhase::Init);
    assert_eq!(LoopForm::PreCondition.entry_phase(), LoopPhase::Testing);
    assert_eq!(LoopForm::PostCondition.entry_phase(), LoopPhase::Body);
}

// Transitions

#[test]
fn counting_loop_cycle() {
    use LoopPhase::{Advance, Body, Init, Testing};
    assert_eq!(
        trace(LoopForm::Counting, 2, LoopAction::Next),
        vec![Init, Testing, Body, Advance, Testing, Body, Advance, Testing]
    );
}

#[test]
fn pre_condition_loop_cycle() {
    use LoopPhase::{Body, Testing};
    assert_eq!(
        trace(LoopForm::PreCondition, 2, LoopAction::Next),
        vec![Testing, Body, Testing, Body, Testing]
    );
}

#[test]
fn post_condition_loop_runs_body_first() {
    use LoopPhase::{Body, Testing};
    assert_eq!(
        trace(LoopForm::PostCondition, 2, LoopAction::Next),
        vec![Body, Testing, Body, Testing]
    );
}

#[test]
fn continue_reaches_advance_only_in_counting_loops() {
    let after_continue =
        |form| next_phase(form, LoopPhase::Body, PhaseEvent::BodyFinished(LoopAction::Continue));
    assert_eq!(after_continue(LoopForm::Counting), LoopPhase::Advance);
    assert_eq!(after_continue(LoopForm::PreCondition), LoopPhase::Testing);
    assert_eq!(after_continue(LoopForm::PostCondition), LoopPhase::Testing);
}

#[test]
fn break_and_return_terminate_every_form() {
    for form in FORMS {
        for action in [LoopAction::Break, LoopAction::Return(ScalarInt::ONE)] {
            assert_eq!(
                next_phase(form, LoopPhase::Body, PhaseEvent::BodyFinished(action)),
                LoopPhase::Terminated
            );
        }
    }
}

#[test]
fn false_condition_terminates() {
    for form in FORMS {
        assert_eq!(
            next_phase(form, LoopPhase::Testing, PhaseEvent::Tested(false)),
            LoopPhase::Terminated
        );
    }
}

#[test]
fn mismatched_event_terminates() {
    assert_eq!(
        next_phase(LoopForm::Counting, LoopPhase::Init, PhaseEvent::Tested(true)),
        LoopPhase::Terminated
    );
    assert_eq!(
        next_phase(LoopForm::PreCondition, LoopPhase::Testing, PhaseEvent::Done),
        LoopPhase::Terminated
    );
    assert_eq!(
        next_phase(LoopForm::Counting, LoopPhase::Terminated, PhaseEvent::Done),
        LoopPhase::Terminated
    );
}

// Signals

#[test]
fn signals_map_to_loop_actions() {
    assert_eq!(to_loop_action(ControlSignal::Normal), LoopAction::Next);
    assert_eq!(to_loop_action(ControlSignal::Continue), LoopAction::Continue);
    assert_eq!(to_loop_action(ControlSignal::Break), LoopAction::Break);
    assert_eq!(
        to_loop_action(ControlSignal::Return(ScalarInt::new(7))),
        LoopAction::Return(ScalarInt::new(7))
    );
}

#[test]
fn switch_absorbs_only_break() {
    assert_eq!(absorb_switch_signal(ControlSignal::Break), ControlSignal::Normal);
    assert_eq!(
        absorb_switch_signal(ControlSignal::Continue),
        ControlSignal::Continue
    );
    assert_eq!(
        absorb_switch_signal(ControlSignal::Return(ScalarInt::ZERO)),
        ControlSignal::Return(ScalarInt::ZERO)
    );
    assert!(!ControlSignal::Normal.interrupts());
    assert!(ControlSignal::Continue.interrupts());
}

// Switch entry

fn arms(labels: &[CaseLabel]) -> Vec<CaseArm> {
    labels
        .iter()
        .map(|&label| CaseArm {
            label,
            body: StmtRange::EMPTY,
        })
        .collect()
}

#[test]
fn entry_is_first_matching_label_in_source_order() {
    let table = arms(&[
        CaseLabel::Value(12),
        CaseLabel::Value(1),
        CaseLabel::Value(10),
    ]);
    assert_eq!(entry_arm(&table, ScalarInt::new(10)), Some(2));
    assert_eq!(entry_arm(&table, ScalarInt::new(12)), Some(0));
}

#[test]
fn default_is_used_wherever_it_sits() {
    let table = arms(&[CaseLabel::Value(1), CaseLabel::Default, CaseLabel::Value(2)]);
    assert_eq!(entry_arm(&table, ScalarInt::new(2)), Some(2));
    assert_eq!(entry_arm(&table, ScalarInt::new(99)), Some(1));
}

#[test]
fn no_match_and_no_default() {
    let table = arms(&[CaseLabel::Value(1), CaseLabel::Value(2)]);
    assert_eq!(entry_arm(&table, ScalarInt::new(0)), None);
    assert_eq!(entry_arm(&[], ScalarInt::new(0)), None);
}
