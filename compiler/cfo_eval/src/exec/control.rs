//! Control signals and the loop phase state machine.
//!
//! Statement execution returns a [`ControlSignal`]. Loops turn the signal of
//! their body into a [`LoopAction`] and feed it to [`next_phase`], which is
//! the only place that knows how the three loop forms differ.

use crate::ScalarInt;

/// Outcome of executing one statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlSignal {
    /// Continue with the next statement.
    Normal,
    /// Leave the nearest enclosing loop or switch.
    Break,
    /// Skip to the next iteration of the nearest enclosing loop.
    Continue,
    /// Leave the construct with a value.
    Return(ScalarInt),
}

impl ControlSignal {
    /// Whether the remaining statements of a block must be skipped.
    #[inline]
    pub fn interrupts(self) -> bool {
        !matches!(self, Self::Normal)
    }
}

/// A switch absorbs `break`; `continue` and `return` pass through to the
/// enclosing loop or construct.
#[inline]
pub fn absorb_switch_signal(signal: ControlSignal) -> ControlSignal {
    match signal {
        ControlSignal::Break => ControlSignal::Normal,
        other => other,
    }
}

/// The three loop forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoopForm {
    /// `for (init; cond; step) body`
    Counting,
    /// `while (cond) body`
    PreCondition,
    /// `do body while (cond);`
    PostCondition,
}

impl LoopForm {
    /// Phase a fresh loop instance starts in.
    #[inline]
    pub fn entry_phase(self) -> LoopPhase {
        match self {
            Self::Counting => LoopPhase::Init,
            Self::PreCondition => LoopPhase::Testing,
            Self::PostCondition => LoopPhase::Body,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Counting => "for",
            Self::PreCondition => "while",
            Self::PostCondition => "do-while",
        }
    }
}

/// Phases of one loop instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoopPhase {
    Init,
    Testing,
    Body,
    Advance,
    Terminated,
}

/// How a loop body finished, from the loop's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopAction {
    /// Ran to the end.
    Next,
    /// `continue` reached this loop.
    Continue,
    /// `break` reached this loop.
    Break,
    /// `return` passes through the loop.
    Return(ScalarInt),
}

/// Convert a body's control signal into the loop action it requests.
#[inline]
pub fn to_loop_action(signal: ControlSignal) -> LoopAction {
    match signal {
        ControlSignal::Normal => LoopAction::Next,
        ControlSignal::Continue => LoopAction::Continue,
        ControlSignal::Break => LoopAction::Break,
        ControlSignal::Return(value) => LoopAction::Return(value),
    }
}

/// What happened in the phase that just ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseEvent {
    /// `Init` or `Advance` finished.
    Done,
    /// `Testing` evaluated the condition.
    Tested(bool),
    /// `Body` finished.
    BodyFinished(LoopAction),
}

/// Transition function of the loop state machine.
///
/// `continue` moves a counting loop to `Advance` and the other forms back to
/// `Testing`; a post-condition loop therefore re-checks its condition rather
/// than re-entering the body. An event that does not belong to `phase`
/// terminates the loop.
pub fn next_phase(form: LoopForm, phase: LoopPhase, event: PhaseEvent) -> LoopPhase {
    match (phase, event) {
        (LoopPhase::Init | LoopPhase::Advance, PhaseEvent::Done) => LoopPhase::Testing,
        (LoopPhase::Testing, PhaseEvent::Tested(true)) => LoopPhase::Body,
        (
            LoopPhase::Body,
            PhaseEvent::BodyFinished(LoopAction::Next | LoopAction::Continue),
        ) => match form {
            LoopForm::Counting => LoopPhase::Advance,
            LoopForm::PreCondition | LoopForm::PostCondition => LoopPhase::Testing,
        },
        _ => LoopPhase::Terminated,
    }
}
