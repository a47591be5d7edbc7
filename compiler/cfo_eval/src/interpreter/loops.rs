//! Loop executor.
//!
//! All three loop forms run through one driver: charge a step, run the
//! current phase, feed the resulting event to `next_phase`. The form only
//! decides the entry phase and where `continue` lands.

use cfo_ir::{ExprId, StmtId, StmtRange};

use super::{ExecResult, Interpreter};
use crate::exec::control::{
    next_phase, to_loop_action, ControlSignal, LoopAction, LoopForm, LoopPhase, PhaseEvent,
};

/// The pieces of one loop statement. `while` and `do-while` have no init or
/// step; an absent condition always holds.
#[derive(Clone, Copy, Debug)]
pub(super) struct LoopParts {
    pub init: Option<StmtId>,
    pub cond: Option<ExprId>,
    pub step: Option<ExprId>,
    pub body: StmtRange,
}

impl LoopParts {
    pub(super) fn conditional(cond: ExprId, body: StmtRange) -> Self {
        LoopParts {
            init: None,
            cond: Some(cond),
            step: None,
            body,
        }
    }
}

impl Interpreter<'_> {
    /// Run one loop instance. `init` declarations live in a scope of their
    /// own, each body pass gets a fresh inner scope.
    pub(super) fn exec_loop(
        &mut self,
        form: LoopForm,
        parts: LoopParts,
    ) -> ExecResult<ControlSignal> {
        self.env.push_scope();
        let result = self.drive_loop(form, parts);
        self.env.pop_scope();
        result
    }

    fn drive_loop(&mut self, form: LoopForm, parts: LoopParts) -> ExecResult<ControlSignal> {
        let mut phase = form.entry_phase();
        let mut exit = ControlSignal::Normal;

        while phase != LoopPhase::Terminated {
            self.mode_state.check_budget()?;
            tracing::trace!(form = form.as_str(), ?phase, "loop phase");

            let event = match phase {
                LoopPhase::Init => {
                    if let Some(init) = parts.init {
                        // Always a declaration or an expression, so `Normal`.
                        self.exec_stmt(init)?;
                    }
                    PhaseEvent::Done
                }
                LoopPhase::Testing => {
                    let holds = match parts.cond {
                        Some(cond) => self.eval_expr(cond)?.is_truthy(),
                        None => true,
                    };
                    PhaseEvent::Tested(holds)
                }
                LoopPhase::Body => {
                    let action = to_loop_action(self.exec_block(parts.body)?);
                    if let LoopAction::Return(value) = action {
                        exit = ControlSignal::Return(value);
                    }
                    PhaseEvent::BodyFinished(action)
                }
                LoopPhase::Advance => {
                    if let Some(step) = parts.step {
                        self.eval_expr(step)?;
                    }
                    PhaseEvent::Done
                }
                LoopPhase::Terminated => break,
            };
            phase = next_phase(form, phase, event);
        }

        Ok(exit)
    }
}
