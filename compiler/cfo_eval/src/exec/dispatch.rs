//! Switch entry-point selection.

use cfo_ir::{CaseArm, CaseLabel};

use crate::ScalarInt;

/// Position of the arm where execution of a switch starts.
///
/// The first `Value` label equal to `subject` in source order wins; failing
/// that, the position of the `default` arm wherever it sits; failing that,
/// `None` and no arm runs. Label values never influence which arms run after
/// the entry point.
pub fn entry_arm(arms: &[CaseArm], subject: ScalarInt) -> Option<usize> {
    arms.iter()
        .position(|arm| arm.label == CaseLabel::Value(subject.raw()))
        .or_else(|| arms.iter().position(|arm| arm.label == CaseLabel::Default))
}
