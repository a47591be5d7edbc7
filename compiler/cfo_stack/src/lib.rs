//! Stack growth guard for recursive construct evaluation.
//!
//! Constructs nest without a fixed limit: a guard chain inside a loop body
//! inside a switch arm inside another loop, and so on. Statement execution and
//! expression evaluation recurse once per nesting level, so a generated or
//! adversarial construct can exhaust the native stack long before it exhausts
//! any step budget. Wrapping the recursive entry points in
//! [`ensure_sufficient_stack`] grows the stack on demand instead.
//!
//! On `wasm32` the guard is a passthrough.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn exec_stmt(&mut self, id: StmtId) -> Result<ControlSignal, Interrupt> {
///     ensure_sufficient_stack(|| self.exec_stmt_inner(id))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM version: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
