//! Construct AST
//!
//! Flat, arena-backed node types for the three construct families: switch
//! dispatch with fallthrough, guard chains, and the three loop forms.
//!
//! # Design
//! - No `Box<Expr>`: children are `ExprId` / `StmtId` indices into [`ExprArena`](crate::ExprArena)
//! - Bodies are contiguous `StmtRange`s in the arena's statement list
//! - All node kinds are `Copy`

mod expr;
mod operators;
mod ranges;
mod stmt;

pub use expr::ExprKind;
pub use operators::{BinaryOp, UnaryOp};
pub use ranges::{CaseRange, GuardRange, StmtRange};
pub use stmt::{CaseArm, CaseLabel, Construct, GuardArm, StmtKind};
