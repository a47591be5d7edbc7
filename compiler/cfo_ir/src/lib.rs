//! CFO IR - construct representation for the control-flow oracle.
//!
//! This crate contains the data structures the evaluator walks:
//! - `Name`s for interned identifiers
//! - AST nodes for expressions, statements, case tables and guard chains
//! - `ExprArena`, the flat node storage
//! - `ConstructBuilder`, the only way constructs are assembled
//! - the structural validator behind `MalformedConstruct`
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers are `Name(u32)`
//! - **Flatten Everything**: no `Box<Expr>`, children are `ExprId` / `StmtId`
//! - **Validate Once**: structural errors surface when a construct is built,
//!   never during evaluation

mod arena;
pub mod ast;
mod builder;
mod expr_id;
mod interner;
mod name;
pub mod validate;

pub use arena::ExprArena;
pub use ast::{
    BinaryOp, CaseArm, CaseLabel, CaseRange, Construct, ExprKind, GuardArm, GuardRange, StmtKind,
    StmtRange, UnaryOp,
};
pub use builder::ConstructBuilder;
pub use expr_id::{ExprId, StmtId};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use validate::{validate, MalformedConstruct, MalformedKind};
