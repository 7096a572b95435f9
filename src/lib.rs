//! Arithmetic expression trees over a closed set of node kinds, and an
//! evaluator that reduces them to integers under a variable environment.

pub mod error;
pub mod eval;
pub mod expr;
pub mod visit;

pub use error::EvalError;
pub use eval::{Env, Evaluator};
pub use expr::{BinOp, Expr, Value};
pub use visit::Visitor;
