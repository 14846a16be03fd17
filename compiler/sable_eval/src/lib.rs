//! Compile-time evaluation for the Sable compiler.
//!
//! This crate supplies the two collaborators the constant-folding pass
//! consumes, behind strategy traits so the pass (and its tests) never
//! depend on a concrete evaluator:
//!
//! - [`CompileTimeChecker`] decides whether an expression *may* be
//!   evaluated at compile time under a given [`EvalMode`].
//! - [`Interpreter`] attempts to produce the value, yielding a `Const`
//!   node on success or an `Error` node on failure.
//!
//! # Pipeline Position
//!
//! ```text
//! Source → Parse → Resolve/Type Check → **sable_fold** (drives sable_eval) → lowering
//! ```
//!
//! The shipped implementations ([`BuiltinChecker`], [`BuiltinInterpreter`])
//! cover built-in operators only: checked integer arithmetic, float
//! arithmetic, comparisons, boolean logic, and bitwise operations.
//! Evaluation failure is an ordinary outcome here, not a diagnostic: the
//! folding pass leaves the original expression in place and later stages
//! report genuinely invalid constant expressions.

mod checker;
mod errors;
mod interpreter;
mod operators;

pub use checker::{BuiltinChecker, CompileTimeChecker};
pub use errors::{EvalError, EvalErrorKind};
pub use interpreter::{BuiltinInterpreter, Interpreter};

/// Which calls an eligibility check admits.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum EvalMode {
    /// Only built-in operator calls. The mode the constant folder uses.
    BuiltinsOnly,
    /// Also admit named calls. The shipped interpreter cannot evaluate
    /// them, so folding such a call falls back to the original expression.
    Full,
}
