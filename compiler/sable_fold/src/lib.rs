//! Constant folding for the Sable compiler.
//!
//! Runs over a resolved, type-checked [`Module`] and replaces expressions
//! whose value is known at compile time with `Const` nodes. Three sites are
//! rewritten:
//!
//! - **Call sites** in function bodies, folded bottom-up.
//! - **Field initializers** of `const` properties, folded as a whole.
//! - **Annotation arguments**, folded per constructor slot and then
//!   retargeted to the slot's declared parameter type, recursing through
//!   vararg elements for array-typed slots.
//!
//! # Pipeline Position
//!
//! ```text
//! Source → Parse → Resolve/Type Check → **sable_fold** → lowering
//! ```
//!
//! Folding is fail-safe: an expression the interpreter cannot evaluate
//! (division by zero, overflow, a call it does not model) keeps its
//! original form, untouched in its slot. This pass never introduces
//! `Error` nodes into the tree and never produces a diagnostic; genuinely
//! invalid constant expressions are reported by later stages that require
//! constant values.
//!
//! The checker and interpreter are strategy traits from `sable_eval`, so
//! front ends can supply richer evaluators without touching the walker.

use rayon::prelude::*;
use sable_eval::{CompileTimeChecker, Interpreter};
use sable_ir::Module;

mod folder;

pub use folder::FoldAttempt;

/// Fold every file in the module, sequentially.
#[tracing::instrument(level = "debug", skip_all, fields(files = module.files.len()))]
pub fn fold_module<C, I>(module: &mut Module, checker: &C, interpreter: &I)
where
    C: CompileTimeChecker,
    I: Interpreter,
{
    let Module {
        files,
        types,
        annotations,
    } = module;
    for file in files {
        folder::fold_file(file, types, annotations, checker, interpreter);
    }
}

/// Fold every file in the module, one rayon task per file.
///
/// Files own their arenas and the module-wide tables are read-only during
/// folding, so per-file results are identical to [`fold_module`].
#[tracing::instrument(level = "debug", skip_all, fields(files = module.files.len()))]
pub fn fold_module_par<C, I>(module: &mut Module, checker: &C, interpreter: &I)
where
    C: CompileTimeChecker + Sync,
    I: Interpreter + Sync,
{
    let Module {
        files,
        types,
        annotations,
    } = module;
    files.par_iter_mut().for_each(|file| {
        folder::fold_file(file, types, annotations, checker, interpreter);
    });
}
