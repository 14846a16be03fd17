//! Compile-time eligibility checking.

use sable_ir::{Callee, Decl, ExprArena, ExprId, ExprKind};

use super::EvalMode;

/// Decides whether an expression may be evaluated at compile time.
///
/// The folding pass asks before every interpretation attempt. `context` is
/// the enclosing declaration where one exists (field initializers); call
/// sites and annotation arguments are checked context-free.
pub trait CompileTimeChecker {
    fn is_foldable(
        &self,
        arena: &ExprArena,
        expr: ExprId,
        mode: EvalMode,
        context: Option<&Decl>,
    ) -> bool;
}

/// Structural eligibility checker for built-in operations.
///
/// An expression is foldable when every leaf is a constant and every call
/// on the way down is admitted by the mode. No evaluation happens here;
/// a foldable expression can still fail interpretation (division by zero),
/// which the folding pass absorbs.
pub struct BuiltinChecker;

impl CompileTimeChecker for BuiltinChecker {
    fn is_foldable(
        &self,
        arena: &ExprArena,
        expr: ExprId,
        mode: EvalMode,
        _context: Option<&Decl>,
    ) -> bool {
        classify(arena, expr, mode)
    }
}

fn classify(arena: &ExprArena, id: ExprId, mode: EvalMode) -> bool {
    if !id.is_valid() {
        return false;
    }
    match *arena.kind(id) {
        ExprKind::Const(_) => true,
        ExprKind::Call { callee, args } => {
            let admitted = match callee {
                Callee::Builtin(_) => true,
                Callee::Named(_) => mode == EvalMode::Full,
            };
            admitted && arena.list(args).iter().all(|&arg| classify(arena, arg, mode))
        }
        ExprKind::Vararg { elems, .. } => {
            arena.list(elems).iter().all(|&elem| classify(arena, elem, mode))
        }
        // Spread, Error, Block, If, GetVar: runtime (or not a value at all).
        _ => false,
    }
}

#[cfg(test)]
mod tests;
