//! Compile-time interpretation.

use sable_ir::{Callee, ConstValue, Expr, ExprArena, ExprId, ExprKind};
use tracing::debug;

use super::errors::{arity_mismatch, not_const_evaluable, too_deep, EvalError};
use super::operators::{apply_binary, apply_unary};

/// Produces a value for an expression the checker already admitted.
///
/// `interpret` always allocates: a `Const` node carrying the computed value
/// on success, or an `Error` node on failure. The original expression is
/// never mutated, so a caller that sees `Error` can keep the original in
/// its slot.
pub trait Interpreter {
    fn interpret(&self, arena: &mut ExprArena, expr: ExprId) -> ExprId;
}

/// Interpreter for built-in operator calls over constant operands.
///
/// Evaluation is a pure recursive walk with a depth cap. Failures are
/// ordinary outcomes (division by zero, overflow, a named call it cannot
/// evaluate) and surface as an `Error` node, logged at debug level.
pub struct BuiltinInterpreter {
    max_depth: usize,
}

impl BuiltinInterpreter {
    /// Create an interpreter with an explicit nesting limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        BuiltinInterpreter { max_depth }
    }

    fn eval(&self, arena: &ExprArena, id: ExprId, depth: usize) -> Result<ConstValue, EvalError> {
        let span = arena.span(id);
        if depth >= self.max_depth {
            return Err(too_deep(self.max_depth, span));
        }
        match *arena.kind(id) {
            ExprKind::Const(value) => Ok(value),
            ExprKind::Call { callee, args } => {
                let op = match callee {
                    Callee::Builtin(op) => op,
                    Callee::Named(_) => return Err(not_const_evaluable("named call", span)),
                };
                match *arena.list(args) {
                    [operand] if op.arity() == 1 => {
                        let value = self.eval(arena, operand, depth + 1)?;
                        apply_unary(op, value, span)
                    }
                    [left, right] if op.arity() == 2 => {
                        let lhs = self.eval(arena, left, depth + 1)?;
                        let rhs = self.eval(arena, right, depth + 1)?;
                        apply_binary(op, lhs, rhs, span)
                    }
                    ref args => Err(arity_mismatch(op, args.len(), span)),
                }
            }
            ExprKind::Error => Err(not_const_evaluable("error expression", span)),
            ExprKind::Vararg { .. } => Err(not_const_evaluable("vararg", span)),
            ExprKind::Spread(_) => Err(not_const_evaluable("spread", span)),
            ExprKind::Block(_) => Err(not_const_evaluable("block", span)),
            ExprKind::If { .. } => Err(not_const_evaluable("conditional", span)),
            ExprKind::GetVar(_) => Err(not_const_evaluable("variable", span)),
        }
    }
}

impl Default for BuiltinInterpreter {
    fn default() -> Self {
        BuiltinInterpreter { max_depth: 256 }
    }
}

impl Interpreter for BuiltinInterpreter {
    fn interpret(&self, arena: &mut ExprArena, expr: ExprId) -> ExprId {
        let span = arena.span(expr);
        let ty = arena.ty(expr);
        match self.eval(arena, expr, 0) {
            Ok(value) => arena.push(Expr::new(ExprKind::Const(value), span, ty)),
            Err(err) => {
                debug!(%err, ?span, "compile-time evaluation failed");
                arena.push(Expr::new(ExprKind::Error, span, ty))
            }
        }
    }
}
