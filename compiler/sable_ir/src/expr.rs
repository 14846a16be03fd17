//! Expression node kinds.

use std::fmt;

use super::{ConstValue, ExprId, ExprRange, Name, Span, TypeId};

/// A built-in operator, callable at compile time.
///
/// These are the only callees the "built-ins only" evaluation mode admits.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum BuiltinOp {
    // Binary
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    // Unary
    Neg,
    Not,
    BitNot,
}

impl BuiltinOp {
    /// Number of arguments the operator takes.
    pub const fn arity(self) -> usize {
        match self {
            BuiltinOp::Neg | BuiltinOp::Not | BuiltinOp::BitNot => 1,
            _ => 2,
        }
    }

    /// Operator symbol, for diagnostics.
    pub const fn symbol(self) -> &'static str {
        match self {
            BuiltinOp::Add => "+",
            BuiltinOp::Sub | BuiltinOp::Neg => "-",
            BuiltinOp::Mul => "*",
            BuiltinOp::Div => "/",
            BuiltinOp::Rem => "%",
            BuiltinOp::Eq => "==",
            BuiltinOp::NotEq => "!=",
            BuiltinOp::Lt => "<",
            BuiltinOp::LtEq => "<=",
            BuiltinOp::Gt => ">",
            BuiltinOp::GtEq => ">=",
            BuiltinOp::And => "&&",
            BuiltinOp::Or => "||",
            BuiltinOp::BitAnd => "&",
            BuiltinOp::BitOr => "|",
            BuiltinOp::BitXor => "^",
            BuiltinOp::Shl => "<<",
            BuiltinOp::Shr => ">>",
            BuiltinOp::Not => "!",
            BuiltinOp::BitNot => "~",
        }
    }
}

impl fmt::Display for BuiltinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// What a call targets: a built-in operator or a named (user) function.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Callee {
    Builtin(BuiltinOp),
    Named(Name),
}

/// Expression kind.
///
/// The constant-folding pass rewrites `Call` sites and consumes `Const` /
/// `Error` / `Vararg`; the remaining kinds are opaque to it and only
/// traversed. All variants are `Copy`; children are referenced by ID.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ExprKind {
    /// Literal constant of the node's declared type.
    Const(ConstValue),
    /// Failed/unresolved expression sentinel. Never a valid replacement.
    Error,
    /// Call of a built-in operator or named function.
    Call { callee: Callee, args: ExprRange },
    /// Variable-length argument packed as a sequence, with its element type.
    Vararg { elems: ExprRange, elem_ty: TypeId },
    /// Spread element inside a vararg. Not a value expression; the
    /// annotation folder skips it.
    Spread(ExprId),
    /// Statement sequence.
    Block(ExprRange),
    /// Conditional. `else_branch` may be `ExprId::INVALID`.
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },
    /// Reference to a local or captured variable.
    GetVar(Name),
}

/// A full expression node: kind plus span and declared type.
///
/// Stored decomposed in [`ExprArena`](crate::ExprArena) parallel arrays;
/// this struct is the push/read unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
    pub ty: TypeId,
}

impl Expr {
    /// Create a new expression node.
    #[inline]
    pub const fn new(kind: ExprKind, span: Span, ty: TypeId) -> Self {
        Expr { kind, span, ty }
    }
}
