//! Evaluation errors.
//!
//! Structured kinds with factory functions, so call sites read as
//! `Err(division_by_zero(span))` and tests can match on the kind instead
//! of parsing message strings. These errors never become user diagnostics
//! directly; a failed compile-time evaluation simply leaves the original
//! expression in place.

use std::fmt;

use sable_ir::{BuiltinOp, Span};

/// Typed error category for a failed compile-time evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Arithmetic
    DivisionByZero,
    IntegerOverflow { op: BuiltinOp },
    ShiftOutOfRange { amount: i64 },

    // Operands
    InvalidOperand { op: BuiltinOp, operand: &'static str },
    BinaryTypeMismatch {
        op: BuiltinOp,
        left: &'static str,
        right: &'static str,
    },
    ArityMismatch { op: BuiltinOp, got: usize },

    // Structure
    NotConstEvaluable { what: &'static str },
    TooDeep { limit: usize },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalErrorKind::DivisionByZero => write!(f, "division by zero"),
            EvalErrorKind::IntegerOverflow { op } => {
                write!(f, "integer overflow in `{op}`")
            }
            EvalErrorKind::ShiftOutOfRange { amount } => {
                write!(f, "shift amount {amount} out of range")
            }
            EvalErrorKind::InvalidOperand { op, operand } => {
                write!(f, "`{op}` cannot be applied to {operand}")
            }
            EvalErrorKind::BinaryTypeMismatch { op, left, right } => {
                write!(f, "`{op}` cannot be applied to {left} and {right}")
            }
            EvalErrorKind::ArityMismatch { op, got } => {
                write!(f, "`{op}` expects {} arguments, got {got}", op.arity())
            }
            EvalErrorKind::NotConstEvaluable { what } => {
                write!(f, "{what} is not const-evaluable")
            }
            EvalErrorKind::TooDeep { limit } => {
                write!(f, "expression nesting exceeds evaluation limit {limit}")
            }
        }
    }
}

/// Evaluation error: a kind plus the span of the failing expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Span,
}

impl EvalError {
    /// Create an error from a kind and span.
    pub fn new(kind: EvalErrorKind, span: Span) -> Self {
        EvalError { kind, span }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for EvalError {}

// Factory functions

pub fn division_by_zero(span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::DivisionByZero, span)
}

pub fn integer_overflow(op: BuiltinOp, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::IntegerOverflow { op }, span)
}

pub fn shift_out_of_range(amount: i64, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::ShiftOutOfRange { amount }, span)
}

pub fn invalid_operand(op: BuiltinOp, operand: &'static str, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidOperand { op, operand }, span)
}

pub fn binary_type_mismatch(
    op: BuiltinOp,
    left: &'static str,
    right: &'static str,
    span: Span,
) -> EvalError {
    EvalError::new(EvalErrorKind::BinaryTypeMismatch { op, left, right }, span)
}

pub fn arity_mismatch(op: BuiltinOp, got: usize, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::ArityMismatch { op, got }, span)
}

pub fn not_const_evaluable(what: &'static str, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::NotConstEvaluable { what }, span)
}

pub fn too_deep(limit: usize, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::TooDeep { limit }, span)
}
