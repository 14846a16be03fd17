//! Built-in operator application on constant values.
//!
//! Integer arithmetic is checked: overflow and division by zero are
//! evaluation failures, never panics. Float arithmetic follows IEEE 754 on
//! the stored bits (float division by zero yields an infinity, not an
//! error). Strings support equality only; ordering would need interner
//! access the evaluator does not have.

use sable_ir::{BuiltinOp, ConstValue, Span};

use super::errors::{
    binary_type_mismatch, division_by_zero, integer_overflow, invalid_operand, shift_out_of_range,
    EvalError,
};

/// Apply a binary built-in to two constant values.
pub(crate) fn apply_binary(
    op: BuiltinOp,
    left: ConstValue,
    right: ConstValue,
    span: Span,
) -> Result<ConstValue, EvalError> {
    use BuiltinOp as Op;
    use ConstValue as V;

    match (op, left, right) {
        // Integer arithmetic (checked).
        (Op::Add, V::Int(a), V::Int(b)) => checked(a.checked_add(b), op, span),
        (Op::Sub, V::Int(a), V::Int(b)) => checked(a.checked_sub(b), op, span),
        (Op::Mul, V::Int(a), V::Int(b)) => checked(a.checked_mul(b), op, span),
        (Op::Div | Op::Rem, V::Int(_), V::Int(0)) => Err(division_by_zero(span)),
        (Op::Div, V::Int(a), V::Int(b)) => checked(a.checked_div(b), op, span),
        (Op::Rem, V::Int(a), V::Int(b)) => checked(a.checked_rem(b), op, span),

        // Float arithmetic (IEEE semantics on stored bits).
        (Op::Add, V::Float(a), V::Float(b)) => Ok(float_op(a, b, |x, y| x + y)),
        (Op::Sub, V::Float(a), V::Float(b)) => Ok(float_op(a, b, |x, y| x - y)),
        (Op::Mul, V::Float(a), V::Float(b)) => Ok(float_op(a, b, |x, y| x * y)),
        (Op::Div, V::Float(a), V::Float(b)) => Ok(float_op(a, b, |x, y| x / y)),
        (Op::Rem, V::Float(a), V::Float(b)) => Ok(float_op(a, b, f64::rem_euclid)),

        // Integer comparisons.
        (Op::Eq, V::Int(a), V::Int(b)) => Ok(V::Bool(a == b)),
        (Op::NotEq, V::Int(a), V::Int(b)) => Ok(V::Bool(a != b)),
        (Op::Lt, V::Int(a), V::Int(b)) => Ok(V::Bool(a < b)),
        (Op::LtEq, V::Int(a), V::Int(b)) => Ok(V::Bool(a <= b)),
        (Op::Gt, V::Int(a), V::Int(b)) => Ok(V::Bool(a > b)),
        (Op::GtEq, V::Int(a), V::Int(b)) => Ok(V::Bool(a >= b)),

        // Float comparisons (on the numeric values, not the bits).
        (Op::Eq, V::Float(a), V::Float(b)) => Ok(float_cmp(a, b, |o| o == std::cmp::Ordering::Equal)),
        (Op::NotEq, V::Float(a), V::Float(b)) => Ok(float_cmp(a, b, |o| o != std::cmp::Ordering::Equal)),
        (Op::Lt, V::Float(a), V::Float(b)) => Ok(float_cmp(a, b, std::cmp::Ordering::is_lt)),
        (Op::LtEq, V::Float(a), V::Float(b)) => Ok(float_cmp(a, b, std::cmp::Ordering::is_le)),
        (Op::Gt, V::Float(a), V::Float(b)) => Ok(float_cmp(a, b, std::cmp::Ordering::is_gt)),
        (Op::GtEq, V::Float(a), V::Float(b)) => Ok(float_cmp(a, b, std::cmp::Ordering::is_ge)),

        // Bool equality and logic.
        (Op::Eq, V::Bool(a), V::Bool(b)) => Ok(V::Bool(a == b)),
        (Op::NotEq, V::Bool(a), V::Bool(b)) => Ok(V::Bool(a != b)),
        (Op::And, V::Bool(a), V::Bool(b)) => Ok(V::Bool(a && b)),
        (Op::Or, V::Bool(a), V::Bool(b)) => Ok(V::Bool(a || b)),

        // Char and string equality (interned names compare O(1)).
        (Op::Eq, V::Char(a), V::Char(b)) => Ok(V::Bool(a == b)),
        (Op::NotEq, V::Char(a), V::Char(b)) => Ok(V::Bool(a != b)),
        (Op::Eq, V::Str(a), V::Str(b)) => Ok(V::Bool(a == b)),
        (Op::NotEq, V::Str(a), V::Str(b)) => Ok(V::Bool(a != b)),

        // Char comparisons.
        (Op::Lt, V::Char(a), V::Char(b)) => Ok(V::Bool(a < b)),
        (Op::LtEq, V::Char(a), V::Char(b)) => Ok(V::Bool(a <= b)),
        (Op::Gt, V::Char(a), V::Char(b)) => Ok(V::Bool(a > b)),
        (Op::GtEq, V::Char(a), V::Char(b)) => Ok(V::Bool(a >= b)),

        // Bitwise (integers).
        (Op::BitAnd, V::Int(a), V::Int(b)) => Ok(V::Int(a & b)),
        (Op::BitOr, V::Int(a), V::Int(b)) => Ok(V::Int(a | b)),
        (Op::BitXor, V::Int(a), V::Int(b)) => Ok(V::Int(a ^ b)),
        (Op::Shl, V::Int(a), V::Int(b)) => {
            let shift = shift_amount(b, span)?;
            let result = a.wrapping_shl(shift);
            // Round-trip check: shifting back must recover the original.
            if result.wrapping_shr(shift) == a {
                Ok(V::Int(result))
            } else {
                Err(integer_overflow(op, span))
            }
        }
        (Op::Shr, V::Int(a), V::Int(b)) => Ok(V::Int(a >> shift_amount(b, span)?)),

        // Unmatched type combinations.
        (_, l, r) => Err(binary_type_mismatch(op, l.type_name(), r.type_name(), span)),
    }
}

/// Apply a unary built-in to a constant value.
pub(crate) fn apply_unary(
    op: BuiltinOp,
    operand: ConstValue,
    span: Span,
) -> Result<ConstValue, EvalError> {
    use BuiltinOp as Op;
    use ConstValue as V;

    match (op, operand) {
        (Op::Neg, V::Int(v)) => v
            .checked_neg()
            .map(V::Int)
            .ok_or_else(|| integer_overflow(op, span)),
        (Op::Neg, V::Float(bits)) => Ok(V::Float((-f64::from_bits(bits)).to_bits())),
        (Op::Not, V::Bool(v)) => Ok(V::Bool(!v)),
        (Op::BitNot, V::Int(v)) => Ok(V::Int(!v)),
        (_, v) => Err(invalid_operand(op, v.type_name(), span)),
    }
}

fn checked(result: Option<i64>, op: BuiltinOp, span: Span) -> Result<ConstValue, EvalError> {
    result
        .map(ConstValue::Int)
        .ok_or_else(|| integer_overflow(op, span))
}

fn float_op(a: u64, b: u64, f: impl FnOnce(f64, f64) -> f64) -> ConstValue {
    ConstValue::float(f(f64::from_bits(a), f64::from_bits(b)))
}

fn float_cmp(a: u64, b: u64, accept: impl FnOnce(std::cmp::Ordering) -> bool) -> ConstValue {
    // NaN compares unequal to everything, including itself.
    match f64::from_bits(a).partial_cmp(&f64::from_bits(b)) {
        Some(ordering) => ConstValue::Bool(accept(ordering)),
        None => ConstValue::Bool(false),
    }
}

fn shift_amount(amount: i64, span: Span) -> Result<u32, EvalError> {
    u32::try_from(amount)
        .ok()
        .filter(|&s| s < 64)
        .ok_or_else(|| shift_out_of_range(amount, span))
}
