//! Constant construction against a declared type.
//!
//! The interpreter produces values in its native representation (all
//! integers as `i64`, all floats as `f64` bits). When such a value lands in
//! a slot with an exact declared type (an annotation constructor parameter,
//! say), it must be re-expressed at that type. `to_const` is that facility.

use super::{ConstValue, Expr, ExprArena, ExprId, ExprKind, Span, TypeId, TypeKind, TypePool};

/// Build a `Const` node for `value` at the declared `target` type,
/// carrying `span` (the span of the expression being replaced).
///
/// Returns `None` when the value cannot represent the target type; callers
/// then keep the original expression.
pub fn to_const(
    arena: &mut ExprArena,
    types: &TypePool,
    value: ConstValue,
    target: TypeId,
    span: Span,
) -> Option<ExprId> {
    let adapted = adapt(value, types.kind(target))?;
    Some(arena.push(Expr::new(ExprKind::Const(adapted), span, target)))
}

/// Adapt a raw value to a target type's representation.
///
/// Integer narrowing is two's-complement truncation; Int↔Float conversion
/// saturates the way `as` casts do.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "truncating/saturating conversion is the retargeting contract"
)]
fn adapt(value: ConstValue, target: TypeKind) -> Option<ConstValue> {
    match (value, target) {
        (v @ ConstValue::Unit, TypeKind::Unit)
        | (v @ ConstValue::Bool(_), TypeKind::Bool)
        | (v @ ConstValue::Char(_), TypeKind::Char)
        | (v @ ConstValue::Str(_), TypeKind::Str)
        | (v @ ConstValue::Float(_), TypeKind::Float)
        | (v @ ConstValue::Int(_), TypeKind::Long) => Some(v),

        (ConstValue::Int(v), TypeKind::Byte) => Some(ConstValue::Int(i64::from(v as i8))),
        (ConstValue::Int(v), TypeKind::Short) => Some(ConstValue::Int(i64::from(v as i16))),
        (ConstValue::Int(v), TypeKind::Int) => Some(ConstValue::Int(i64::from(v as i32))),
        (ConstValue::Int(v), TypeKind::Float) => Some(ConstValue::float(v as f64)),

        (ConstValue::Float(bits), TypeKind::Byte) => {
            Some(ConstValue::Int(i64::from(f64::from_bits(bits) as i8)))
        }
        (ConstValue::Float(bits), TypeKind::Short) => {
            Some(ConstValue::Int(i64::from(f64::from_bits(bits) as i16)))
        }
        (ConstValue::Float(bits), TypeKind::Int) => {
            Some(ConstValue::Int(i64::from(f64::from_bits(bits) as i32)))
        }
        (ConstValue::Float(bits), TypeKind::Long) => {
            Some(ConstValue::Int(f64::from_bits(bits) as i64))
        }

        // Bool/Char/Str/Unit never cross-convert; Named/Array/Error types
        // have no scalar constant representation.
        _ => None,
    }
}
