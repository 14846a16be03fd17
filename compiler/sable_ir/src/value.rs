//! Compile-time constant values.

use super::Name;

/// A compile-time constant value.
///
/// Floats are stored as `u64` bits so the type can be `Eq` and `Hash`;
/// strings are interned [`Name`]s. Integers of every declared width share
/// the `Int` representation; the declared width lives on the node's type,
/// not on the value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstValue {
    Unit,
    Bool(bool),
    Char(char),
    Int(i64),
    /// f64 bits (use [`ConstValue::as_f64`] to read).
    Float(u64),
    Str(Name),
}

impl ConstValue {
    /// Construct a float value from an `f64`.
    #[inline]
    pub fn float(v: f64) -> Self {
        ConstValue::Float(v.to_bits())
    }

    /// Read a `Float` value back as `f64`.
    ///
    /// Returns `None` for non-float values.
    #[inline]
    pub fn as_f64(self) -> Option<f64> {
        match self {
            ConstValue::Float(bits) => Some(f64::from_bits(bits)),
            _ => None,
        }
    }

    /// Short type name for diagnostics.
    pub fn type_name(self) -> &'static str {
        match self {
            ConstValue::Unit => "unit",
            ConstValue::Bool(_) => "bool",
            ConstValue::Char(_) => "char",
            ConstValue::Int(_) => "int",
            ConstValue::Float(_) => "float",
            ConstValue::Str(_) => "str",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_roundtrip() {
        let v = ConstValue::float(2.5);
        assert_eq!(v.as_f64(), Some(2.5));
        assert_eq!(ConstValue::Int(1).as_f64(), None);
    }

    #[test]
    fn float_bits_are_comparable() {
        assert_eq!(ConstValue::float(0.1), ConstValue::float(0.1));
        assert_ne!(ConstValue::float(0.0), ConstValue::float(-0.0));
    }
}
