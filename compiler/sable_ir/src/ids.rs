//! ID and range newtypes for the expression arena.

use std::fmt;

/// Index into an [`ExprArena`](crate::ExprArena).
///
/// `ExprId::INVALID` is the "no expression" sentinel, used for optional
/// child slots (a field without an initializer, an unfilled annotation
/// argument, a missing else branch).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    /// Sentinel value indicating "no expression".
    pub const INVALID: ExprId = ExprId(u32::MAX);

    /// Create a new `ExprId` from a raw index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw `u32` value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns `true` if this is a valid (non-sentinel) ID.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::INVALID {
            write!(f, "ExprId::INVALID")
        } else {
            write!(f, "ExprId({})", self.0)
        }
    }
}

impl Default for ExprId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// A contiguous range of expression IDs in an [`ExprArena`](crate::ExprArena).
///
/// Used for expression lists: call arguments, vararg elements, block
/// statements. Indexes into the arena's flattened list storage.
///
/// Layout: `start: u32, len: u16` = 8 bytes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct ExprRange {
    pub start: u32,
    pub len: u16,
}

impl ExprRange {
    /// Empty range constant.
    pub const EMPTY: Self = Self { start: 0, len: 0 };

    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, len: u16) -> Self {
        Self { start, len }
    }

    /// Number of elements in the range.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns `true` if the range contains no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Debug for ExprRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprRange({}+{})", self.start, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::static_assert_size!(ExprId, 4);
    crate::static_assert_size!(ExprRange, 8);

    #[test]
    fn invalid_is_default_and_not_valid() {
        assert_eq!(ExprId::default(), ExprId::INVALID);
        assert!(!ExprId::INVALID.is_valid());
        assert!(ExprId::new(0).is_valid());
    }
}
