//! Interned types and the type pool.
//!
//! Types are interned: structural duplicates share one [`TypeId`], so type
//! equality is a u32 compare. Primitives are pre-interned at fixed indices.

use std::fmt;

use rustc_hash::FxHashMap;

use super::Name;

/// Interned type identifier.
///
/// # Pre-interned Types
/// Primitive types are pre-interned at fixed indices: UNIT, BOOL, CHAR,
/// BYTE, SHORT, INT, LONG, FLOAT, STR, and the ERROR sentinel.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    pub const UNIT: TypeId = TypeId(0);
    pub const BOOL: TypeId = TypeId(1);
    pub const CHAR: TypeId = TypeId(2);
    pub const BYTE: TypeId = TypeId(3);
    pub const SHORT: TypeId = TypeId(4);
    pub const INT: TypeId = TypeId(5);
    pub const LONG: TypeId = TypeId(6);
    pub const FLOAT: TypeId = TypeId(7);
    pub const STR: TypeId = TypeId(8);
    /// Unresolved-type sentinel. Constants are never retargeted against it.
    pub const ERROR: TypeId = TypeId(9);

    /// First ID for dynamically interned compound types.
    pub const FIRST_COMPOUND: u32 = 10;

    /// Create a new `TypeId` from a raw index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        TypeId(index)
    }

    /// Get the raw index into the pool.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw `u32` value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TypeId::UNIT => write!(f, "TypeId::UNIT"),
            TypeId::BOOL => write!(f, "TypeId::BOOL"),
            TypeId::CHAR => write!(f, "TypeId::CHAR"),
            TypeId::BYTE => write!(f, "TypeId::BYTE"),
            TypeId::SHORT => write!(f, "TypeId::SHORT"),
            TypeId::INT => write!(f, "TypeId::INT"),
            TypeId::LONG => write!(f, "TypeId::LONG"),
            TypeId::FLOAT => write!(f, "TypeId::FLOAT"),
            TypeId::STR => write!(f, "TypeId::STR"),
            TypeId::ERROR => write!(f, "TypeId::ERROR"),
            TypeId(n) => write!(f, "TypeId({n})"),
        }
    }
}

/// Structural form of a type.
///
/// `Array` carries exactly one type argument (the element type). `Named` is
/// opaque to the mid-end passes. `Error` marks an unresolved type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeKind {
    Unit,
    Bool,
    Char,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Str,
    /// Array with its element type.
    Array(TypeId),
    /// Nominal type, opaque to the mid-end.
    Named(Name),
    /// Unresolved-type sentinel.
    Error,
}

/// Interning pool of types, indexed by [`TypeId`].
///
/// Primitives are pre-interned by [`TypePool::new`]; compound types are
/// deduplicated on insert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypePool {
    kinds: Vec<TypeKind>,
    dedup: FxHashMap<TypeKind, TypeId>,
}

impl TypePool {
    /// Create a pool with all primitives pre-interned at their fixed IDs.
    pub fn new() -> Self {
        let primitives = [
            TypeKind::Unit,
            TypeKind::Bool,
            TypeKind::Char,
            TypeKind::Byte,
            TypeKind::Short,
            TypeKind::Int,
            TypeKind::Long,
            TypeKind::Float,
            TypeKind::Str,
            TypeKind::Error,
        ];
        let mut dedup = FxHashMap::default();
        for (i, kind) in primitives.iter().enumerate() {
            #[expect(clippy::cast_possible_truncation, reason = "ten primitives")]
            dedup.insert(*kind, TypeId::new(i as u32));
        }
        TypePool {
            kinds: primitives.to_vec(),
            dedup,
        }
    }

    /// Intern a type. Returns the existing ID for structural duplicates.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` types are interned.
    pub fn intern(&mut self, kind: TypeKind) -> TypeId {
        if let Some(&id) = self.dedup.get(&kind) {
            return id;
        }
        let id = TypeId::new(
            u32::try_from(self.kinds.len())
                .unwrap_or_else(|_| panic!("type pool overflow: {} types", self.kinds.len())),
        );
        self.dedup.insert(kind, id);
        self.kinds.push(kind);
        id
    }

    /// Intern an array type over the given element type.
    pub fn array_of(&mut self, elem: TypeId) -> TypeId {
        self.intern(TypeKind::Array(elem))
    }

    /// Get the structural form of a type.
    #[inline]
    pub fn kind(&self, id: TypeId) -> TypeKind {
        self.kinds[id.index()]
    }

    /// Element type, if `id` is an array type.
    pub fn elem(&self, id: TypeId) -> Option<TypeId> {
        match self.kind(id) {
            TypeKind::Array(elem) => Some(elem),
            _ => None,
        }
    }

    /// Number of interned types.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Always `false`: primitives are pre-interned.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl Default for TypePool {
    fn default() -> Self {
        Self::new()
    }
}
