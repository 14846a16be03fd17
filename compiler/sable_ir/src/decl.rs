//! Declarations, annotations, files, and modules.
//!
//! A [`Module`] is the unit the mid-end passes operate on: an ordered
//! sequence of [`File`]s plus the module-wide read-only tables (type pool,
//! annotation constructor registry). Each file owns its expression arena,
//! so files can be processed independently.

use std::fmt;

use smallvec::SmallVec;

use super::{ExprArena, ExprId, Name, Span, TypeId};

/// Index into a file's property table.
///
/// `PropertyId::INVALID` means "no corresponding property" (a raw backing
/// field).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct PropertyId(u32);

impl PropertyId {
    /// Sentinel value indicating "no corresponding property".
    pub const INVALID: PropertyId = PropertyId(u32::MAX);

    /// Create a new `PropertyId` from a raw index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw index into the property table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns `true` if this is a valid (non-sentinel) ID.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::INVALID {
            write!(f, "PropertyId::INVALID")
        } else {
            write!(f, "PropertyId({})", self.0)
        }
    }
}

impl Default for PropertyId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// A property a field may back.
///
/// The front end resolves `const` on the property, not on the backing
/// field; the field-initializer folder reads the flag from here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Property {
    pub name: Name,
    pub is_const: bool,
}

/// Index into the module's annotation constructor registry.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct AnnotationCtorId(u32);

impl AnnotationCtorId {
    /// Create a new `AnnotationCtorId` from a raw index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw index into the registry.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for AnnotationCtorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnnotationCtorId({})", self.0)
    }
}

/// An annotation class constructor signature: slot index → declared
/// parameter type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnotationCtor {
    pub name: Name,
    pub params: SmallVec<[TypeId; 4]>,
}

/// Module-wide registry of annotation constructor signatures.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnnotationRegistry {
    ctors: Vec<AnnotationCtor>,
}

impl AnnotationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor signature, returning its ID.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` constructors are registered.
    pub fn push(&mut self, ctor: AnnotationCtor) -> AnnotationCtorId {
        let id = AnnotationCtorId::new(
            u32::try_from(self.ctors.len())
                .unwrap_or_else(|_| panic!("too many annotation constructors: {}", self.ctors.len())),
        );
        self.ctors.push(ctor);
        id
    }

    /// Get a constructor signature.
    #[inline]
    pub fn ctor(&self, id: AnnotationCtorId) -> &AnnotationCtor {
        &self.ctors[id.index()]
    }

    /// Number of registered constructors.
    pub fn len(&self) -> usize {
        self.ctors.len()
    }

    /// Returns `true` if no constructors are registered.
    pub fn is_empty(&self) -> bool {
        self.ctors.is_empty()
    }
}

/// An annotation attached to a declaration.
///
/// `args` has one slot per constructor parameter, in slot order;
/// `ExprId::INVALID` marks an unfilled slot. Slot-to-parameter mapping is
/// only defined when every slot is filled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Annotation {
    pub name: Name,
    pub span: Span,
    pub ctor: AnnotationCtorId,
    pub args: Vec<ExprId>,
}

/// Declaration kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeclKind {
    /// A field. `init` is `ExprId::INVALID` when there is no initializer;
    /// `property` is the corresponding property, if any.
    Field {
        ty: TypeId,
        init: ExprId,
        property: PropertyId,
    },
    /// A function with an executable body.
    Function { ret: TypeId, body: ExprId },
    /// A class containing nested declarations.
    Class { decls: Vec<Decl> },
}

/// A named declaration, possibly annotated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decl {
    pub name: Name,
    pub span: Span,
    pub annotations: Vec<Annotation>,
    pub kind: DeclKind,
}

/// A single source file: its expression arena, property table, and
/// top-level declarations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct File {
    pub name: Name,
    pub arena: ExprArena,
    pub properties: Vec<Property>,
    pub decls: Vec<Decl>,
}

impl File {
    /// Create an empty file.
    pub fn new(name: Name) -> Self {
        File {
            name,
            arena: ExprArena::new(),
            properties: Vec::new(),
            decls: Vec::new(),
        }
    }
}

/// A resolved module: the unit of mid-end transformation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Module {
    pub files: Vec<File>,
    pub types: crate::TypePool,
    pub annotations: AnnotationRegistry,
}

impl Module {
    /// Create an empty module with a fresh type pool.
    pub fn new() -> Self {
        Module {
            files: Vec::new(),
            types: crate::TypePool::new(),
            annotations: AnnotationRegistry::new(),
        }
    }
}

impl Default for Module {
    fn default() -> Self {
        Self::new()
    }
}
