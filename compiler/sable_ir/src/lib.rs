//! Sable IR - Intermediate Representation Types
//!
//! This crate contains the core data structures the Sable mid-end operates on:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Interned types and the type pool
//! - Expression nodes with arena allocation
//! - Declarations, annotations, files, and modules
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → Name(u32), Types → TypeId(u32)
//! - **Flatten Everything**: No `Box<Expr>`, use ExprId(u32) indices
//! - **Replace In Place**: passes rewrite child slots; nodes are never freed
//!
//! Types that contain floats store them as u64 bits for Hash compatibility.
//! Types that contain strings use interned Name for O(1) equality.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
mod convert;
mod decl;
mod expr;
mod ids;
mod interner;
mod name;
mod span;
mod ty;
mod value;

pub use arena::ExprArena;
pub use convert::to_const;
pub use decl::{
    Annotation, AnnotationCtor, AnnotationCtorId, AnnotationRegistry, Decl, DeclKind, File, Module,
    Property, PropertyId,
};
pub use expr::{BuiltinOp, Callee, Expr, ExprKind};
pub use ids::{ExprId, ExprRange};
pub use interner::StringInterner;
pub use name::Name;
pub use span::Span;
pub use ty::{TypeId, TypeKind, TypePool};
pub use value::ConstValue;
