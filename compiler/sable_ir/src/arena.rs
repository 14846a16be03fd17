//! Expression arena.
//!
//! Struct-of-arrays layout for cache locality: parallel `kinds`, `spans`,
//! `types` arrays indexed by [`ExprId`], plus flattened child-ID lists
//! indexed by [`ExprRange`].
//!
//! Passes replace a child by writing a new `ExprId` into the parent's slot
//! (a kind field or a list cell). Nodes are append-only and never freed, so
//! a replaced expression's subtree stays valid for anything still holding
//! its ID.

use super::{Expr, ExprId, ExprKind, ExprRange, Span, TypeId};

/// Convert a length to `u32`, panicking with context on overflow.
fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("too many {what}: {len}"))
}

/// Convert a length to `u16`, panicking with context on overflow.
fn to_u16(len: usize, what: &str) -> u16 {
    u16::try_from(len).unwrap_or_else(|_| panic!("{what} too long: {len}"))
}

/// Arena for expressions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExprArena {
    /// Expression kinds (parallel with spans and types).
    kinds: Vec<ExprKind>,
    /// Source spans (parallel with kinds).
    spans: Vec<Span>,
    /// Declared types (parallel with kinds).
    types: Vec<TypeId>,
    /// Flattened expression ID lists (args, vararg elements, stmts).
    lists: Vec<ExprId>,
}

impl ExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node, returning its ID.
    pub fn push(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_u32(self.kinds.len(), "expressions"));
        self.kinds.push(expr.kind);
        self.spans.push(expr.span);
        self.types.push(expr.ty);
        id
    }

    /// Get the expression kind for a node.
    #[inline]
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.kinds[id.index()]
    }

    /// Overwrite the expression kind for a node.
    ///
    /// Used by passes that rewrite child slots held inside a kind.
    #[inline]
    pub fn set_kind(&mut self, id: ExprId, kind: ExprKind) {
        self.kinds[id.index()] = kind;
    }

    /// Get the source span for a node.
    #[inline]
    pub fn span(&self, id: ExprId) -> Span {
        self.spans[id.index()]
    }

    /// Get the declared type for a node.
    #[inline]
    pub fn ty(&self, id: ExprId) -> TypeId {
        self.types[id.index()]
    }

    /// Reconstruct a full `Expr` from the parallel arrays.
    pub fn get(&self, id: ExprId) -> Expr {
        Expr {
            kind: self.kinds[id.index()],
            span: self.spans[id.index()],
            ty: self.types[id.index()],
        }
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Returns `true` if no nodes have been allocated.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Allocate a contiguous child-ID list.
    pub fn push_list(&mut self, ids: &[ExprId]) -> ExprRange {
        if ids.is_empty() {
            return ExprRange::EMPTY;
        }
        let start = to_u32(self.lists.len(), "expression lists");
        self.lists.extend_from_slice(ids);
        ExprRange::new(start, to_u16(ids.len(), "expression list"))
    }

    /// Get the child IDs for a range.
    pub fn list(&self, range: ExprRange) -> &[ExprId] {
        if range.is_empty() {
            return &[];
        }
        let start = range.start as usize;
        &self.lists[start..start + range.len()]
    }

    /// Get one element of a range.
    #[inline]
    pub fn list_item(&self, range: ExprRange, i: usize) -> ExprId {
        debug_assert!(i < range.len());
        self.lists[range.start as usize + i]
    }

    /// Replace one element of a range in place.
    ///
    /// This is the slot-assignment primitive for list children: the range
    /// itself is unchanged, only the cell's target ID moves.
    #[inline]
    pub fn set_list_item(&mut self, range: ExprRange, i: usize, id: ExprId) {
        debug_assert!(i < range.len());
        self.lists[range.start as usize + i] = id;
    }
}
