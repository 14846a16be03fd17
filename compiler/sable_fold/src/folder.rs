//! The folding walker.
//!
//! One [`ConstFolder`] per file: it holds the file's arena mutably plus
//! shared references to the module-wide tables and the two evaluation
//! strategies. Replacement is always slot assignment: a new node is
//! allocated and the parent's child ID is overwritten, so the original
//! subtree survives for anything still holding its ID.

use sable_eval::{CompileTimeChecker, EvalMode, Interpreter};
use sable_ir::{
    to_const, Annotation, AnnotationRegistry, Decl, DeclKind, ExprArena, ExprId, ExprKind,
    ExprRange, File, Property, TypeId, TypeKind, TypePool,
};
use tracing::debug;

/// Outcome of one fold attempt on one expression.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum FoldAttempt {
    /// Not eligible (checker declined, or already a constant).
    Unchanged,
    /// Evaluated; the new `Const` node to write into the slot.
    Folded(ExprId),
    /// Eligible but evaluation failed; the slot keeps the original.
    Failed,
}

/// Fold all declarations in one file.
pub(crate) fn fold_file<C, I>(
    file: &mut File,
    types: &TypePool,
    annotations: &AnnotationRegistry,
    checker: &C,
    interpreter: &I,
) where
    C: CompileTimeChecker,
    I: Interpreter,
{
    let File {
        arena,
        properties,
        decls,
        ..
    } = file;
    let mut folder = ConstFolder {
        arena,
        properties,
        types,
        annotations,
        checker,
        interpreter,
    };
    for decl in decls {
        folder.fold_decl(decl);
    }
}

struct ConstFolder<'a, C, I> {
    arena: &'a mut ExprArena,
    properties: &'a [Property],
    types: &'a TypePool,
    annotations: &'a AnnotationRegistry,
    checker: &'a C,
    interpreter: &'a I,
}

impl<C: CompileTimeChecker, I: Interpreter> ConstFolder<'_, C, I> {
    fn fold_decl(&mut self, decl: &mut Decl) {
        self.fold_annotations(&mut decl.annotations);
        match &mut decl.kind {
            DeclKind::Function { body, .. } => {
                *body = self.fold_expr(*body);
            }
            DeclKind::Class { decls } => {
                for nested in decls {
                    self.fold_decl(nested);
                }
            }
            // Field initializers are folded whole, below, so the checker
            // can see the enclosing declaration.
            DeclKind::Field { .. } => {}
        }
        if let Some(folded) = self.try_fold_field(decl) {
            if let DeclKind::Field { init, .. } = &mut decl.kind {
                *init = folded;
            }
        }
    }

    /// Fold a `const` property's initializer, returning the replacement ID.
    ///
    /// Initializers of non-`const` properties (and raw backing fields) are
    /// left alone, interiors included.
    fn try_fold_field(&mut self, decl: &Decl) -> Option<ExprId> {
        let DeclKind::Field { init, property, .. } = decl.kind else {
            return None;
        };
        if !init.is_valid() || !property.is_valid() {
            return None;
        }
        if !self.properties[property.index()].is_const {
            return None;
        }
        match self.try_fold(init, Some(decl)) {
            FoldAttempt::Folded(id) => Some(id),
            FoldAttempt::Unchanged | FoldAttempt::Failed => None,
        }
    }

    fn fold_annotations(&mut self, annotations: &mut [Annotation]) {
        for annotation in annotations {
            self.fold_annotation(annotation);
        }
    }

    /// Fold one annotation's arguments against its constructor signature.
    ///
    /// Slot-to-parameter mapping is only defined when every slot is filled,
    /// so an annotation with any unfilled slot is skipped whole.
    fn fold_annotation(&mut self, annotation: &mut Annotation) {
        if annotation.args.iter().any(|arg| !arg.is_valid()) {
            return;
        }
        let registry = self.annotations;
        let ctor = registry.ctor(annotation.ctor);
        if annotation.args.len() != ctor.params.len() {
            return;
        }
        for (slot, expected) in annotation.args.iter_mut().zip(ctor.params.iter().copied()) {
            *slot = self.fold_and_coerce(*slot, expected);
        }
    }

    /// Fold an expression if possible, then retarget the result to the
    /// declared slot type. The annotation-argument primitive.
    fn fold_and_coerce(&mut self, id: ExprId, expected: TypeId) -> ExprId {
        let folded = match *self.arena.kind(id) {
            // Varargs are consumed structurally by `coerce`; constants go
            // straight to retargeting.
            ExprKind::Const(_) | ExprKind::Vararg { .. } => id,
            _ => match self.try_fold(id, None) {
                FoldAttempt::Folded(new) => new,
                FoldAttempt::Unchanged | FoldAttempt::Failed => id,
            },
        };
        self.coerce(folded, expected)
    }

    /// Retarget a constant to the expected type.
    ///
    /// Varargs recurse element by element against the vararg's own declared
    /// element type, whatever the slot type is (skipping spreads, which are
    /// not value expressions); nested arrays recurse further. Non-constants,
    /// `Error`-typed slots, and unrepresentable conversions leave the
    /// expression as is.
    fn coerce(&mut self, id: ExprId, expected: TypeId) -> ExprId {
        match *self.arena.kind(id) {
            ExprKind::Vararg { elems, elem_ty } => {
                self.coerce_elements(elems, elem_ty);
                id
            }
            ExprKind::Const(value) => {
                if matches!(self.types.kind(expected), TypeKind::Error) {
                    return id;
                }
                if self.arena.ty(id) == expected {
                    return id;
                }
                let span = self.arena.span(id);
                to_const(self.arena, self.types, value, expected, span).unwrap_or(id)
            }
            _ => id,
        }
    }

    fn coerce_elements(&mut self, elems: ExprRange, elem_expected: TypeId) {
        for i in 0..elems.len() {
            let elem = self.arena.list_item(elems, i);
            if matches!(*self.arena.kind(elem), ExprKind::Spread(_)) {
                continue;
            }
            let folded = self.fold_and_coerce(elem, elem_expected);
            if folded != elem {
                self.arena.set_list_item(elems, i, folded);
            }
        }
    }

    /// Post-order call-site walk: fold children first, then the node
    /// itself if it is a call.
    fn fold_expr(&mut self, id: ExprId) -> ExprId {
        if !id.is_valid() {
            return id;
        }
        self.fold_children(id);
        match *self.arena.kind(id) {
            ExprKind::Call { .. } => match self.try_fold(id, None) {
                FoldAttempt::Folded(new) => new,
                FoldAttempt::Unchanged | FoldAttempt::Failed => id,
            },
            _ => id,
        }
    }

    fn fold_children(&mut self, id: ExprId) {
        match *self.arena.kind(id) {
            ExprKind::Const(_) | ExprKind::Error | ExprKind::GetVar(_) => {}
            ExprKind::Call { args, .. } => self.fold_list(args),
            ExprKind::Vararg { elems, .. } => self.fold_list(elems),
            ExprKind::Block(stmts) => self.fold_list(stmts),
            ExprKind::Spread(inner) => {
                let folded = self.fold_expr(inner);
                if folded != inner {
                    self.arena.set_kind(id, ExprKind::Spread(folded));
                }
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                let new_cond = self.fold_expr(cond);
                let new_then = self.fold_expr(then_branch);
                let new_else = self.fold_expr(else_branch);
                if (new_cond, new_then, new_else) != (cond, then_branch, else_branch) {
                    self.arena.set_kind(
                        id,
                        ExprKind::If {
                            cond: new_cond,
                            then_branch: new_then,
                            else_branch: new_else,
                        },
                    );
                }
            }
        }
    }

    fn fold_list(&mut self, range: ExprRange) {
        for i in 0..range.len() {
            let child = self.arena.list_item(range, i);
            let folded = self.fold_expr(child);
            if folded != child {
                self.arena.set_list_item(range, i, folded);
            }
        }
    }

    /// One fold attempt: check eligibility, interpret, classify the result.
    ///
    /// An `Error` result from the interpreter means the caller keeps the
    /// original expression in its slot.
    fn try_fold(&mut self, id: ExprId, context: Option<&Decl>) -> FoldAttempt {
        if matches!(*self.arena.kind(id), ExprKind::Const(_)) {
            return FoldAttempt::Unchanged;
        }
        if !self
            .checker
            .is_foldable(self.arena, id, EvalMode::BuiltinsOnly, context)
        {
            return FoldAttempt::Unchanged;
        }
        let result = self.interpreter.interpret(self.arena, id);
        if matches!(*self.arena.kind(result), ExprKind::Error) {
            debug!(?id, "evaluation failed, keeping original");
            FoldAttempt::Failed
        } else {
            debug!(?id, ?result, "folded");
            FoldAttempt::Folded(result)
        }
    }
}
