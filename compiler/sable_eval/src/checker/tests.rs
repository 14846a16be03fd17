use pretty_assertions::assert_eq;
use sable_ir::{
    BuiltinOp, Callee, ConstValue, Expr, ExprArena, ExprId, ExprKind, ExprRange, Name, Span, TypeId,
};

use super::{BuiltinChecker, CompileTimeChecker};
use crate::EvalMode;

fn int(arena: &mut ExprArena, v: i64) -> ExprId {
    arena.push(Expr::new(
        ExprKind::Const(ConstValue::Int(v)),
        Span::DUMMY,
        TypeId::INT,
    ))
}

fn call(arena: &mut ExprArena, callee: Callee, args: &[ExprId]) -> ExprId {
    let args = arena.push_list(args);
    arena.push(Expr::new(
        ExprKind::Call { callee, args },
        Span::DUMMY,
        TypeId::INT,
    ))
}

fn foldable(arena: &ExprArena, id: ExprId, mode: EvalMode) -> bool {
    BuiltinChecker.is_foldable(arena, id, mode, None)
}

#[test]
fn constants_are_foldable() {
    let mut arena = ExprArena::new();
    let c = int(&mut arena, 7);
    assert_eq!(foldable(&arena, c, EvalMode::BuiltinsOnly), true);
}

#[test]
fn builtin_call_with_const_args_is_foldable() {
    let mut arena = ExprArena::new();
    let a = int(&mut arena, 1);
    let b = int(&mut arena, 2);
    let sum = call(&mut arena, Callee::Builtin(BuiltinOp::Add), &[a, b]);
    assert_eq!(foldable(&arena, sum, EvalMode::BuiltinsOnly), true);
}

#[test]
fn nested_builtin_calls_are_foldable() {
    let mut arena = ExprArena::new();
    let a = int(&mut arena, 1);
    let b = int(&mut arena, 2);
    let inner = call(&mut arena, Callee::Builtin(BuiltinOp::Mul), &[a, b]);
    let c = int(&mut arena, 3);
    let outer = call(&mut arena, Callee::Builtin(BuiltinOp::Add), &[inner, c]);
    assert_eq!(foldable(&arena, outer, EvalMode::BuiltinsOnly), true);
}

#[test]
fn named_call_needs_full_mode() {
    let mut arena = ExprArena::new();
    let a = int(&mut arena, 1);
    let id = call(&mut arena, Callee::Named(Name::from_raw(1)), &[a]);
    assert_eq!(foldable(&arena, id, EvalMode::BuiltinsOnly), false);
    assert_eq!(foldable(&arena, id, EvalMode::Full), true);
}

#[test]
fn call_with_non_const_arg_is_not_foldable() {
    let mut arena = ExprArena::new();
    let a = int(&mut arena, 1);
    let var = arena.push(Expr::new(
        ExprKind::GetVar(Name::from_raw(2)),
        Span::DUMMY,
        TypeId::INT,
    ));
    let id = call(&mut arena, Callee::Builtin(BuiltinOp::Add), &[a, var]);
    assert_eq!(foldable(&arena, id, EvalMode::BuiltinsOnly), false);
}

#[test]
fn vararg_is_foldable_when_every_element_is() {
    let mut arena = ExprArena::new();
    let a = int(&mut arena, 1);
    let b = int(&mut arena, 2);
    let elems = arena.push_list(&[a, b]);
    let id = arena.push(Expr::new(
        ExprKind::Vararg {
            elems,
            elem_ty: TypeId::INT,
        },
        Span::DUMMY,
        TypeId::INT,
    ));
    assert_eq!(foldable(&arena, id, EvalMode::BuiltinsOnly), true);
}

#[test]
fn vararg_with_spread_is_not_foldable() {
    let mut arena = ExprArena::new();
    let a = int(&mut arena, 1);
    let var = arena.push(Expr::new(
        ExprKind::GetVar(Name::from_raw(3)),
        Span::DUMMY,
        TypeId::INT,
    ));
    let spread = arena.push(Expr::new(ExprKind::Spread(var), Span::DUMMY, TypeId::INT));
    let elems = arena.push_list(&[a, spread]);
    let id = arena.push(Expr::new(
        ExprKind::Vararg {
            elems,
            elem_ty: TypeId::INT,
        },
        Span::DUMMY,
        TypeId::INT,
    ));
    assert_eq!(foldable(&arena, id, EvalMode::BuiltinsOnly), false);
}

#[test]
fn runtime_kinds_are_not_foldable() {
    let mut arena = ExprArena::new();
    let err = arena.push(Expr::new(ExprKind::Error, Span::DUMMY, TypeId::ERROR));
    let block = arena.push(Expr::new(
        ExprKind::Block(ExprRange::EMPTY),
        Span::DUMMY,
        TypeId::UNIT,
    ));
    assert_eq!(foldable(&arena, err, EvalMode::Full), false);
    assert_eq!(foldable(&arena, block, EvalMode::Full), false);
    assert_eq!(foldable(&arena, ExprId::INVALID, EvalMode::Full), false);
}
