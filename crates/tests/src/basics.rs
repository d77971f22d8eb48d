use quill_ast::builder::*;
use quill_builtins::helpers::types::{BoolType, FloatType, IntType, NullType, StringType};
use quill_runtime::{
    conf::RuntimeConf,
    errors::{ArgumentError, ExecErrorNature},
    exec::run_program,
    values::ValueType,
};

use crate::{
    create_context, run_expect_error, run_expect_specific_value, run_expect_success,
    run_expect_value, run_expect_value_of_type,
};

#[test]
fn empty_program() {
    assert!(run_expect_success(&program([])).is_none());
}

#[test]
fn literals() {
    run_expect_specific_value::<IntType>(&program([expr(int(42))]), 42);
    run_expect_specific_value::<FloatType>(&program([expr(float(1.5))]), 1.5);
    run_expect_specific_value::<BoolType>(&program([expr(bool(true))]), true);
    run_expect_specific_value::<StringType>(&program([expr(string("Bob"))]), "Bob");
    run_expect_specific_value::<NullType>(&program([expr(null())]), ());
}

#[test]
fn last_instruction_decides_the_value() {
    assert!(run_expect_success(&program([expr(int(1)), declare("a", int(2))])).is_none());
}

#[test]
fn variables() {
    run_expect_specific_value::<IntType>(
        &program([declare("a", int(1)), assign("a", int(2)), expr(var("a"))]),
        2,
    );

    let err = run_expect_error(&program([expr(var("missing"))]));
    assert!(matches!(
        &err.nature,
        ExecErrorNature::UndefinedVariable { name } if name == "missing"
    ));

    let err = run_expect_error(&program([assign("missing", int(1))]));
    assert!(matches!(err.nature, ExecErrorNature::UndefinedVariable { .. }));
}

#[test]
fn shadowing() {
    run_expect_specific_value::<StringType>(
        &program([
            declare("a", int(1)),
            declare("a", string("shadowed")),
            expr(var("a")),
        ]),
        "shadowed",
    );
}

#[test]
fn conditions() {
    run_expect_specific_value::<IntType>(
        &program([if_cond(
            bool(true),
            [expr(int(1))],
            Some(vec![expr(int(2))]),
        )]),
        1,
    );

    run_expect_specific_value::<IntType>(
        &program([if_cond(
            not(bool(true)),
            [expr(int(1))],
            Some(vec![expr(int(2))]),
        )]),
        2,
    );

    assert!(run_expect_success(&program([if_cond(bool(false), [expr(int(1))], None)])).is_none());

    let err = run_expect_error(&program([if_cond(int(1), [], None)]));
    assert!(matches!(
        err.nature,
        ExecErrorNature::NotABoolean {
            found: ValueType::Int
        }
    ));

    let err = run_expect_error(&program([expr(not(string("a")))]));
    assert!(matches!(
        err.nature,
        ExecErrorNature::NotABoolean {
            found: ValueType::String
        }
    ));
}

#[test]
fn blocks_are_scoped() {
    run_expect_specific_value::<IntType>(
        &program([
            declare("a", int(1)),
            if_cond(bool(true), [declare("a", int(2))], None),
            expr(var("a")),
        ]),
        1,
    );

    run_expect_specific_value::<IntType>(
        &program([
            declare("a", int(1)),
            if_cond(bool(true), [assign("a", int(2))], None),
            expr(var("a")),
        ]),
        2,
    );

    let err = run_expect_error(&program([
        if_cond(bool(true), [declare("inner", int(1))], None),
        expr(var("inner")),
    ]));

    assert!(matches!(err.nature, ExecErrorNature::UndefinedVariable { .. }));
}

#[test]
fn equality() {
    run_expect_specific_value::<BoolType>(&program([expr(eq(int(1), int(1)))]), true);
    run_expect_specific_value::<BoolType>(&program([expr(eq(int(1), float(1.0)))]), false);
    run_expect_specific_value::<BoolType>(&program([expr(eq(null(), null()))]), true);
    run_expect_specific_value::<BoolType>(
        &program([expr(eq(string("a"), string("a")))]),
        true,
    );
}

#[test]
fn instances_compare_by_identity() {
    run_expect_specific_value::<BoolType>(
        &program([
            class("Person"),
            declare("a", call(var("Person"), [])),
            declare("b", var("a")),
            expr(eq(var("a"), var("b"))),
        ]),
        true,
    );

    run_expect_specific_value::<BoolType>(
        &program([
            class("Person"),
            expr(eq(call(var("Person"), []), call(var("Person"), []))),
        ]),
        false,
    );
}

#[test]
fn classes() {
    let value = run_expect_value(&program([class("Person"), expr(call(var("Person"), []))]));
    assert_eq!(value.value.compute_type(), ValueType::Instance);
    assert_eq!(value.value.to_string(), "Person {}");

    let err = run_expect_error(&program([class("Person"), expr(call(var("Person"), [int(1)]))]));
    assert!(matches!(
        &err.nature,
        ExecErrorNature::Argument(ArgumentError::WrongArity { fn_name, expected: 0, got: 1 }) if fn_name == "Person"
    ));
}

#[test]
fn non_callable_values() {
    let err = run_expect_error(&program([expr(call(int(42), []))]));

    assert!(matches!(
        err.nature,
        ExecErrorNature::NotCallable {
            found: ValueType::Int
        }
    ));
}

#[test]
fn native_functions_can_be_shadowed() {
    run_expect_specific_value::<IntType>(
        &program([declare("hasField", int(1)), expr(var("hasField"))]),
        1,
    );
}

#[test]
fn native_functions_cannot_be_reassigned() {
    let err = run_expect_error(&program([assign("hasField", int(1))]));

    assert!(matches!(
        &err.nature,
        ExecErrorNature::NativeItemAssignment { name } if name == "hasField"
    ));

    assert_eq!(err.infos.len(), 1);
}

#[test]
fn clock() {
    let seconds = run_expect_value_of_type::<FloatType>(&program([expr(call(var("clock"), []))]));
    assert!(seconds > 0.0);

    let err = run_expect_error(&program([expr(call(var("clock"), [int(1)]))]));
    assert!(matches!(
        err.nature,
        ExecErrorNature::Argument(ArgumentError::WrongArity {
            expected: 0,
            got: 1,
            ..
        })
    ));
}

#[test]
fn context_is_reusable() {
    let mut ctx = create_context(RuntimeConf::default());

    run_program(&program([declare("a", int(1))]), &mut ctx).unwrap();

    let value = run_program(&program([expr(var("a"))]), &mut ctx)
        .unwrap()
        .unwrap();

    assert_eq!(value.value.to_string(), "1");
}

#[test]
fn context_survives_failures() {
    let mut ctx = create_context(RuntimeConf::default());

    run_program(
        &program([
            declare("before", int(1)),
            if_cond(bool(true), [declare("inner", int(2)), expr(var("missing"))], None),
            declare("after", int(3)),
        ]),
        &mut ctx,
    )
    .unwrap_err();

    assert!(ctx.get_visible_var("before").is_some());
    assert!(ctx.get_visible_var("inner").is_none());
    assert!(ctx.get_visible_var("after").is_none());
    assert!(ctx.call_stack().history().is_empty());

    let value = run_program(&program([expr(var("before"))]), &mut ctx)
        .unwrap()
        .unwrap();

    assert_eq!(value.value.to_string(), "1");
}

#[test]
fn native_functions_are_values() {
    let value = run_expect_value(&program([expr(var("hasField"))]));

    assert_eq!(value.value.compute_type(), ValueType::Function);
    assert_eq!(
        value.value.to_string(),
        "fn hasField(instance: instance, field: string) -> bool"
    );
}
