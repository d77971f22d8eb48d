use std::fmt::Debug;

use quill_ast::ast::Program;
use quill_builtins::{build_native_lib_content, helpers::types::TypedValueParser};
use quill_runtime::{
    conf::RuntimeConf,
    context::Context,
    errors::ExecError,
    exec::run_program,
    values::LocatedValue,
};

#[cfg(test)]
mod basics;



/// Create a fresh context, with the native library
pub fn create_context(conf: RuntimeConf) -> Context {
    Context::new(conf, build_native_lib_content())
}

#[allow(clippy::result_large_err)]
pub fn run(program: &Program) -> Result<Option<LocatedValue>, (ExecError, Context)> {
    run_with_conf(program, RuntimeConf::default())
}

#[allow(clippy::result_large_err)]
pub fn run_with_conf(
    program: &Program,
    conf: RuntimeConf,
) -> Result<Option<LocatedValue>, (ExecError, Context)> {
    let mut ctx = create_context(conf);

    run_program(program, &mut ctx).map_err(|err| (err, ctx))
}

pub fn run_expect_success(program: &Program) -> Option<LocatedValue> {
    match run(program) {
        Ok(value) => value,

        Err((err, _)) => {
            quill_reports::print_error(&err, None);
            panic!("Program failed")
        }
    }
}

pub fn run_expect_value(program: &Program) -> LocatedValue {
    run_expect_success(program)
        .expect("Expected the program to return a value, but it returned nothing")
}

pub fn run_expect_value_of_type<T: TypedValueParser>(program: &Program) -> T::Parsed {
    let value = run_expect_value(program).value;
    let value_type = value.compute_type();
    let display = value.to_string();

    T::parse(value).unwrap_or_else(|| {
        panic!(
            "Program did not return the expected value type\n\n=> expected : {}\n=> got      : {value_type}\n=> value    : {display}",
            T::value_type(),
        )
    })
}

pub fn run_expect_specific_value<T: TypedValueParser>(
    program: &Program,
    expect: impl PartialEq<T::Parsed> + Debug,
) where
    T::Parsed: Debug,
{
    let got = run_expect_value_of_type::<T>(program);

    if expect != got {
        panic!(
            "Program returned incorrect value.\n\n=> expected : {expect:?}\n=> got      : {got:?}"
        );
    }
}

pub fn run_expect_error(program: &Program) -> ExecError {
    run_expect_error_with_conf(program, RuntimeConf::default())
}

pub fn run_expect_error_with_conf(program: &Program, conf: RuntimeConf) -> ExecError {
    match run_with_conf(program, conf) {
        Ok(value) => panic!(
            "Program terminated successfully, but expected it to fail. Got: {}",
            value.map_or_else(|| "<no value>".to_owned(), |value| value.value.to_string())
        ),

        Err((err, _)) => err,
    }
}
