use quill_ast::{CodeRange, RuntimeCodeRange, Span, ast::Expr};
use tracing::trace;

use crate::{
    context::{CallStackEntry, Context},
    errors::{ArgumentError, ExecErrorNature, ExecResult},
    expr::eval_expr,
    gc::{GcCell, GcReadOnlyCell},
    values::{
        ClassValue, InstanceValue, LocatedValue, NativeFnCallData, RuntimeFnValue, RuntimeValue,
    },
};

/// Evaluate a call expression
///
/// Arguments are evaluated from left to right, after the callee
pub fn eval_fn_call(
    call_at: CodeRange,
    callee: &Span<Expr>,
    args: &Span<Vec<Span<Expr>>>,
    ctx: &mut Context,
) -> ExecResult<RuntimeValue> {
    let callee_value = eval_expr(callee, ctx)?;

    let args = args
        .data
        .iter()
        .map(|arg| eval_expr(arg, ctx).map(|value| LocatedValue::new(arg.at, value)))
        .collect::<ExecResult<Vec<_>>>()?;

    match callee_value {
        RuntimeValue::Function(func) => {
            call_fn_value(RuntimeCodeRange::Parsed(call_at), &func, args, ctx)
        }

        RuntimeValue::Class(class) => instantiate_class(call_at, class, args, ctx),

        RuntimeValue::Null
        | RuntimeValue::Bool(_)
        | RuntimeValue::Int(_)
        | RuntimeValue::Float(_)
        | RuntimeValue::String(_)
        | RuntimeValue::Instance(_) => Err(ctx.error(
            callee.at,
            ExecErrorNature::NotCallable {
                found: callee_value.compute_type(),
            },
        )),
    }
}

/// Call a native function with already-evaluated arguments
pub fn call_fn_value(
    call_at: RuntimeCodeRange,
    func: &GcReadOnlyCell<RuntimeFnValue>,
    args: Vec<LocatedValue>,
    ctx: &mut Context,
) -> ExecResult<RuntimeValue> {
    trace!(name = %func.name, args = args.len(), "calling native function");

    ctx.push_call(CallStackEntry {
        fn_name: func.name.clone(),
        fn_called_at: call_at,
    });

    let result = (func.body)(NativeFnCallData {
        call_at,
        args,
        ctx: &mut *ctx,
    });

    ctx.pop_call();

    result
}

/// Create a new instance of a class, without any field
fn instantiate_class(
    call_at: CodeRange,
    class: GcReadOnlyCell<ClassValue>,
    args: Vec<LocatedValue>,
    ctx: &Context,
) -> ExecResult<RuntimeValue> {
    if !args.is_empty() {
        return Err(ctx.error(
            call_at,
            ArgumentError::WrongArity {
                fn_name: class.name.clone(),
                expected: 0,
                got: args.len(),
            },
        ));
    }

    trace!(class = %class.name, "creating instance");

    Ok(RuntimeValue::Instance(GcCell::new(InstanceValue::new(class))))
}
