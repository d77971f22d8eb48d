use quill_ast::{
    Span,
    ast::{Expr, LiteralValue},
};

use crate::{
    context::Context,
    errors::{ExecErrorNature, ExecResult},
    functions::eval_fn_call,
    props::read_field,
    values::{RuntimeValue, are_values_equal},
};

/// Evaluate an expression
pub fn eval_expr(expr: &Span<Expr>, ctx: &mut Context) -> ExecResult<RuntimeValue> {
    match &expr.data {
        Expr::Literal(literal) => Ok(eval_literal(literal)),

        Expr::Variable(name) => match ctx.get_visible_var(&name.data) {
            Some(var) => Ok(var.value.value.clone()),
            None => Err(ctx.error(
                name.at,
                ExecErrorNature::UndefinedVariable {
                    name: name.data.clone(),
                },
            )),
        },

        Expr::FieldAccess { target, field } => {
            let target_value = eval_expr(target, ctx)?;
            read_field(&target_value, target.at, field, ctx)
        }

        Expr::FnCall { callee, args } => eval_fn_call(expr.at, callee, args, ctx),

        Expr::Not(inner) => match eval_expr(inner, ctx)? {
            RuntimeValue::Bool(bool) => Ok(RuntimeValue::Bool(!bool)),
            value => Err(ctx.error(
                inner.at,
                ExecErrorNature::NotABoolean {
                    found: value.compute_type(),
                },
            )),
        },

        Expr::Eq { left, right } => {
            let left = eval_expr(left, ctx)?;
            let right = eval_expr(right, ctx)?;

            Ok(RuntimeValue::Bool(are_values_equal(&left, &right)))
        }
    }
}

fn eval_literal(value: &LiteralValue) -> RuntimeValue {
    match value {
        LiteralValue::Null => RuntimeValue::Null,
        LiteralValue::Boolean(bool) => RuntimeValue::Bool(*bool),
        LiteralValue::Integer(int) => RuntimeValue::Int(*int),
        LiteralValue::Float(float) => RuntimeValue::Float(*float),
        LiteralValue::String(string) => RuntimeValue::String(string.clone()),
    }
}
