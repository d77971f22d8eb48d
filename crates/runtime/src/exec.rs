use quill_ast::{
    Span,
    ast::{Block, Instruction, Program},
};
use tracing::debug;

use crate::{
    context::Context,
    errors::{ExecErrorNature, ExecResult},
    expr::eval_expr,
    gc::GcReadOnlyCell,
    props::write_field,
    values::{ClassValue, LocatedValue, RuntimeValue},
};

/// Run a program in the provided context
///
/// Returns the value of the program's last instruction, if it produces one
///
/// Any error aborts the program. The context remains usable afterwards,
/// with the declarations made before the failure still visible.
pub fn run_program(program: &Program, ctx: &mut Context) -> ExecResult<Option<LocatedValue>> {
    let Program { content } = program;

    debug!(
        instructions = content.data.instructions.len(),
        "running program"
    );

    let result = run_block_in_current_scope(&content.data, ctx);

    match &result {
        Ok(_) => debug!("program completed"),

        Err(err) => {
            debug!(error = %err.nature, "program aborted");
            ctx.reset_to_first_scope();
        }
    }

    result
}

fn run_block(block: &Block, ctx: &mut Context) -> ExecResult<Option<LocatedValue>> {
    ctx.push_scope();

    let result = run_block_in_current_scope(block, ctx);

    ctx.pop_scope();

    result
}

fn run_block_in_current_scope(
    block: &Block,
    ctx: &mut Context,
) -> ExecResult<Option<LocatedValue>> {
    let Block { instructions } = block;

    let mut wandering_value = None;

    for instr in instructions {
        wandering_value = run_instr(instr, ctx)?;
    }

    Ok(wandering_value)
}

fn run_instr(instr: &Span<Instruction>, ctx: &mut Context) -> ExecResult<Option<LocatedValue>> {
    match &instr.data {
        Instruction::DeclareVar { name, init_expr } => {
            let value = eval_expr(init_expr, ctx)?;

            ctx.declare_var(name, LocatedValue::new(init_expr.at, value));
        }

        Instruction::AssignVar { name, expr } => {
            let value = eval_expr(expr, ctx)?;

            ctx.assign_var(name, LocatedValue::new(expr.at, value))?;
        }

        Instruction::AssignField {
            target,
            field,
            expr,
        } => {
            let target_value = eval_expr(target, ctx)?;
            let value = eval_expr(expr, ctx)?;

            write_field(&target_value, target.at, field, value, ctx)?;
        }

        Instruction::ClassDecl { name } => {
            let class = ClassValue {
                name: name.data.clone(),
                declared_at: name.at,
            };

            ctx.declare_var(
                name,
                LocatedValue::new(name.at, RuntimeValue::Class(GcReadOnlyCell::new(class))),
            );
        }

        Instruction::IfCond { cond, body, els } => {
            let cond_value = match eval_expr(cond, ctx)? {
                RuntimeValue::Bool(bool) => bool,
                value => {
                    return Err(ctx.error(
                        cond.at,
                        ExecErrorNature::NotABoolean {
                            found: value.compute_type(),
                        },
                    ));
                }
            };

            if cond_value {
                return run_block(&body.data, ctx);
            }

            if let Some(els) = els {
                return run_block(&els.data, ctx);
            }
        }

        Instruction::Expr(expr) => {
            let value = eval_expr(expr, ctx)?;

            return Ok(Some(LocatedValue::new(expr.at, value)));
        }
    }

    Ok(None)
}
