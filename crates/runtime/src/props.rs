//!
//! Fields handling module.
//!
//! Provides utilities to read and write fields on instances.
//!
//! Reading a field that is not assigned on an instance is a fatal error: the program is aborted.
//! Programs are expected to check a field's existence first (using the native library) when unsure.
//!

use quill_ast::{CodeRange, RuntimeCodeRange, Span};
use tracing::debug;

use crate::{
    context::Context,
    errors::{ExecErrorNature, ExecInfoType, ExecResult},
    gc::GcCell,
    values::{FieldLookup, InstanceValue, RuntimeValue},
};

/// Read a field from an instance
pub fn read_field(
    target: &RuntimeValue,
    target_at: CodeRange,
    field: &Span<String>,
    ctx: &Context,
) -> ExecResult<RuntimeValue> {
    let instance = expect_instance(target, target_at, ctx)?;
    let instance = instance.read();

    match instance.lookup(&field.data) {
        FieldLookup::Found(value) => Ok(value.clone()),

        FieldLookup::Absent => {
            debug!(
                class = %instance.class().name,
                field = %field.data,
                "read of an unassigned field, aborting program"
            );

            let class = instance.class();

            let err = ctx.error_with_infos(
                field.at,
                ExecErrorNature::UndefinedField {
                    class: class.name.clone(),
                    field: field.data.clone(),
                },
                [(
                    ExecInfoType::Tip,
                    "use 'hasField' to check if a field exists before reading it",
                )],
            );

            if class.declared_at.is_synthetic() {
                return Err(err);
            }

            Err(err.with_info(
                ExecInfoType::Note,
                format!(
                    "class '{}' is declared at {}",
                    class.name,
                    RuntimeCodeRange::Parsed(class.declared_at)
                ),
            ))
        }
    }
}

/// Assign a field on an instance
///
/// The field is created if it doesn't exist yet
pub fn write_field(
    target: &RuntimeValue,
    target_at: CodeRange,
    field: &Span<String>,
    value: RuntimeValue,
    ctx: &Context,
) -> ExecResult<()> {
    let instance = expect_instance(target, target_at, ctx)?;

    instance.write().set_field(field.data.clone(), value);

    Ok(())
}

fn expect_instance<'v>(
    value: &'v RuntimeValue,
    at: CodeRange,
    ctx: &Context,
) -> ExecResult<&'v GcCell<InstanceValue>> {
    match value {
        RuntimeValue::Instance(instance) => Ok(instance),

        RuntimeValue::Null
        | RuntimeValue::Bool(_)
        | RuntimeValue::Int(_)
        | RuntimeValue::Float(_)
        | RuntimeValue::String(_)
        | RuntimeValue::Class(_)
        | RuntimeValue::Function(_) => Err(ctx.error(
            at,
            ExecErrorNature::NotAnInstance {
                found: value.compute_type(),
            },
        )),
    }
}
