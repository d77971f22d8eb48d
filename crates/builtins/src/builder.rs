use quill_ast::RuntimeCodeRange;
use quill_runtime::{
    context::{ScopeContent, ScopeVar},
    gc::GcReadOnlyCell,
    values::{LocatedValue, NativeFnSignature, RuntimeFnValue, RuntimeValue},
};
use tracing::debug;

use crate::{functions::native_functions, helpers::fns::InternalFunction};

/// Build the content of the native library
///
/// Each native function is bound to a variable of the same name
pub fn build_native_lib_content() -> ScopeContent {
    let mut content = ScopeContent::new();

    for func in native_functions() {
        let InternalFunction {
            name,
            args,
            run,
            ret_type,
        } = func;

        let value = RuntimeValue::Function(GcReadOnlyCell::new(RuntimeFnValue {
            name: name.to_owned(),
            signature: NativeFnSignature { args, ret_type },
            body: run,
        }));

        content.vars.insert(
            name.to_owned(),
            ScopeVar {
                value: LocatedValue::new(RuntimeCodeRange::Internal("native library"), value),
            },
        );
    }

    debug!(functions = content.vars.len(), "built native library");

    content
}
