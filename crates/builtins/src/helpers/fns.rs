use quill_ast::RuntimeCodeRange;
use quill_runtime::{
    conf::NativeArgErrorPolicy,
    context::Context,
    errors::{ArgumentError, ExecResult},
    values::{NativeFnArg, NativeFnBody, RuntimeValue, ValueType},
};
use tracing::debug;

use super::types::TypedValueParser;

/// Description of an internal function
pub struct InternalFunction {
    /// Name of the function
    pub name: &'static str,

    /// List of arguments the function takes
    pub args: Vec<NativeFnArg>,

    /// Callback of the function
    pub run: NativeFnBody,

    /// Return type of the function
    pub ret_type: ValueType,
}

/// Generate the declaration of a positional argument
pub fn generate_internal_arg_decl<T: TypedValueParser>(name: &'static str) -> NativeFnArg {
    NativeFnArg {
        name,
        typ: T::value_type(),
    }
}

/// Parse a positional argument
///
/// `position` is 1-based
pub fn parse_arg<T: TypedValueParser>(
    fn_name: &str,
    position: usize,
    value: RuntimeValue,
) -> Result<T::Parsed, ArgumentError> {
    let found = value.compute_type();

    T::parse(value).ok_or_else(|| ArgumentError::WrongType {
        fn_name: fn_name.to_owned(),
        position,
        expected: T::value_type(),
        found,
    })
}

/// Report a malformed call to a native function
///
/// Functions providing a fallback value return it instead of failing when
/// the runtime is configured to do so
pub fn handle_malformed_call(
    call_at: RuntimeCodeRange,
    err: ArgumentError,
    fallback: Option<RuntimeValue>,
    ctx: &Context,
) -> ExecResult<RuntimeValue> {
    match (ctx.runtime_conf().native_arg_errors, fallback) {
        (NativeArgErrorPolicy::Fallback, Some(fallback)) => {
            debug!(error = %err, %fallback, "malformed native call, using fallback value");
            Ok(fallback)
        }

        (NativeArgErrorPolicy::Raise, _) | (NativeArgErrorPolicy::Fallback, None) => {
            Err(ctx.error(call_at, err))
        }
    }
}

/// Define an internal function
///
/// Arguments are positional and required. The arity is checked first, then each argument's
/// type, in order.
///
/// The function's module must provide a `run() -> Runner` function.
#[macro_export]
macro_rules! define_internal_fn {
    ($name: expr, ( $( $arg_name: ident : $arg_type: ty ),* ) -> $ret_type: ty $(, on_malformed_call: $fallback: expr)?) => {
        use quill_ast::RuntimeCodeRange;

        use quill_runtime::{
            context::Context,
            errors::{ArgumentError, ExecResult},
            values::{RuntimeValue, LocatedValue, NativeFnCallData},
        };

        #[allow(unused_imports)]
        use $crate::helpers::{types::*, fns::*};

        struct Args {
            $( $arg_name: <$arg_type as TypedValueParser>::Parsed ),*
        }

        struct ArgsAt {
            $(
                #[allow(dead_code)]
                $arg_name: RuntimeCodeRange
            ),*
        }

        const ARGS_COUNT: usize = <[&str]>::len(&[$( stringify!($arg_name) ),*]);

        fn _parse_args(args: Vec<LocatedValue>) -> Result<(Args, ArgsAt), ArgumentError> {
            let args: [LocatedValue; ARGS_COUNT] =
                args.try_into().map_err(|args: Vec<LocatedValue>| ArgumentError::WrongArity {
                    fn_name: $name.to_owned(),
                    expected: ARGS_COUNT,
                    got: args.len(),
                })?;

            let [$( $arg_name ),*] = args;

            let args_at = ArgsAt {
                $( $arg_name: $arg_name.from ),*
            };

            #[allow(unused_mut, unused_variables)]
            let mut position = 0;

            let parsed = Args {
                $( $arg_name: {
                    position += 1;
                    parse_arg::<$arg_type>($name, position, $arg_name.value)?
                } ),*
            };

            Ok((parsed, args_at))
        }

        #[allow(unreachable_code)]
        fn _fallback() -> Option<RuntimeValue> {
            $( return Some($fallback); )?
            None
        }

        fn _run(call_data: NativeFnCallData) -> ExecResult<RuntimeValue> {
            let NativeFnCallData { call_at, args, ctx } = call_data;

            let (args, args_at) = match _parse_args(args) {
                Ok(parsed) => parsed,
                Err(err) => return handle_malformed_call(call_at, err, _fallback(), ctx),
            };

            (run().0)(call_at, args, args_at, ctx)
        }

        struct Runner(Box<dyn Fn(RuntimeCodeRange, Args, ArgsAt, &mut Context) -> ExecResult<RuntimeValue>>);

        impl Runner {
            fn new(inner: impl Fn(RuntimeCodeRange, Args, ArgsAt, &mut Context) -> ExecResult<RuntimeValue> + 'static) -> Self {
                Self(Box::new(inner))
            }
        }

        pub fn build_fn() -> InternalFunction {
            InternalFunction {
                name: $name,
                args: vec![
                    $( generate_internal_arg_decl::<$arg_type>(stringify!($arg_name)) ),*
                ],
                ret_type: <$ret_type as TypedValueParser>::value_type(),
                run: _run,
            }
        }
    };
}

/// Declare a set of internal functions, one per module
#[macro_export]
macro_rules! functions_set {
    (fn $set_name: ident => { $( mod $func: ident; )+ }) => {
        $( mod $func; )+

        pub fn $set_name() -> Vec<$crate::helpers::fns::InternalFunction> {
            vec![ $( $func::build_fn() ),+ ]
        }
    };
}
