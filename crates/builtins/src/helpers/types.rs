//!
//! This module defines and exposes *type handlers*, which are simple types that
//! allow to convert and parse some of the scripting language's native types.
//!

use quill_runtime::{
    gc::{GcCell, GcReadOnlyCell},
    values::{ClassValue, InstanceValue, RuntimeValue, ValueType},
};

/// Extract a typed value from a runtime value
pub trait TypedValueParser {
    fn value_type() -> ValueType;

    type Parsed;

    /// Returns `None` if the value is not of the expected type
    fn parse(value: RuntimeValue) -> Option<Self::Parsed>;
}

/// This macro helps create a type handler for any variant of the [`ValueType`] enum,
/// associated to a variant of the [`RuntimeValue`]
macro_rules! declare_basic_type_handlers {
    ($($name: ident ($variant: ident) = $type: ty => $value_ident: ident: $parser: expr),+) => {
        $(
            pub struct $name;

            impl TypedValueParser for $name {
                fn value_type() -> ValueType {
                    ValueType::$variant
                }

                type Parsed = $type;

                fn parse($value_ident: RuntimeValue) -> Option<Self::Parsed> {
                    $parser
                }
            }
        )+
    };
}

declare_basic_type_handlers!(
    NullType (Null) = () => value: match value {
        RuntimeValue::Null => Some(()),
        _ => None
    },

    BoolType (Bool) = bool => value: match value {
        RuntimeValue::Bool(inner) => Some(inner),
        _ => None
    },

    IntType (Int) = i64 => value: match value {
        RuntimeValue::Int(inner) => Some(inner),
        _ => None
    },

    FloatType (Float) = f64 => value: match value {
        RuntimeValue::Float(inner) => Some(inner),
        _ => None
    },

    StringType (String) = String => value: match value {
        RuntimeValue::String(inner) => Some(inner),
        _ => None
    },

    ClassType (Class) = GcReadOnlyCell<ClassValue> => value: match value {
        RuntimeValue::Class(class) => Some(class),
        _ => None
    },

    InstanceType (Instance) = GcCell<InstanceValue> => value: match value {
        RuntimeValue::Instance(instance) => Some(instance),
        _ => None
    }
);
