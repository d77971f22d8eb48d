use std::fmt::{self, Display, Formatter};

use crate::values::{NativeFnSignature, RuntimeFnValue, RuntimeValue, ValueType};

impl Display for ValueType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Null => "null",
            ValueType::Bool => "bool",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::String => "string",
            ValueType::Class => "class",
            ValueType::Instance => "instance",
            ValueType::Function => "function",
        };

        write!(f, "{name}")
    }
}

impl Display for RuntimeValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_value(self, f, true)
    }
}

// Nested instances are not developed, as they may reference their parent
fn fmt_value(value: &RuntimeValue, f: &mut Formatter<'_>, develop: bool) -> fmt::Result {
    match value {
        RuntimeValue::Null => write!(f, "null"),
        RuntimeValue::Bool(bool) => write!(f, "{bool}"),
        RuntimeValue::Int(int) => write!(f, "{int}"),
        RuntimeValue::Float(float) => write!(f, "{float:?}"),
        RuntimeValue::String(string) => write!(f, "{string:?}"),
        RuntimeValue::Class(class) => write!(f, "<class {}>", class.name),
        RuntimeValue::Function(func) => write!(f, "{}", **func),

        RuntimeValue::Instance(instance) => {
            let instance = instance.read();

            write!(f, "{}", instance.class().name)?;

            if !develop {
                return write!(f, " {{ ... }}");
            }

            if instance.fields().is_empty() {
                return write!(f, " {{}}");
            }

            write!(f, " {{ ")?;

            for (i, (name, value)) in instance.fields().iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }

                write!(f, "{name}: ")?;
                fmt_value(value, f, false)?;
            }

            write!(f, " }}")
        }
    }
}

impl Display for RuntimeFnValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "fn {}{}", self.name, self.signature)
    }
}

impl Display for NativeFnSignature {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let args = self
            .args
            .iter()
            .map(|arg| format!("{}: {}", arg.name, arg.typ))
            .collect::<Vec<_>>();

        write!(f, "({}) -> {}", args.join(", "), self.ret_type)
    }
}
