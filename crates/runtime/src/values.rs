use indexmap::IndexMap;
use quill_ast::{CodeRange, RuntimeCodeRange};

use crate::{
    context::Context,
    errors::ExecResult,
    gc::{GcCell, GcReadOnlyCell},
};

#[derive(Debug, Clone)]
pub enum RuntimeValue {
    // Primitives
    // These can be cloned pretty cheaply
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),

    // Containers
    // These can be cloned cheaply thanks to them using a GcCell
    Class(GcReadOnlyCell<ClassValue>),
    Instance(GcCell<InstanceValue>),
    Function(GcReadOnlyCell<RuntimeFnValue>),
}

impl RuntimeValue {
    /// Compute the type of a runtime value
    pub fn compute_type(&self) -> ValueType {
        match self {
            RuntimeValue::Null => ValueType::Null,
            RuntimeValue::Bool(_) => ValueType::Bool,
            RuntimeValue::Int(_) => ValueType::Int,
            RuntimeValue::Float(_) => ValueType::Float,
            RuntimeValue::String(_) => ValueType::String,
            RuntimeValue::Class(_) => ValueType::Class,
            RuntimeValue::Instance(_) => ValueType::Instance,
            RuntimeValue::Function(_) => ValueType::Function,
        }
    }
}

/// Type of a runtime value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    Bool,
    Int,
    Float,
    String,
    Class,
    Instance,
    Function,
}

/// Runtime class value
#[derive(Debug)]
pub struct ClassValue {
    pub name: String,
    pub declared_at: CodeRange,
}

/// Runtime instance value
#[derive(Debug)]
pub struct InstanceValue {
    class: GcReadOnlyCell<ClassValue>,
    fields: IndexMap<String, RuntimeValue>,
}

impl InstanceValue {
    /// Create an instance without any field
    pub fn new(class: GcReadOnlyCell<ClassValue>) -> Self {
        Self {
            class,
            fields: IndexMap::new(),
        }
    }

    /// Get the class this instance was created from
    pub fn class(&self) -> &ClassValue {
        &self.class
    }

    /// Get all assigned fields
    pub fn fields(&self) -> &IndexMap<String, RuntimeValue> {
        &self.fields
    }

    /// Look up a field
    pub fn lookup(&self, name: &str) -> FieldLookup<'_> {
        match self.fields.get(name) {
            Some(value) => FieldLookup::Found(value),
            None => FieldLookup::Absent,
        }
    }

    /// Check if a field is assigned, whatever its value is
    pub fn has_field(&self, name: &str) -> bool {
        matches!(self.lookup(name), FieldLookup::Found(_))
    }

    /// Assign a field, creating it if required
    ///
    /// Returns the previous value, if any
    pub fn set_field(&mut self, name: String, value: RuntimeValue) -> Option<RuntimeValue> {
        self.fields.insert(name, value)
    }
}

/// Result of a field lookup
#[derive(Debug, Clone, Copy)]
pub enum FieldLookup<'a> {
    Found(&'a RuntimeValue),
    Absent,
}

/// Runtime function value
#[derive(Debug)]
pub struct RuntimeFnValue {
    pub name: String,
    pub signature: NativeFnSignature,
    pub body: NativeFnBody,
}

/// Signature of a native function
#[derive(Debug, Clone)]
pub struct NativeFnSignature {
    pub args: Vec<NativeFnArg>,
    pub ret_type: ValueType,
}

/// Positional argument of a native function
#[derive(Debug, Clone)]
pub struct NativeFnArg {
    pub name: &'static str,
    pub typ: ValueType,
}

/// Native function call data
///
/// Arguments are provided in order and are not checked against the function's signature:
/// handling malformed calls is the native function's responsibility
pub struct NativeFnCallData<'c> {
    /// Call's location
    pub call_at: RuntimeCodeRange,

    /// Arguments, in order
    pub args: Vec<LocatedValue>,

    /// Runtime context
    pub ctx: &'c mut Context,
}

/// Body of a native function
pub type NativeFnBody = fn(NativeFnCallData) -> ExecResult<RuntimeValue>;

/// Runtime value with a location
#[derive(Debug, Clone)]
pub struct LocatedValue {
    /// The value itself
    pub value: RuntimeValue,

    /// Where the value comes from
    pub from: RuntimeCodeRange,
}

impl LocatedValue {
    /// Create a located value
    pub fn new(from: impl Into<RuntimeCodeRange>, value: RuntimeValue) -> Self {
        Self {
            value,
            from: from.into(),
        }
    }
}

/// Check if two values are equal
///
/// Classes, instances and functions are compared by identity
pub fn are_values_equal(left: &RuntimeValue, right: &RuntimeValue) -> bool {
    match (left, right) {
        (RuntimeValue::Null, RuntimeValue::Null) => true,
        (RuntimeValue::Bool(a), RuntimeValue::Bool(b)) => a == b,
        (RuntimeValue::Int(a), RuntimeValue::Int(b)) => a == b,
        (RuntimeValue::Float(a), RuntimeValue::Float(b)) => a == b,
        (RuntimeValue::String(a), RuntimeValue::String(b)) => a == b,
        (RuntimeValue::Class(a), RuntimeValue::Class(b)) => a.ptr_eq(b),
        (RuntimeValue::Instance(a), RuntimeValue::Instance(b)) => a.ptr_eq(b),
        (RuntimeValue::Function(a), RuntimeValue::Function(b)) => a.ptr_eq(b),

        (RuntimeValue::Null, _)
        | (RuntimeValue::Bool(_), _)
        | (RuntimeValue::Int(_), _)
        | (RuntimeValue::Float(_), _)
        | (RuntimeValue::String(_), _)
        | (RuntimeValue::Class(_), _)
        | (RuntimeValue::Instance(_), _)
        | (RuntimeValue::Function(_), _) => false,
    }
}
