use std::{borrow::Cow, ops::Deref};

use quill_ast::RuntimeCodeRange;

use crate::{context::CallStack, values::ValueType};

pub type ExecResult<T> = Result<T, ExecError>;

/// A runtime error
///
/// All runtime errors abort the running program: there is no way to catch them from inside the language
#[derive(Debug)]
pub struct ExecError(Box<ExecActualError>);

impl ExecError {
    pub fn new(content: ExecActualError) -> Self {
        Self(Box::new(content))
    }

    /// Attach an additional information to the error
    pub fn with_info(mut self, typ: ExecInfoType, message: impl Into<String>) -> Self {
        self.0.infos.push((typ, message.into()));
        self
    }
}

impl Deref for ExecError {
    type Target = ExecActualError;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug)]
pub struct ExecActualError {
    pub at: RuntimeCodeRange,
    pub nature: ExecErrorNature,
    pub call_stack: CallStack,
    pub infos: Vec<(ExecInfoType, String)>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExecErrorNature {
    #[error("{0}")]
    Custom(Cow<'static, str>),

    #[error("field '{field}' is not defined on this instance of class '{class}'")]
    UndefinedField { class: String, field: String },

    #[error("only instances have fields, found a {found}")]
    NotAnInstance { found: ValueType },

    #[error("variable '{name}' was not found")]
    UndefinedVariable { name: String },

    #[error("cannot assign to native library item '{name}'")]
    NativeItemAssignment { name: String },

    #[error("expected a function or a class, found a {found}")]
    NotCallable { found: ValueType },

    #[error("expected a boolean, found a {found}")]
    NotABoolean { found: ValueType },

    #[error(transparent)]
    Argument(#[from] ArgumentError),
}

impl From<String> for ExecErrorNature {
    fn from(value: String) -> Self {
        Self::Custom(Cow::Owned(value))
    }
}

/// Malformed call to a function
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("function '{fn_name}' takes {expected} argument(s) but {got} were provided")]
    WrongArity {
        fn_name: String,
        expected: usize,
        got: usize,
    },

    #[error("argument {position} of function '{fn_name}' should be a {expected}, found a {found}")]
    WrongType {
        fn_name: String,
        /// 1-based
        position: usize,
        expected: ValueType,
        found: ValueType,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecInfoType {
    Note,
    Tip,
}
