use indexmap::IndexMap;
use quill_ast::{RuntimeCodeRange, Span};

use crate::{
    conf::RuntimeConf,
    errors::{ExecActualError, ExecError, ExecErrorNature, ExecInfoType, ExecResult},
    values::LocatedValue,
};

/// Scope ID of the native library
pub static NATIVE_LIB_SCOPE_ID: u64 = 0;

/// Scope ID of the very first user scope (which is the only scope to never be deleted)
pub static FIRST_SCOPE_ID: u64 = 1;

/// This structure represents the state of the runtime.
///
/// It contains runtime configuration as well as real-time runtime data
///
/// It is designed to be reusable in order to run multiple programs in the same base scope
/// (e.g. REPL scenario)
#[derive(Debug, Clone)]
pub struct Context {
    /// Runtime configuration
    conf: RuntimeConf,

    /// Auto-incremented scopes ID counter
    scopes_id_counter: u64,

    /// All alive scopes, from the native library to the current one
    scopes: Vec<Scope>,

    /// Native functions currently being called
    call_stack: CallStack,
}

impl Context {
    /// Create a new context (runtime state)
    /// The native library's content can be generated using the dedicated crate
    pub fn new(conf: RuntimeConf, native_lib_content: ScopeContent) -> Self {
        Self {
            conf,
            scopes_id_counter: FIRST_SCOPE_ID,
            scopes: vec![
                Scope {
                    id: NATIVE_LIB_SCOPE_ID,
                    content: native_lib_content,
                },
                Scope {
                    id: FIRST_SCOPE_ID,
                    content: ScopeContent::new(),
                },
            ],
            call_stack: CallStack::empty(),
        }
    }

    /// Get the runtime configuration
    pub fn runtime_conf(&self) -> &RuntimeConf {
        &self.conf
    }

    /// Get the current scope
    pub fn current_scope(&self) -> &Scope {
        // There is always at least the native library scope and the first user scope
        &self.scopes[self.scopes.len() - 1]
    }

    /// Get the current call stack
    pub fn call_stack(&self) -> &CallStack {
        &self.call_stack
    }

    /// Generate an error object
    pub fn error(
        &self,
        at: impl Into<RuntimeCodeRange>,
        nature: impl Into<ExecErrorNature>,
    ) -> ExecError {
        ExecError::new(ExecActualError {
            at: at.into(),
            nature: nature.into(),
            call_stack: self.call_stack.clone(),
            infos: vec![],
        })
    }

    /// Generate an error object and attach additional informations to it
    pub fn error_with_infos<const N: usize>(
        &self,
        at: impl Into<RuntimeCodeRange>,
        nature: impl Into<ExecErrorNature>,
        infos: [(ExecInfoType, impl Into<String>); N],
    ) -> ExecError {
        ExecError::new(ExecActualError {
            at: at.into(),
            nature: nature.into(),
            call_stack: self.call_stack.clone(),
            infos: infos
                .into_iter()
                .map(|(info_type, msg)| (info_type, msg.into()))
                .collect(),
        })
    }

    /// Create a new scope above the current one
    pub(crate) fn push_scope(&mut self) {
        self.scopes_id_counter += 1;

        self.scopes.push(Scope {
            id: self.scopes_id_counter,
            content: ScopeContent::new(),
        });
    }

    /// Remove the current scope
    pub(crate) fn pop_scope(&mut self) {
        assert!(self.current_scope().id > FIRST_SCOPE_ID);
        self.scopes.pop();
    }

    /// Go back to the first user scope and clear the call stack
    ///
    /// Used after a program failed in the middle of a nested scope
    pub(crate) fn reset_to_first_scope(&mut self) {
        self.scopes.truncate(2);
        self.call_stack = CallStack::empty();
    }

    /// Register a native function call
    pub(crate) fn push_call(&mut self, entry: CallStackEntry) {
        self.call_stack.append(entry);
    }

    /// Unregister the latest native function call
    pub(crate) fn pop_call(&mut self) {
        self.call_stack.history.pop();
    }

    /// Declare a variable in the current scope
    ///
    /// Declaring a variable with the same name as an existing one shadows it
    pub(crate) fn declare_var(&mut self, name: &Span<String>, value: LocatedValue) {
        let scope = self.scopes.len() - 1;

        self.scopes[scope].content.vars.insert(
            name.data.clone(),
            ScopeVar { value },
        );
    }

    /// Get a specific variable, looking from the current scope down to the native library
    pub fn get_visible_var(&self, name: &str) -> Option<&ScopeVar> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.content.vars.get(name))
    }

    /// Assign a value to an existing variable
    pub(crate) fn assign_var(
        &mut self,
        name: &Span<String>,
        value: LocatedValue,
    ) -> ExecResult<()> {
        let Some(scope_index) = self
            .scopes
            .iter()
            .rposition(|scope| scope.content.vars.contains_key(&name.data))
        else {
            return Err(self.error(
                name.at,
                ExecErrorNature::UndefinedVariable {
                    name: name.data.clone(),
                },
            ));
        };

        if self.scopes[scope_index].id == NATIVE_LIB_SCOPE_ID {
            return Err(self.error_with_infos(
                name.at,
                ExecErrorNature::NativeItemAssignment {
                    name: name.data.clone(),
                },
                [(
                    ExecInfoType::Tip,
                    "declare a new variable instead to shadow the native item",
                )],
            ));
        }

        if let Some(var) = self.scopes[scope_index].content.vars.get_mut(&name.data) {
            var.value = value;
        }

        Ok(())
    }
}

/// Runtime scope
#[derive(Debug, Clone)]
pub struct Scope {
    /// Unique ID of the scope (not two scopes must have the same ID)
    pub id: u64,

    /// Content of the scope
    pub content: ScopeContent,
}

/// Content of a scope
#[derive(Debug, Clone)]
pub struct ScopeContent {
    /// Variables (map keys are variable names)
    pub vars: IndexMap<String, ScopeVar>,
}

impl ScopeContent {
    /// Create a new (empty) scope content
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            vars: IndexMap::new(),
        }
    }
}

/// Scoped variable
#[derive(Debug, Clone)]
pub struct ScopeVar {
    /// Value of the variable
    pub value: LocatedValue,
}

/// Call stack
#[derive(Debug, Clone)]
pub struct CallStack {
    /// All call stack's entries, in chronological ascending order
    history: Vec<CallStackEntry>,
}

impl CallStack {
    /// Create a new (empty) call stack
    pub fn empty() -> Self {
        Self { history: vec![] }
    }

    /// Append a new call stack entry
    pub fn append(&mut self, entry: CallStackEntry) {
        self.history.push(entry);
    }

    /// Get the list in chronological, ascending order of all entries
    pub fn history(&self) -> &[CallStackEntry] {
        &self.history
    }
}

/// A call stack entry
#[derive(Debug, Clone)]
pub struct CallStackEntry {
    /// Name of the called function
    pub fn_name: String,

    /// Location of the function call
    pub fn_called_at: RuntimeCodeRange,
}
