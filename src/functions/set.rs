//! Function sets: the registry of tools exposed to the model.

use crate::functions::config::ToolOptions;
use crate::functions::dispatch::dispatch;
use crate::functions::result::InvocationOutcome;
use crate::functions::wrapper::ToolDefinition;
use crate::types::tool::{CallRequest, FunctionDefinition, ToolSchema};
use crate::{Error, Result};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Provider of a functions schema and a function runner.
pub trait FunctionSet {
    /// Descriptors of every available function, in a stable order.
    fn functions_schema(&self) -> Vec<FunctionDefinition>;

    /// Look a function up by exact name.
    fn find(&self, name: &str) -> Result<&ToolDefinition>;

    /// Dispatch a call request. See [`dispatch`].
    fn run(&self, request: &CallRequest) -> Result<InvocationOutcome> {
        dispatch(self, request)
    }

    /// Dispatch a call request and return only the function's raw result,
    /// or `None` if the function does not save its return value.
    fn call(&self, request: &CallRequest) -> Result<Option<Value>> {
        Ok(self.run(request)?.raw())
    }
}

/// A function set that functions can be added to.
pub trait BaseFunctionSet: FunctionSet {
    /// Add a finished tool definition as is.
    fn add(&mut self, definition: ToolDefinition) -> &ToolDefinition;

    /// Wrap a callable with default options and add it.
    fn add_function<F, Args, R, E>(&mut self, func: F) -> Result<&ToolDefinition>
    where
        Self: Sized,
        F: Fn(Args) -> std::result::Result<R, E> + Send + Sync + 'static,
        Args: DeserializeOwned + JsonSchema + 'static,
        R: Serialize + 'static,
        E: Into<anyhow::Error> + 'static,
    {
        self.add_function_with(func, ToolOptions::default())
    }

    /// Wrap a callable with the given options and add it.
    fn add_function_with<F, Args, R, E>(
        &mut self,
        func: F,
        options: ToolOptions,
    ) -> Result<&ToolDefinition>
    where
        Self: Sized,
        F: Fn(Args) -> std::result::Result<R, E> + Send + Sync + 'static,
        Args: DeserializeOwned + JsonSchema + 'static,
        R: Serialize + 'static,
        E: Into<anyhow::Error> + 'static,
    {
        let definition = ToolDefinition::wrap(func, options)?;
        Ok(self.add(definition))
    }

    /// Capture options now, apply them to a callable later.
    fn register(&mut self, options: ToolOptions) -> Registrar<'_, Self>
    where
        Self: Sized,
    {
        Registrar { set: self, options }
    }
}

/// Pending registration returned by [`BaseFunctionSet::register`].
#[must_use = "a registrar does nothing until `apply` is called"]
pub struct Registrar<'a, S> {
    set: &'a mut S,
    options: ToolOptions,
}

impl<'a, S: BaseFunctionSet> Registrar<'a, S> {
    pub fn options(&self) -> &ToolOptions {
        &self.options
    }

    /// Wrap `func` with the captured options and add it to the set.
    pub fn apply<F, Args, R, E>(self, func: F) -> Result<&'a ToolDefinition>
    where
        F: Fn(Args) -> std::result::Result<R, E> + Send + Sync + 'static,
        Args: DeserializeOwned + JsonSchema + 'static,
        R: Serialize + 'static,
        E: Into<anyhow::Error> + 'static,
    {
        let set = self.set;
        set.add_function_with(func, self.options)
    }
}

impl ToolOptions {
    /// Wrap `func` with these options and add it to `set`.
    pub fn apply<S, F, Args, R, E>(self, set: &mut S, func: F) -> Result<&ToolDefinition>
    where
        S: BaseFunctionSet,
        F: Fn(Args) -> std::result::Result<R, E> + Send + Sync + 'static,
        Args: DeserializeOwned + JsonSchema + 'static,
        R: Serialize + 'static,
        E: Into<anyhow::Error> + 'static,
    {
        set.add_function_with(func, self)
    }
}

/// Ordered, in-memory function registry.
///
/// Registration order is kept and drives schema order. Names are not
/// required to be unique: on lookup the first registered match wins, so a
/// later duplicate is shadowed rather than rejected.
///
/// There is no internal locking; populate the registry before dispatching.
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    functions: Vec<ToolDefinition>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_functions(functions: Vec<ToolDefinition>) -> Self {
        Self { functions }
    }

    /// Functions schema wrapped in the tools API envelope.
    pub fn tools_schema(&self) -> Vec<ToolSchema> {
        self.functions_schema()
            .into_iter()
            .map(ToolSchema::from)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.functions.iter().map(ToolDefinition::name).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ToolDefinition> {
        self.functions.iter()
    }
}

impl FunctionSet for FunctionRegistry {
    fn functions_schema(&self) -> Vec<FunctionDefinition> {
        self.functions.iter().map(ToolDefinition::schema).collect()
    }

    fn find(&self, name: &str) -> Result<&ToolDefinition> {
        self.functions
            .iter()
            .find(|function| function.name() == name)
            .ok_or_else(|| {
                warn!(function = name, "function not found");
                Error::FunctionNotFound {
                    name: name.to_string(),
                }
            })
    }
}

impl BaseFunctionSet for FunctionRegistry {
    fn add(&mut self, definition: ToolDefinition) -> &ToolDefinition {
        debug!(
            function = definition.name(),
            position = self.functions.len(),
            "registering function"
        );
        let index = self.functions.len();
        self.functions.push(definition);
        &self.functions[index]
    }
}

impl FromIterator<ToolDefinition> for FunctionRegistry {
    fn from_iter<I: IntoIterator<Item = ToolDefinition>>(iter: I) -> Self {
        Self::with_functions(iter.into_iter().collect())
    }
}

impl Extend<ToolDefinition> for FunctionRegistry {
    fn extend<I: IntoIterator<Item = ToolDefinition>>(&mut self, iter: I) {
        for definition in iter {
            self.add(definition);
        }
    }
}

impl<'a> IntoIterator for &'a FunctionRegistry {
    type Item = &'a ToolDefinition;
    type IntoIter = std::slice::Iter<'a, ToolDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
