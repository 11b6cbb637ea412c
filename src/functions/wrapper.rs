//! Callable wrapper: turns a function into a self-describing tool.

use crate::functions::config::{ToolBehaviorConfig, ToolOptions};
use crate::schema::{check_parameters, parameters_for};
use crate::types::tool::FunctionDefinition;
use crate::{Error, ErrorContext, Result};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// An invokable tool body.
///
/// `arguments` is the model's argument object; the returned value is the
/// tool's raw result before any serialization decision is made.
pub trait ToolFunction: Send + Sync {
    fn invoke(&self, arguments: Map<String, Value>) -> Result<Value>;
}

/// Adapter for typed callables `Fn(Args) -> Result<R, E>`.
///
/// The argument object is bound to `Args` with serde, which plays the part of
/// keyword-argument expansion.
pub struct TypedFunction<F, Args> {
    name: String,
    func: F,
    _args: PhantomData<fn(Args)>,
}

impl<F, Args> TypedFunction<F, Args> {
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
            _args: PhantomData,
        }
    }
}

impl<F, Args, R, E> ToolFunction for TypedFunction<F, Args>
where
    F: Fn(Args) -> std::result::Result<R, E> + Send + Sync,
    Args: DeserializeOwned,
    R: Serialize,
    E: Into<anyhow::Error>,
{
    fn invoke(&self, arguments: Map<String, Value>) -> Result<Value> {
        let empty = arguments.is_empty();
        let args: Args = match serde_json::from_value(Value::Object(arguments)) {
            Ok(args) => args,
            // `()` and unit structs only bind from null.
            Err(_) if empty => serde_json::from_value(Value::Null).map_err(|source| {
                Error::ArgumentBinding {
                    function: self.name.clone(),
                    source,
                }
            })?,
            Err(source) => {
                return Err(Error::ArgumentBinding {
                    function: self.name.clone(),
                    source,
                })
            }
        };
        let output = (self.func)(args).map_err(Error::tool)?;
        Ok(serde_json::to_value(output)?)
    }
}

/// Adapter for untyped callables working on the argument object directly.
pub struct RawFunction<F>(pub F);

impl<F> ToolFunction for RawFunction<F>
where
    F: Fn(Map<String, Value>) -> Result<Value> + Send + Sync,
{
    fn invoke(&self, arguments: Map<String, Value>) -> Result<Value> {
        (self.0)(arguments)
    }
}

/// Identifier of a callable type, when it has one.
///
/// Fn items resolve to their item name (`my_crate::tools::add` gives `add`).
/// Closures, fn pointers and trait objects have no usable identifier.
pub fn callable_name<F: ?Sized>() -> Option<String> {
    let full = std::any::type_name::<F>();
    let path = full.split('<').next().unwrap_or(full);
    if !path.split("::").all(is_identifier) {
        return None;
    }
    path.rsplit("::").next().map(str::to_string)
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {
            segment != "_" && chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}

/// A registered tool: schema plus callable plus behavior.
///
/// Built once and never changed afterwards.
#[derive(Clone)]
pub struct ToolDefinition {
    name: String,
    description: String,
    parameters: Value,
    behavior: ToolBehaviorConfig,
    function: Arc<dyn ToolFunction>,
}

impl ToolDefinition {
    /// Build a tool from an untyped callable and a hand-written parameter schema.
    pub fn new<F>(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Value,
        func: F,
    ) -> Result<Self>
    where
        F: Fn(Map<String, Value>) -> Result<Value> + Send + Sync + 'static,
    {
        Self::from_parts(
            name.into(),
            description.into(),
            parameters,
            ToolBehaviorConfig::default(),
            Arc::new(RawFunction(func)),
        )
    }

    /// Assemble a tool from an existing [`ToolFunction`].
    pub fn from_parts(
        name: String,
        description: String,
        parameters: Value,
        behavior: ToolBehaviorConfig,
        function: Arc<dyn ToolFunction>,
    ) -> Result<Self> {
        if name.is_empty() {
            return Err(missing_name("<explicit>"));
        }
        check_parameters(&parameters)?;
        Ok(Self {
            name,
            description,
            parameters,
            behavior,
            function,
        })
    }

    /// Wrap a typed callable.
    ///
    /// Name, description and parameter schema come from `options` when set,
    /// otherwise from the callable's identifier and the `Args` type.
    pub fn wrap<F, Args, R, E>(func: F, options: ToolOptions) -> Result<Self>
    where
        F: Fn(Args) -> std::result::Result<R, E> + Send + Sync + 'static,
        Args: DeserializeOwned + JsonSchema + 'static,
        R: Serialize + 'static,
        E: Into<anyhow::Error> + 'static,
    {
        let name = match options.name {
            Some(name) => name,
            None => callable_name::<F>()
                .ok_or_else(|| missing_name(std::any::type_name::<F>()))?,
        };
        if name.is_empty() {
            return Err(missing_name(std::any::type_name::<F>()));
        }

        let schema = parameters_for::<Args>()?;
        let description = options
            .description
            .or(schema.summary)
            .unwrap_or_default();

        Ok(Self {
            function: Arc::new(TypedFunction::new(name.clone(), func)),
            name,
            description,
            parameters: schema.parameters,
            behavior: options.behavior,
        })
    }

    pub fn with_behavior(mut self, behavior: ToolBehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn parameters(&self) -> &Value {
        &self.parameters
    }

    pub fn behavior(&self) -> &ToolBehaviorConfig {
        &self.behavior
    }

    /// Descriptor sent to the model.
    pub fn schema(&self) -> FunctionDefinition {
        FunctionDefinition {
            name: self.name.clone(),
            description: self.description.clone(),
            parameters: self.parameters.clone(),
        }
    }

    /// Call the underlying function. Errors from the callable pass through.
    pub fn invoke(&self, arguments: Map<String, Value>) -> Result<Value> {
        self.function.invoke(arguments)
    }
}

impl fmt::Debug for ToolDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("parameters", &self.parameters)
            .field("behavior", &self.behavior)
            .finish_non_exhaustive()
    }
}

fn missing_name(callable: &str) -> Error {
    Error::configuration_with_context(
        "tool has no discoverable name and none was supplied",
        ErrorContext::new()
            .with_field_path("name")
            .with_details(format!("callable type: {callable}"))
            .with_source("function_wrapper"),
    )
}
