//! Tool behavior and registration options

use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const OPTION_KEYS: &[&str] = &[
    "name",
    "description",
    "save_return",
    "serialize",
    "remove_call",
    "interpret_as_response",
];

/// Post-invocation handling for a tool's return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolBehaviorConfig {
    /// Send the return value back to the model.
    pub save_return: bool,
    /// JSON-encode the return value. When false the callable must return a string.
    pub serialize: bool,
    /// Ask the session driver to drop the call from chat history.
    pub remove_call: bool,
    /// Treat the return value as the assistant's response.
    pub interpret_as_response: bool,
}

impl Default for ToolBehaviorConfig {
    fn default() -> Self {
        Self {
            save_return: true,
            serialize: true,
            remove_call: false,
            interpret_as_response: false,
        }
    }
}

impl ToolBehaviorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_return(mut self, save_return: bool) -> Self {
        self.save_return = save_return;
        self
    }

    pub fn serialize(mut self, serialize: bool) -> Self {
        self.serialize = serialize;
        self
    }

    pub fn remove_call(mut self, remove_call: bool) -> Self {
        self.remove_call = remove_call;
        self
    }

    pub fn interpret_as_response(mut self, interpret_as_response: bool) -> Self {
        self.interpret_as_response = interpret_as_response;
        self
    }
}

/// Overrides applied when a callable is wrapped into a tool.
///
/// Options are plain data: build them once, keep them around, and apply
/// them to a callable later with [`ToolOptions::apply`] or
/// [`BaseFunctionSet::register`](crate::functions::BaseFunctionSet::register).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolOptions {
    /// Tool name. Defaults to the callable's identifier.
    pub name: Option<String>,
    /// Tool description. Defaults to the first doc line of the argument type.
    pub description: Option<String>,
    #[serde(flatten)]
    pub behavior: ToolBehaviorConfig,
}

impl ToolOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from YAML. Unknown keys are rejected.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Self::from_value(serde_yaml::from_str(text)?)
    }

    /// Load options from JSON. Unknown keys are rejected.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(text)?)
    }

    // `behavior` is flattened, which rules out `deny_unknown_fields`.
    fn from_value(value: Value) -> Result<Self> {
        if let Value::Object(map) = &value {
            if let Some(key) = map.keys().find(|key| !OPTION_KEYS.contains(&key.as_str())) {
                return Err(Error::configuration_with_context(
                    "unknown tool option",
                    ErrorContext::new()
                        .with_field_path(key.clone())
                        .with_details(format!("expected one of {}", OPTION_KEYS.join(", ")))
                        .with_source("tool_options"),
                ));
            }
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn behavior(mut self, behavior: ToolBehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn save_return(mut self, save_return: bool) -> Self {
        self.behavior.save_return = save_return;
        self
    }

    pub fn serialize(mut self, serialize: bool) -> Self {
        self.behavior.serialize = serialize;
        self
    }

    pub fn remove_call(mut self, remove_call: bool) -> Self {
        self.behavior.remove_call = remove_call;
        self
    }

    pub fn interpret_as_response(mut self, interpret_as_response: bool) -> Self {
        self.behavior.interpret_as_response = interpret_as_response;
        self
    }
}
