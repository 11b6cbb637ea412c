//! Invocation outcomes handed back to the session driver.

use crate::functions::config::ToolBehaviorConfig;
use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A saved return value, already checked against the tool's `serialize` flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ReturnValue {
    /// Return value to be JSON-encoded for the model.
    Json(Value),
    /// Return value passed to the model verbatim.
    Raw(String),
}

impl ReturnValue {
    /// Apply the serialize flag to a raw return value.
    ///
    /// With `serialize == false` the value must already be a string; anything
    /// else is a mistake in the tool, reported as a configuration error.
    pub fn new(tool_name: &str, value: Value, serialize: bool) -> Result<Self> {
        if serialize {
            return Ok(ReturnValue::Json(value));
        }
        match value {
            Value::String(text) => Ok(ReturnValue::Raw(text)),
            other => Err(Error::configuration_with_context(
                "serialize is disabled but the function did not return a string",
                ErrorContext::new()
                    .with_field_path(format!("{tool_name}.serialize"))
                    .with_details(format!("returned {}", json_type(&other)))
                    .with_source("dispatcher"),
            )),
        }
    }

    /// Text to reinject into the conversation.
    pub fn content(&self) -> String {
        match self {
            ReturnValue::Json(value) => value.to_string(),
            ReturnValue::Raw(text) => text.clone(),
        }
    }

    /// The return value as produced by the callable.
    pub fn raw(&self) -> Value {
        match self {
            ReturnValue::Json(value) => value.clone(),
            ReturnValue::Raw(text) => Value::String(text.clone()),
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Result of one dispatched call.
///
/// `value` is `None` when the tool does not save its return value; the
/// driver then appends nothing for this call. The driver alone acts on
/// `remove_call` and `interpret_as_response`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationOutcome {
    pub tool_name: String,
    pub value: Option<ReturnValue>,
    pub remove_call: bool,
    pub interpret_as_response: bool,
}

impl InvocationOutcome {
    /// Package a raw return value according to a tool's behavior.
    pub fn from_return(
        tool_name: impl Into<String>,
        value: Value,
        behavior: &ToolBehaviorConfig,
    ) -> Result<Self> {
        let tool_name = tool_name.into();
        let value = if behavior.save_return {
            Some(ReturnValue::new(&tool_name, value, behavior.serialize)?)
        } else {
            None
        };
        Ok(Self {
            tool_name,
            value,
            remove_call: behavior.remove_call,
            interpret_as_response: behavior.interpret_as_response,
        })
    }

    pub fn content(&self) -> Option<String> {
        self.value.as_ref().map(ReturnValue::content)
    }

    pub fn raw(&self) -> Option<Value> {
        self.value.as_ref().map(ReturnValue::raw)
    }
}
