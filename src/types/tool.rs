//! Function calling wire types exchanged with the model-facing driver

use serde::{Deserialize, Serialize};

/// Function descriptor, the per-tool entry of a functions schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value, // JSON Schema
}

/// Tool envelope used by the tools API (`{"type": "function", "function": ...}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSchema {
    #[serde(rename = "type")]
    pub tool_type: String, // "function"
    pub function: FunctionDefinition,
}

impl From<FunctionDefinition> for ToolSchema {
    fn from(function: FunctionDefinition) -> Self {
        Self {
            tool_type: "function".to_string(),
            function,
        }
    }
}

/// Call request (invocation from model).
///
/// `raw_arguments` is the JSON-encoded argument object exactly as the model
/// produced it; it is parsed only at dispatch time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRequest {
    pub name: String,
    #[serde(rename = "arguments")]
    pub raw_arguments: String,
}

impl CallRequest {
    pub fn new(name: impl Into<String>, raw_arguments: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_arguments: raw_arguments.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_call_request_reads_model_function_call() {
        let request: CallRequest = serde_json::from_value(json!({
            "name": "get_current_weather",
            "arguments": "{\"location\": \"Tokyo\"}"
        }))
        .unwrap();
        assert_eq!(request.name, "get_current_weather");
        assert_eq!(request.raw_arguments, r#"{"location": "Tokyo"}"#);
    }

    #[test]
    fn test_tool_schema_envelope() {
        let tool = ToolSchema::from(FunctionDefinition {
            name: "noop".into(),
            description: String::new(),
            parameters: json!({"type": "object", "properties": {}}),
        });
        let value = serde_json::to_value(&tool).unwrap();
        assert_eq!(value["type"], "function");
        assert_eq!(value["function"]["name"], "noop");
    }
}
