//! Parameter schema derivation.
//!
//! Typed tools get their parameter schema from `schemars`, computed once when
//! the tool is wrapped. Untyped tools declare one by hand, usually with
//! [`SchemaGenerator`], and have it checked by [`check_parameters`].

use crate::{Error, ErrorContext, Result};
use jsonschema::{Draft, JSONSchema};
use schemars::gen::SchemaSettings;
use schemars::JsonSchema;
use serde_json::{json, Map, Value};

/// Parameter schema and doc summary extracted from an argument type.
#[derive(Debug, Clone, PartialEq)]
pub struct ParametersSchema {
    pub parameters: Value,
    /// First line of the argument type's doc comment, if any.
    pub summary: Option<String>,
}

/// Generator for JSON schemas with customization options.
#[derive(Debug, Clone, Default)]
pub struct SchemaGenerator {
    title: Option<String>,
    description: Option<String>,
    properties: Vec<(String, Value)>,
    required: Vec<String>,
    additional_properties: bool,
}

impl SchemaGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn add_property(mut self, name: impl Into<String>, schema: Value) -> Self {
        self.properties.push((name.into(), schema));
        self
    }

    /// Add a property and mark it required.
    pub fn add_required_property(mut self, name: impl Into<String>, schema: Value) -> Self {
        let name = name.into();
        self.required.push(name.clone());
        self.properties.push((name, schema));
        self
    }

    pub fn set_required(mut self, required: &[String]) -> Self {
        self.required = required.to_vec();
        self
    }

    pub fn set_additional_properties(mut self, additional: bool) -> Self {
        self.additional_properties = additional;
        self
    }

    pub fn build(self) -> Value {
        let mut map = Map::new();
        map.insert("type".into(), json!("object"));

        let mut properties = Map::new();
        for (name, schema) in self.properties {
            properties.insert(name, schema);
        }
        map.insert("properties".into(), properties.into());

        if !self.required.is_empty() {
            map.insert("required".into(), self.required.into());
        }

        if !self.additional_properties {
            map.insert("additionalProperties".into(), json!(false));
        }

        if let Some(title) = self.title {
            map.insert("title".into(), title.into());
        }
        if let Some(desc) = self.description {
            map.insert("description".into(), desc.into());
        }

        map.into()
    }
}

/// Schema for a single JSON type name, for hand-written parameter schemas.
pub fn schema_from_type_name(type_name: &str) -> Result<Value> {
    match type_name {
        "string" | "integer" | "number" | "boolean" | "array" | "object" | "null" => {
            Ok(json!({ "type": type_name }))
        }
        other => Err(Error::configuration_with_context(
            "unknown JSON type name",
            ErrorContext::new()
                .with_details(format!("got {other:?}"))
                .with_source("schema"),
        )),
    }
}

/// Derive the parameter schema of an argument type.
///
/// Argument types without fields (`()`, unit structs) describe an empty
/// object. Subschemas are inlined so the result has no `$ref`s into
/// definitions the model never sees. The root `title`, `description` and `$schema` keys are
/// removed: the description becomes [`ParametersSchema::summary`], the rest
/// is noise in a function descriptor.
pub fn parameters_for<T: JsonSchema>() -> Result<ParametersSchema> {
    let settings = SchemaSettings::draft07().with(|s| {
        s.inline_subschemas = true;
    });
    let root = settings.into_generator().into_root_schema_for::<T>();
    let mut value = serde_json::to_value(&root)?;

    let mut summary = None;
    if let Value::Object(map) = &mut value {
        map.remove("$schema");
        map.remove("title");
        map.remove("definitions");
        if let Some(Value::String(description)) = map.remove("description") {
            summary = first_line(&description);
        }
        // `()` and unit structs take no arguments: an empty argument object.
        if map.get("type").and_then(Value::as_str) == Some("null") {
            map.insert("type".into(), json!("object"));
        }
        map.entry("properties").or_insert_with(|| json!({}));
    }

    check_parameters(&value)?;
    Ok(ParametersSchema {
        parameters: value,
        summary,
    })
}

/// Check that a parameter schema describes an argument object and compiles
/// as Draft 7 JSON Schema.
///
/// Call arguments are never validated against it.
pub fn check_parameters(parameters: &Value) -> Result<()> {
    let context = || ErrorContext::new().with_source("schema");

    if parameters.get("type").and_then(Value::as_str) != Some("object") {
        return Err(Error::configuration_with_context(
            "parameter schema must describe an object",
            context()
                .with_field_path("parameters.type")
                .with_details(format!("got {}", parameters.get("type").unwrap_or(&Value::Null))),
        ));
    }

    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(parameters)
        .map_err(|e| {
            Error::configuration_with_context(
                "parameter schema does not compile",
                context()
                    .with_field_path("parameters")
                    .with_details(e.to_string()),
            )
        })?;
    Ok(())
}

/// First non-empty line of a doc string, trimmed.
pub fn first_line(doc: &str) -> Option<String> {
    doc.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    /// Add two decimal values together.
    ///
    /// Both values are plain integers.
    #[allow(dead_code)]
    #[derive(Deserialize, JsonSchema)]
    struct AddArgs {
        /// The first value.
        value1: i64,
        /// The second value.
        value2: i64,
    }

    #[allow(dead_code)]
    #[derive(Deserialize, JsonSchema)]
    #[serde(rename_all = "lowercase")]
    enum Unit {
        Fahrenheit,
        Celsius,
    }

    #[allow(dead_code)]
    #[derive(Deserialize, JsonSchema)]
    struct WeatherArgs {
        location: String,
        unit: Option<Unit>,
    }

    #[test]
    fn test_schema_generator_basic() {
        let generator = SchemaGenerator::new()
            .add_property("name", json!({"type": "string"}))
            .add_property("age", json!({"type": "integer"}));

        let schema = generator.build();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["name"]["type"], "string");
        assert_eq!(schema["properties"]["age"]["type"], "integer");
        assert_eq!(schema["additionalProperties"], false);
    }

    #[test]
    fn test_schema_generator_required_property() {
        let schema = SchemaGenerator::new()
            .add_required_property("location", schema_from_type_name("string").unwrap())
            .add_property("unit", schema_from_type_name("string").unwrap())
            .build();
        assert_eq!(schema["required"], json!(["location"]));
        assert!(check_parameters(&schema).is_ok());
    }

    #[test]
    fn test_parameters_for_struct() {
        let schema = parameters_for::<AddArgs>().unwrap();
        let params = &schema.parameters;
        assert_eq!(params["type"], "object");
        assert_eq!(params["properties"]["value1"]["type"], "integer");
        assert_eq!(params["properties"]["value2"]["description"], "The second value.");
        assert_eq!(params["required"], json!(["value1", "value2"]));
        assert!(params.get("title").is_none());
        assert!(params.get("$schema").is_none());
        assert_eq!(
            schema.summary.as_deref(),
            Some("Add two decimal values together.")
        );
    }

    #[test]
    fn test_parameters_for_inlines_enums() {
        let schema = parameters_for::<WeatherArgs>().unwrap();
        let text = schema.parameters.to_string();
        assert!(!text.contains("$ref"));
        assert!(text.contains("fahrenheit"));
        assert_eq!(schema.parameters["required"], json!(["location"]));
        assert!(schema.summary.is_none());
    }

    #[test]
    fn test_check_parameters_rejects_non_object() {
        let err = check_parameters(&json!({"type": "string"})).unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(
            err.context().unwrap().field_path.as_deref(),
            Some("parameters.type")
        );
    }

    #[test]
    fn test_check_parameters_rejects_broken_schema() {
        let err = check_parameters(&json!({"type": "object", "minProperties": "two"})).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_schema_from_type_name() {
        assert_eq!(
            schema_from_type_name("integer").unwrap(),
            json!({"type": "integer"})
        );
        let err = schema_from_type_name("interger").unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(
            err.context().unwrap().details.as_deref(),
            Some("got \"interger\"")
        );
    }

    #[allow(dead_code)]
    #[derive(Deserialize, JsonSchema)]
    struct NoArgs;

    #[test]
    fn test_parameters_for_unit_types() {
        let empty = json!({"type": "object", "properties": {}});
        assert_eq!(parameters_for::<()>().unwrap().parameters, empty);
        assert_eq!(parameters_for::<NoArgs>().unwrap().parameters, empty);
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line("\n  Hello.\nWorld"), Some("Hello.".to_string()));
        assert_eq!(first_line("   \n"), None);
    }
}
