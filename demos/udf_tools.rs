//! Registers a few user-defined functions and dispatches model-style calls.
//!
//! Run with: RUST_LOG=debug cargo run --example udf_tools

use ai_lib_functions::functions::{BaseFunctionSet, FunctionRegistry, FunctionSet, ToolOptions};
use ai_lib_functions::schema::{schema_from_type_name, SchemaGenerator};
use ai_lib_functions::{CallRequest, ToolBehaviorConfig, ToolDefinition};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing_subscriber::EnvFilter;

/// Add two decimal values together.
#[derive(Deserialize, JsonSchema)]
struct AddDecimalValues {
    /// The first value.
    value1: i64,
    /// The second value.
    value2: i64,
}

fn add_decimal_values(args: AddDecimalValues) -> anyhow::Result<i64> {
    Ok(args.value1 + args.value2)
}

/// Add two hexadecimal values together.
#[derive(Deserialize, JsonSchema)]
struct AddHexadecimalValues {
    /// The first value, in hexadecimal.
    value1: String,
    /// The second value, in hexadecimal.
    value2: String,
}

fn add_hexadecimal_values(args: AddHexadecimalValues) -> anyhow::Result<String> {
    let sum = u64::from_str_radix(&args.value1, 16)? + u64::from_str_radix(&args.value2, 16)?;
    Ok(format!("{sum:x}"))
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
enum Unit {
    #[default]
    Fahrenheit,
    Celsius,
}

/// Get the current weather in a given location.
#[derive(Deserialize, JsonSchema)]
struct GetCurrentWeather {
    /// The location to get the weather for
    location: String,
    /// The unit to return the temperature in
    #[serde(default)]
    unit: Unit,
}

#[derive(Serialize)]
struct Weather {
    location: String,
    temperature: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<Unit>,
}

fn get_current_weather(args: GetCurrentWeather) -> anyhow::Result<Weather> {
    let known = [
        ("tokyo", "Tokyo", "10"),
        ("san francisco", "San Francisco", "72"),
        ("paris", "Paris", "22"),
    ];
    let lower = args.location.to_lowercase();
    let weather = match known.iter().find(|(key, _, _)| lower.contains(key)) {
        Some((_, location, temperature)) => Weather {
            location: location.to_string(),
            temperature: *temperature,
            unit: Some(args.unit),
        },
        None => Weather {
            location: args.location,
            temperature: "unknown",
            unit: None,
        },
    };
    Ok(weather)
}

fn generate_merge_dml(arguments: Map<String, Value>) -> ai_lib_functions::Result<Value> {
    let table = arguments
        .get("table")
        .and_then(Value::as_str)
        .unwrap_or("TARGET");
    Ok(Value::String(format!(
        "MERGE INTO {table} t USING {table}_STAGING s ON t.id = s.id \
         WHEN MATCHED THEN UPDATE SET t.v = s.v \
         WHEN NOT MATCHED THEN INSERT (id, v) VALUES (s.id, s.v)"
    )))
}

fn main() -> ai_lib_functions::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut functions = FunctionRegistry::new();
    functions.add_function(add_decimal_values)?;
    functions
        .register(ToolOptions::new().serialize(false))
        .apply(add_hexadecimal_values)?;
    functions.add_function(get_current_weather)?;

    let parameters = SchemaGenerator::new()
        .add_required_property("table", schema_from_type_name("string")?)
        .build();
    functions.add(
        ToolDefinition::new(
            "generate_merge_dml",
            "Generate an example MERGE statement for a table",
            parameters,
            generate_merge_dml,
        )?
        .with_behavior(
            ToolBehaviorConfig::new()
                .serialize(false)
                .interpret_as_response(true),
        ),
    );

    let schema = serde_json::to_string_pretty(&functions.functions_schema())?;
    tracing::info!("functions schema:\n{schema}");

    let calls = [
        CallRequest::new("add_decimal_values", r#"{"value1": 2, "value2": 3}"#),
        CallRequest::new("add_hexadecimal_values", r#"{"value1": "ff", "value2": "1"}"#),
        CallRequest::new("get_current_weather", r#"{"location": "Tokyo, Japan"}"#),
        CallRequest::new("generate_merge_dml", r#"{"table": "ORDERS"}"#),
    ];
    for call in &calls {
        let outcome = functions.run(call)?;
        tracing::info!(
            function = %outcome.tool_name,
            content = ?outcome.content(),
            final_answer = outcome.interpret_as_response,
            "function result"
        );
    }

    match functions.run(&CallRequest::new("drop_database", "{}")) {
        Err(err) => tracing::info!("expected failure: {err}"),
        Ok(outcome) => tracing::warn!(?outcome, "unexpected success"),
    }
    Ok(())
}
