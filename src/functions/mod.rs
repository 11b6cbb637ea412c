//! Function registration and dispatch.
//!
//! # Functions Module
//!
//! Host code registers ordinary Rust functions as tools. Each tool is wrapped
//! once into a [`ToolDefinition`] that carries its name, description,
//! parameter schema and [`ToolBehaviorConfig`]. A [`FunctionRegistry`] keeps
//! the tools in registration order, emits the functions schema for the model
//! and dispatches the model's [`CallRequest`](crate::types::CallRequest)s.
//!
//! ## Key Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`ToolDefinition`] | Wrapped callable plus schema and behavior |
//! | [`ToolOptions`] | Name/description overrides and behavior flags |
//! | [`FunctionSet`] | Read side: schema, lookup, dispatch |
//! | [`BaseFunctionSet`] | Write side: add definitions or callables |
//! | [`FunctionRegistry`] | Ordered in-memory implementation |
//! | [`InvocationOutcome`] | Return value plus routing flags for the driver |
//!
//! ## Example
//!
//! ```rust
//! use ai_lib_functions::functions::{BaseFunctionSet, FunctionRegistry, FunctionSet, ToolOptions};
//! use ai_lib_functions::types::CallRequest;
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//!
//! /// Add two decimal values together.
//! #[derive(Deserialize, JsonSchema)]
//! struct AddDecimalValues {
//!     value1: i64,
//!     value2: i64,
//! }
//!
//! fn add_decimal_values(args: AddDecimalValues) -> anyhow::Result<i64> {
//!     Ok(args.value1 + args.value2)
//! }
//!
//! # fn main() -> ai_lib_functions::Result<()> {
//! let mut functions = FunctionRegistry::new();
//! functions.add_function(add_decimal_values)?;
//! functions
//!     .register(ToolOptions::new().name("add_quietly").save_return(false))
//!     .apply(add_decimal_values)?;
//!
//! let outcome = functions.run(&CallRequest::new(
//!     "add_decimal_values",
//!     r#"{"value1": 2, "value2": 3}"#,
//! ))?;
//! assert_eq!(outcome.content().as_deref(), Some("5"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dispatch;
pub mod result;
pub mod set;
pub mod wrapper;

pub use config::{ToolBehaviorConfig, ToolOptions};
pub use dispatch::dispatch;
pub use result::{InvocationOutcome, ReturnValue};
pub use set::{BaseFunctionSet, FunctionRegistry, FunctionSet, Registrar};
pub use wrapper::{callable_name, RawFunction, ToolDefinition, ToolFunction, TypedFunction};
