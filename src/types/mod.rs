//! Wire types shared with the model-facing driver.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`FunctionDefinition`] | `{name, description, parameters}` descriptor sent to the model |
//! | [`ToolSchema`] | Tools API envelope around a [`FunctionDefinition`] |
//! | [`CallRequest`] | Function call produced by the model |

pub mod tool;

pub use tool::{CallRequest, FunctionDefinition, ToolSchema};
