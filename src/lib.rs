//! # ai-lib-functions
//!
//! Function-calling dispatch for AI-Protocol clients.
//!
//! ## Overview
//!
//! This library lets a host application expose ordinary Rust functions to a
//! language model as tools. It derives the schema the model needs, resolves
//! the model's structured call requests to the right function, and packages
//! the result together with the routing flags the session driver uses to
//! update conversation history.
//!
//! ## Core Philosophy
//!
//! - **Describe once**: parameter schemas are derived from argument types when
//!   a tool is registered, never on each call
//! - **Permissive dispatch**: arguments must be a JSON object; the schema guides
//!   the model and is not enforced against its arguments
//! - **Fail fast**: lookup, parse and tool errors surface to the caller unchanged
//! - **Driver owns history**: dispatch never mutates conversation state
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`functions`] | Tool wrapping, registry and dispatcher |
//! | [`schema`] | Parameter schema derivation and checks |
//! | [`types`] | Wire types shared with the model-facing driver |
//! | [`error`] | Error type and structured context |
//!
//! Execution is synchronous and single-threaded per call. The registry has
//! no locking; hosts that share one across threads must serialize
//! registration against dispatch themselves.

pub mod functions;
pub mod schema;
pub mod types;

// Re-export main types for convenience
pub use functions::{
    BaseFunctionSet, FunctionRegistry, FunctionSet, InvocationOutcome, ReturnValue,
    ToolBehaviorConfig, ToolDefinition, ToolOptions,
};
pub use types::{CallRequest, FunctionDefinition, ToolSchema};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
