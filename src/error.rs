use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or option that caused the error (e.g., "name", "parameters.type")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected type, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "function_wrapper", "dispatcher")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for function registration and dispatch.
///
/// Errors raised by a tool's own callable are carried by [`Error::Tool`]
/// untouched; use [`anyhow::Error::downcast_ref`] to recover the original type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Function not found: {name:?}")]
    FunctionNotFound { name: String },

    #[error("Invalid JSON arguments {arguments:?}: {source}")]
    InvalidArguments {
        /// The raw argument string exactly as received from the model.
        arguments: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Arguments do not bind to function {function:?}: {source}")]
    ArgumentBinding {
        function: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config file error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error(transparent)]
    Tool(anyhow::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Wrap an error raised by a tool's callable.
    pub fn tool(err: impl Into<anyhow::Error>) -> Self {
        Error::Tool(err.into())
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::FunctionNotFound { .. })
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_display_includes_context() {
        let err = Error::configuration_with_context(
            "no discoverable name",
            ErrorContext::new()
                .with_field_path("name")
                .with_source("function_wrapper"),
        );
        assert_eq!(
            err.to_string(),
            "Configuration error: no discoverable name (field: name, source: function_wrapper)"
        );
        assert_eq!(err.context().unwrap().field_path.as_deref(), Some("name"));
    }

    #[test]
    fn test_configuration_display_without_context() {
        let err = Error::configuration_with_context("bad", ErrorContext::default());
        assert_eq!(err.to_string(), "Configuration error: bad");
    }

    #[test]
    fn test_tool_error_is_transparent() {
        #[derive(Debug, thiserror::Error)]
        #[error("disk on fire")]
        struct Fire;

        let err = Error::tool(Fire);
        assert_eq!(err.to_string(), "disk on fire");
        match err {
            Error::Tool(inner) => assert!(inner.downcast_ref::<Fire>().is_some()),
            other => panic!("unexpected {other:?}"),
        }
    }
}
