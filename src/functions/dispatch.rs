//! Dispatcher: resolve a call request, invoke the tool, package the result.

use crate::functions::result::InvocationOutcome;
use crate::functions::set::FunctionSet;
use crate::types::tool::CallRequest;
use crate::{Error, Result};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Run one call request against a function set.
///
/// Arguments must parse as a JSON object but are not checked against the
/// tool's parameter schema; the schema only guides the model. Errors from the
/// tool itself are returned as they were raised. Nothing here touches
/// conversation history.
pub fn dispatch<S>(set: &S, request: &CallRequest) -> Result<InvocationOutcome>
where
    S: FunctionSet + ?Sized,
{
    let function = set.find(&request.name)?;

    let arguments: Map<String, Value> =
        serde_json::from_str(&request.raw_arguments).map_err(|source| {
            warn!(
                function = function.name(),
                error = %source,
                "function call arguments are not a JSON object"
            );
            Error::InvalidArguments {
                arguments: request.raw_arguments.clone(),
                source,
            }
        })?;

    debug!(
        function = function.name(),
        arguments = arguments.len(),
        "invoking function"
    );
    let value = function.invoke(arguments)?;

    InvocationOutcome::from_return(function.name(), value, function.behavior())
}
