//! Errors surfaced to whoever dispatches a tool call.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("no tool named {0}")]
    NotFound(String),

    /// The arguments did not match the tool's input schema. Raised
    /// before any collaborator is invoked.
    #[error("invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },

    #[error("{tool} does not support async, use the synchronous call instead")]
    Unsupported { tool: String },

    #[error("time offset for {tool} is out of range")]
    OutOfRange { tool: String },

    /// Whatever the external collaborator returned, untouched.
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

impl ToolError {
    pub fn invalid_arguments(tool: &str, reason: impl ToString) -> Self {
        Self::InvalidArguments {
            tool: tool.to_string(),
            reason: reason.to_string(),
        }
    }
}
