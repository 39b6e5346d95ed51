//! The set of tools offered to the model and dispatch by name.
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::core::ToolError;
use crate::google::gcal::EventFetcher;
use crate::openai::{BoxedToolCall, ToolCall};

use super::{CalendarTool, CurrentTimeTool, FutureTimeTool};

#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<BoxedToolCall>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, tool: BoxedToolCall) {
        self.tools.push(tool);
    }

    pub fn with_tool(mut self, tool: impl ToolCall + Send + Sync + 'static) -> Self {
        self.register(Box::new(tool));
        self
    }

    pub fn names(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.function_name()).collect()
    }

    /// Names of the tools that can also be called asynchronously.
    pub fn async_names(&self) -> Vec<String> {
        self.tools
            .iter()
            .filter(|t| t.as_async().is_some())
            .map(|t| t.function_name())
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&BoxedToolCall> {
        self.tools.iter().find(|t| t.function_name() == name)
    }

    pub fn call(&self, name: &str, args: &str) -> Result<String, ToolError> {
        tracing::debug!("\nTool call: {}\nargs: {}", name, args);

        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;
        tool.call(args).inspect_err(|e| {
            tracing::warn!("Tool call {} failed: {}", name, e);
        })
    }

    /// Only tools that opted into the async capability are reachable
    /// here, everything else is `ToolError::Unsupported`.
    pub async fn call_async(&self, name: &str, args: &str) -> Result<String, ToolError> {
        tracing::debug!("\nAsync tool call: {}\nargs: {}", name, args);

        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?
            .as_async()
            .ok_or_else(|| ToolError::Unsupported {
                tool: name.to_string(),
            })?;
        tool.call_async(args).await
    }
}

impl Serialize for ToolRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.tools.len()))?;
        for tool in self.tools.iter() {
            seq.serialize_element(tool)?;
        }
        seq.end()
    }
}

/// Calendar search plus the two time helpers the model needs to build
/// a date range.
pub fn calendar_tools<F>(fetcher: F) -> ToolRegistry
where
    F: EventFetcher + Send + Sync + 'static,
{
    ToolRegistry::new()
        .with_tool(CalendarTool::new(fetcher))
        .with_tool(CurrentTimeTool::new())
        .with_tool(FutureTimeTool::new())
}
