use async_trait::async_trait;
use erased_serde;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::ToolError;

#[derive(Serialize)]
pub struct Property {
    pub r#type: String,
    pub description: String,
}

impl Property {
    pub fn new(r#type: &str, description: &str) -> Self {
        Self {
            r#type: r#type.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Serialize)]
pub struct Parameters<Props: Serialize> {
    pub r#type: String,
    pub properties: Props,
    pub required: Vec<String>,
    #[serde(rename = "additionalProperties")]
    pub additional_properties: bool,
}

#[derive(Serialize)]
pub struct Function<Props: Serialize> {
    pub name: String,
    pub description: String,
    pub parameters: Parameters<Props>,
    pub strict: bool,
}

#[derive(Serialize)]
pub enum ToolType {
    #[serde(rename = "function")]
    Function,
}

// `serde::Serialize` is not object safe so the trait has to lean on
// `erased_serde` for a `Vec` of boxed tools to serialize into the
// list of tool definitions the model is given.
pub trait ToolCall: erased_serde::Serialize {
    /// Run the tool with the JSON arguments the model produced.
    fn call(&self, args: &str) -> Result<String, ToolError>;

    fn function_name(&self) -> String;

    /// Tools that can run asynchronously opt in by returning
    /// themselves here. Everything else is only callable through
    /// `call`.
    fn as_async(&self) -> Option<&(dyn AsyncToolCall + Send + Sync)> {
        None
    }
}
erased_serde::serialize_trait_object!(ToolCall);

#[async_trait]
pub trait AsyncToolCall {
    async fn call_async(&self, args: &str) -> Result<String, ToolError>;
}

pub type BoxedToolCall = Box<dyn ToolCall + Send + Sync + 'static>;

/// Deserialize tool arguments, mapping any mismatch with the schema
/// to `ToolError::InvalidArguments`. Blank input counts as `{}`.
pub fn parse_args<T: DeserializeOwned>(tool: &str, args: &str) -> Result<T, ToolError> {
    let args = if args.trim().is_empty() { "{}" } else { args };
    serde_json::from_str(args).map_err(|e| ToolError::invalid_arguments(tool, e))
}
