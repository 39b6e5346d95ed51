use crate::core::ToolError;
use crate::core::time::{format_timestamp, now_timestamp, shift, time_offset};
use crate::openai::{Function, Parameters, Property, ToolCall, ToolType, parse_args};
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct CurrentTimeProps {}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurrentTimeArgs {}

#[derive(Serialize)]
pub struct CurrentTimeTool {
    pub r#type: ToolType,
    pub function: Function<CurrentTimeProps>,
}

impl ToolCall for CurrentTimeTool {
    fn call(&self, args: &str) -> Result<String, ToolError> {
        let _: CurrentTimeArgs = parse_args(&self.function.name, args)?;
        Ok(now_timestamp())
    }

    fn function_name(&self) -> String {
        self.function.name.clone()
    }
}

impl CurrentTimeTool {
    pub fn new() -> Self {
        let function = Function {
            name: String::from("get_current_time"),
            description: String::from(
                "Useful when you want to get the current time in an RFC3339 timestamp with mandatory time zone offset, for example, 2011-06-03T10:00:00-07:00, 2011-06-03T10:00:00Z.",
            ),
            parameters: Parameters {
                r#type: String::from("object"),
                properties: CurrentTimeProps {},
                required: vec![],
                additional_properties: false,
            },
            strict: true,
        };
        Self {
            r#type: ToolType::Function,
            function,
        }
    }
}

impl Default for CurrentTimeTool {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
pub struct FutureTimeProps {
    pub delta_days: Property,
    pub delta_hours: Property,
    pub delta_minutes: Property,
    pub delta_seconds: Property,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FutureTimeArgs {
    pub delta_days: i64,
    pub delta_hours: i64,
    pub delta_minutes: i64,
    pub delta_seconds: i64,
}

#[derive(Serialize)]
pub struct FutureTimeTool {
    pub r#type: ToolType,
    pub function: Function<FutureTimeProps>,
}

impl ToolCall for FutureTimeTool {
    fn call(&self, args: &str) -> Result<String, ToolError> {
        let fn_args: FutureTimeArgs = parse_args(&self.function.name, args)?;
        self.run(&fn_args)
    }

    fn function_name(&self) -> String {
        self.function.name.clone()
    }
}

impl FutureTimeTool {
    pub fn new() -> Self {
        let delta = |unit: &str| {
            Property::new(
                "integer",
                &format!("Number of {} to add to the current time. Must be an integer.", unit),
            )
        };
        let function = Function {
            name: String::from("get_future_time"),
            description: String::from(
                "Useful when you want to get a future time in an RFC3339 timestamp, given a time delta such as 1 day, 2 hours, 3 minutes, 4 seconds.",
            ),
            parameters: Parameters {
                r#type: String::from("object"),
                properties: FutureTimeProps {
                    delta_days: delta("days"),
                    delta_hours: delta("hours"),
                    delta_minutes: delta("minutes"),
                    delta_seconds: delta("seconds"),
                },
                required: vec![
                    String::from("delta_days"),
                    String::from("delta_hours"),
                    String::from("delta_minutes"),
                    String::from("delta_seconds"),
                ],
                additional_properties: false,
            },
            strict: true,
        };
        Self {
            r#type: ToolType::Function,
            function,
        }
    }

    /// Current time plus the offsets. Negative offsets are allowed and
    /// land in the past.
    pub fn run(&self, args: &FutureTimeArgs) -> Result<String, ToolError> {
        let out_of_range = || ToolError::OutOfRange {
            tool: self.function.name.clone(),
        };
        let delta = time_offset(
            args.delta_days,
            args.delta_hours,
            args.delta_minutes,
            args.delta_seconds,
        )
        .ok_or_else(out_of_range)?;
        let future = shift(Utc::now(), delta).ok_or_else(out_of_range)?;

        Ok(format_timestamp(future))
    }
}

impl Default for FutureTimeTool {
    fn default() -> Self {
        Self::new()
    }
}
