use crate::core::ToolError;
use crate::google::gcal::{EventFetcher, EventsResponse};
use crate::openai::{Function, Parameters, Property, ToolCall, ToolType, parse_args};
use serde::{Deserialize, Serialize};

const TIMESTAMP_HINT: &str = "Must be an RFC3339 timestamp with mandatory time zone offset, for example, 2011-06-03T10:00:00-07:00, 2011-06-03T10:00:00Z.";

#[derive(Serialize)]
pub struct CalendarProps {
    pub user_email: Property,
    pub calendar_id: Property,
    pub start_date: Property,
    pub end_date: Property,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarArgs {
    pub user_email: String,
    pub calendar_id: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Serialize)]
pub struct CalendarTool<F: EventFetcher> {
    pub r#type: ToolType,
    pub function: Function<CalendarProps>,
    #[serde(skip)]
    fetcher: F,
}

impl<F: EventFetcher> ToolCall for CalendarTool<F> {
    fn call(&self, args: &str) -> Result<String, ToolError> {
        let fn_args: CalendarArgs = parse_args(&self.function.name, args)?;
        let events = self.run(fn_args)?;
        Ok(events.get().to_string())
    }

    fn function_name(&self) -> String {
        self.function.name.clone()
    }
}

impl<F: EventFetcher> CalendarTool<F> {
    pub fn new(fetcher: F) -> Self {
        let function = Function {
            name: String::from("get_calendar_events"),
            description: String::from(
                "Useful when you want to get calendar events in a particular date or time range after you have retrieved the current time.",
            ),
            parameters: Parameters {
                r#type: String::from("object"),
                properties: CalendarProps {
                    user_email: Property::new("string", "Email of the user."),
                    calendar_id: Property::new(
                        "string",
                        "Calendar id of the calendar, for example, primary.",
                    ),
                    start_date: Property {
                        r#type: String::from("string"),
                        description: format!(
                            "Start date of the events to search. {}",
                            TIMESTAMP_HINT
                        ),
                    },
                    end_date: Property {
                        r#type: String::from("string"),
                        description: format!(
                            "End date of the events to search. {}",
                            TIMESTAMP_HINT
                        ),
                    },
                },
                required: vec![
                    String::from("user_email"),
                    String::from("calendar_id"),
                    String::from("start_date"),
                    String::from("end_date"),
                ],
                additional_properties: false,
            },
            strict: true,
        };

        Self {
            r#type: ToolType::Function,
            function,
            fetcher,
        }
    }

    /// Hand the query to the fetcher and return whatever it gives
    /// back. The dates are passed through without checking their
    /// format or order.
    pub fn run(&self, args: CalendarArgs) -> Result<EventsResponse, ToolError> {
        if args.user_email.is_empty() {
            return Err(ToolError::invalid_arguments(
                &self.function.name,
                "user_email must not be empty",
            ));
        }

        let events = self.fetcher.fetch_events(
            &args.user_email,
            &args.calendar_id,
            &args.start_date,
            &args.end_date,
        )?;
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, anyhow};
    use serde_json::json;
    use serde_json::value::RawValue;
    use std::sync::{Arc, Mutex};

    /// Records every call and answers with a fixed payload.
    #[derive(Clone)]
    struct RecordingFetcher {
        calls: Arc<Mutex<Vec<[String; 4]>>>,
        response: String,
    }

    impl RecordingFetcher {
        fn new(response: &str) -> Self {
            Self {
                calls: Arc::new(Mutex::new(vec![])),
                response: response.to_string(),
            }
        }

        fn calls(&self) -> Vec<[String; 4]> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl EventFetcher for RecordingFetcher {
        fn fetch_events(
            &self,
            user_email: &str,
            calendar_id: &str,
            start_date: &str,
            end_date: &str,
        ) -> Result<EventsResponse> {
            self.calls.lock().unwrap().push([
                user_email.to_string(),
                calendar_id.to_string(),
                start_date.to_string(),
                end_date.to_string(),
            ]);
            Ok(RawValue::from_string(self.response.clone())?)
        }
    }

    const ARGS: &str = r#"{
        "user_email": "a@b.com",
        "calendar_id": "primary",
        "start_date": "2024-01-01T00:00:00Z",
        "end_date": "2024-01-02T00:00:00Z"
    }"#;

    #[test]
    fn it_passes_events_through() {
        let response = r#"{"nextPageToken": "abc", "items": [{"id": "evt1", "summary": "Standup"}]}"#;
        let fetcher = RecordingFetcher::new(response);
        let tool = CalendarTool::new(fetcher.clone());

        let out = tool.call(ARGS).unwrap();

        assert_eq!(out, response);
        assert_eq!(
            fetcher.calls(),
            vec![[
                String::from("a@b.com"),
                String::from("primary"),
                String::from("2024-01-01T00:00:00Z"),
                String::from("2024-01-02T00:00:00Z"),
            ]]
        );
    }

    #[test]
    fn it_does_not_fetch_when_args_are_missing() {
        let fetcher = RecordingFetcher::new("{}");
        let tool = CalendarTool::new(fetcher.clone());

        let err = tool
            .call(r#"{"user_email": "a@b.com", "start_date": "2024-01-01T00:00:00Z", "end_date": "2024-01-02T00:00:00Z"}"#)
            .unwrap_err();

        assert!(matches!(err, ToolError::InvalidArguments { .. }));
        assert!(err.to_string().contains("calendar_id"));
        assert!(fetcher.calls().is_empty());
    }

    #[test]
    fn it_does_not_fetch_for_empty_email() {
        let fetcher = RecordingFetcher::new("{}");
        let tool = CalendarTool::new(fetcher.clone());

        let err = tool
            .call(r#"{"user_email": "", "calendar_id": "primary", "start_date": "x", "end_date": "y"}"#)
            .unwrap_err();

        assert!(matches!(err, ToolError::InvalidArguments { .. }));
        assert!(fetcher.calls().is_empty());
    }

    #[test]
    fn it_passes_any_calendar_id_through() {
        let fetcher = RecordingFetcher::new("{}");
        let tool = CalendarTool::new(fetcher.clone());

        for calendar_id in ["", "  "] {
            let args = json!({
                "user_email": " ",
                "calendar_id": calendar_id,
                "start_date": "2024-01-01T00:00:00Z",
                "end_date": "2024-01-02T00:00:00Z"
            });
            assert_eq!(tool.call(&args.to_string()).unwrap(), "{}");
        }

        let calls = fetcher.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0][0], " ");
        assert_eq!(calls[0][1], "");
        assert_eq!(calls[1][1], "  ");
    }

    #[test]
    fn it_keeps_large_numbers_and_key_order() {
        let response = r#"{"kind":"calendar#events","sequence":123456789012345678901234567890,"items":[]}"#;
        let tool = CalendarTool::new(RecordingFetcher::new(response));

        assert_eq!(tool.call(ARGS).unwrap(), response);
    }

    #[test]
    fn it_does_not_check_the_date_range() {
        let fetcher = RecordingFetcher::new(r#"{"items":[]}"#);
        let tool = CalendarTool::new(fetcher.clone());

        let out = tool
            .call(r#"{"user_email": "a@b.com", "calendar_id": "primary", "start_date": "2024-02-01T00:00:00Z", "end_date": "2024-01-01T00:00:00Z"}"#)
            .unwrap();

        assert_eq!(out, r#"{"items":[]}"#);
        assert_eq!(fetcher.calls().len(), 1);
    }

    #[test]
    fn it_propagates_fetch_errors() {
        let tool = CalendarTool::new(|_: &str, _: &str, _: &str, _: &str| -> Result<EventsResponse> {
            Err(anyhow!("calendar is on fire"))
        });

        let err = tool.call(ARGS).unwrap_err();

        assert!(matches!(err, ToolError::Upstream(_)));
        assert_eq!(err.to_string(), "calendar is on fire");
    }

    #[test]
    fn it_describes_the_tool() {
        let fetcher = RecordingFetcher::new("{}");
        let tool = CalendarTool::new(fetcher.clone());
        let def = serde_json::to_value(&tool).unwrap();

        assert_eq!(tool.function_name(), "get_calendar_events");
        assert!(tool.as_async().is_none());
        assert_eq!(def["type"], "function");
        assert_eq!(def["function"]["name"], "get_calendar_events");
        assert_eq!(
            def["function"]["parameters"]["required"],
            json!(["user_email", "calendar_id", "start_date", "end_date"])
        );
        assert_eq!(def["function"]["parameters"]["properties"]["start_date"]["type"], "string");
        assert!(
            def["function"]["parameters"]["properties"]["end_date"]["description"]
                .as_str()
                .unwrap()
                .contains("RFC3339")
        );
        assert!(def.get("fetcher").is_none());
    }
}
