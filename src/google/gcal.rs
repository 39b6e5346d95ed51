//! Google Calendar events lookup
use std::collections::HashMap;

use anyhow::{Result, anyhow};
use reqwest;
use serde_json::value::RawValue;

/// The events payload exactly as the API sent it. Tools hand it back
/// to the model as is.
pub type EventsResponse = Box<RawValue>;

/// Anything that can fetch calendar events for a user between two
/// RFC3339 timestamps.
pub trait EventFetcher {
    fn fetch_events(
        &self,
        user_email: &str,
        calendar_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<EventsResponse>;
}

impl<F> EventFetcher for F
where
    F: Fn(&str, &str, &str, &str) -> Result<EventsResponse>,
{
    fn fetch_events(
        &self,
        user_email: &str,
        calendar_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<EventsResponse> {
        self(user_email, calendar_id, start_date, end_date)
    }
}

pub struct GoogleCalendar {
    api_base_url: String,
    access_tokens: HashMap<String, String>,
    client: reqwest::blocking::Client,
}

impl GoogleCalendar {
    pub fn new(api_base_url: &str, access_tokens: HashMap<String, String>) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            access_tokens,
            client: reqwest::blocking::Client::new(),
        }
    }

    fn events_url(&self, calendar_id: &str, start_date: &str, end_date: &str) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&format!("{}/calendar/v3/calendars", self.api_base_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("Invalid Google API url: {}", self.api_base_url))?
            .push(calendar_id)
            .push("events");
        url.query_pairs_mut()
            .append_pair("timeMin", start_date)
            .append_pair("timeMax", end_date)
            .append_pair("singleEvents", "true")
            .append_pair("orderBy", "startTime");
        Ok(url)
    }
}

impl EventFetcher for GoogleCalendar {
    fn fetch_events(
        &self,
        user_email: &str,
        calendar_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<EventsResponse> {
        let access_token = self
            .access_tokens
            .get(user_email)
            .ok_or_else(|| anyhow!("No calendar access token for {}", user_email))?;

        let url = self.events_url(calendar_id, start_date, end_date)?;
        tracing::info!("Fetching events for {} from {}", user_email, url);

        let body = self
            .client
            .get(url)
            .bearer_auth(access_token)
            .header("Content-Type", "application/json")
            .send()?
            .error_for_status()?
            .text()?;

        Ok(RawValue::from_string(body)?)
    }
}
