use std::collections::HashMap;
use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub google_api_url: String,
    /// Access tokens for the Google Calendar API keyed by the user's
    /// email address.
    pub google_access_tokens: HashMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let google_api_url = env::var("CALTOOLS_GOOGLE_API_URL")
            .unwrap_or_else(|_| "https://www.googleapis.com".to_string());
        let google_access_tokens = env::var("CALTOOLS_GOOGLE_ACCESS_TOKENS")
            .map(|s| parse_access_tokens(&s))
            .unwrap_or_default();

        Self {
            google_api_url,
            google_access_tokens,
        }
    }
}

/// Parse `email=token` pairs separated by commas.
pub fn parse_access_tokens(raw: &str) -> HashMap<String, String> {
    let mut tokens = HashMap::new();
    for pair in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match pair.split_once('=') {
            Some((email, token)) if !email.trim().is_empty() && !token.trim().is_empty() => {
                tokens.insert(email.trim().to_string(), token.trim().to_string());
            }
            _ => tracing::warn!("Skipping malformed access token entry: {}", pair),
        }
    }
    tokens
}
