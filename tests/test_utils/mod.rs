//! Test utilities for integration tests
use std::collections::HashMap;

use caltools::ai::tools::ToolRegistry;
use caltools::cli;
use caltools::core::AppConfig;

pub const TEST_EMAIL: &str = "a@b.com";
pub const TEST_TOKEN: &str = "test-token";

/// Creates the tool registry pointed at a mock Google API server with
/// a single authorized user.
pub fn test_registry(google_api_url: &str) -> ToolRegistry {
    let app_config = AppConfig {
        google_api_url: google_api_url.to_string(),
        google_access_tokens: HashMap::from([(TEST_EMAIL.to_string(), TEST_TOKEN.to_string())]),
    };
    cli::registry(&app_config)
}
