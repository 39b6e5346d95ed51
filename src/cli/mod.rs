use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod call;
pub mod tools;

use crate::ai::tools::{ToolRegistry, calendar_tools};
use crate::core::AppConfig;
use crate::google::gcal::GoogleCalendar;

#[derive(Subcommand)]
enum Command {
    /// Print the tool definitions given to the model
    Tools {},
    /// Call a tool with JSON arguments and print the result
    Call {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

/// Build the registry backed by the Google Calendar API.
pub fn registry(config: &AppConfig) -> ToolRegistry {
    calendar_tools(GoogleCalendar::new(
        &config.google_api_url,
        config.google_access_tokens.clone(),
    ))
}

pub fn run() -> Result<()> {
    let args = Cli::parse();

    // Logs go to stderr so stdout only has tool output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::default();
    let registry = registry(&config);

    match args.command {
        Some(Command::Tools {}) => {
            tools::run(&registry)?;
        }
        Some(Command::Call { name, args }) => {
            call::run(&registry, &name, &args)?;
        }
        None => {}
    }

    Ok(())
}
