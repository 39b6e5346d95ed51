use anyhow::Result;

use crate::ai::tools::ToolRegistry;

pub fn run(registry: &ToolRegistry) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(registry)?);
    Ok(())
}
