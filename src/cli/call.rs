use anyhow::Result;

use crate::ai::tools::ToolRegistry;

pub fn run(registry: &ToolRegistry, name: &str, args: &str) -> Result<()> {
    let out = registry.call(name, args)?;
    println!("{}", out);
    Ok(())
}
