use anyhow::Result;
use caltools::cli;

fn main() -> Result<()> {
    cli::run()
}
