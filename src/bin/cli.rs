// src/bin/cli.rs
use thematic_scrape::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();
    cli::run()?;
    Ok(())
}
