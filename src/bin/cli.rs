// src/bin/cli.rs
use cat_tracker::cli;
use color_eyre::eyre::{eyre, Result};

fn main() -> Result<()> {
    color_eyre::install()?;
    cli::run(std::env::args().skip(1)).map_err(|e| eyre!("{e}"))
}
