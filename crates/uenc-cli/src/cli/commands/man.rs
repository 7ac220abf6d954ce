//! Man page generation.

use anyhow::Result;
use clap::CommandFactory;
use clap_mangen::Man;
use std::io::Write;

use crate::cli::Cli;

/// Render the man page to stdout.
pub fn run_man() -> Result<()> {
    let man = Man::new(Cli::command());
    let mut rendered = Vec::new();
    man.render(&mut rendered)?;
    std::io::stdout().write_all(&rendered)?;
    Ok(())
}
