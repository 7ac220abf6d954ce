//! CLI for the uenc URL component encoder.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use uenc_core::config;

use commands::{run_completions, run_decode, run_encode, run_man, run_query};

/// Top-level CLI for the uenc URL component encoder.
#[derive(Debug, Parser)]
#[command(name = "uenc")]
#[command(about = "uenc: strict URL component encoder/decoder", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Percent-encode text as a URL component.
    Encode {
        /// Text to encode, one result line per argument; reads stdin when
        /// empty.
        text: Vec<String>,
    },

    /// Decode percent-encoded text.
    Decode {
        /// Text to decode, one result line per argument; reads stdin when
        /// empty.
        text: Vec<String>,

        /// Pass malformed escapes through instead of failing.
        #[arg(long)]
        lossy: bool,
    },

    /// Compose a query string from key=value pairs and/or a JSON object.
    Query {
        /// Raw key=value pair (repeatable, order preserved).
        #[arg(short = 'p', long = "pair", value_name = "KEY=VALUE")]
        pairs: Vec<String>,

        /// Flat JSON object whose entries are appended after the -p pairs.
        #[arg(long, value_name = "JSON")]
        json: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Encode { text } => run_encode(&cfg, &text)?,
            CliCommand::Decode { text, lossy } => run_decode(&cfg, &text, lossy)?,
            CliCommand::Query { pairs, json } => run_query(&cfg, &pairs, json.as_deref())?,
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
