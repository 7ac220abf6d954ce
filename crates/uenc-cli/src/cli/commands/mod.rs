//! CLI command handlers. Each command is in its own file.

mod completions;
mod decode;
mod encode;
mod man;
mod query;

pub use completions::run_completions;
pub use decode::run_decode;
pub use encode::run_encode;
pub use man::run_man;
pub use query::run_query;

use anyhow::{Context, Result};
use std::io::Read;
use uenc_core::config::UencConfig;

/// Read stdin to EOF, stripping one trailing newline (and a carriage
/// return before it, for piped Windows-style input).
fn read_stdin_input() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("read stdin")?;
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}

/// Print output lines joined by newlines, honoring trailing_newline.
fn emit_lines(cfg: &UencConfig, lines: &[String]) {
    let body = lines.join("\n");
    if cfg.trailing_newline {
        println!("{}", body);
    } else {
        print!("{}", body);
    }
}
