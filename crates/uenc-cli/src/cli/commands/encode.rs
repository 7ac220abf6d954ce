//! Encode command: percent-encode arguments or stdin.

use anyhow::Result;
use uenc_core::component::encode_component;
use uenc_core::config::UencConfig;

use super::{emit_lines, read_stdin_input};

/// Encode each argument on its own line, or stdin when no arguments.
pub fn run_encode(cfg: &UencConfig, text: &[String]) -> Result<()> {
    let lines: Vec<String> = if text.is_empty() {
        vec![encode_component(&read_stdin_input()?)]
    } else {
        text.iter().map(|arg| encode_component(arg)).collect()
    };
    emit_lines(cfg, &lines);
    Ok(())
}
