//! Decode command: percent-decode arguments or stdin.

use anyhow::{Context, Result};
use uenc_core::component::{decode_component, decode_component_lossy};
use uenc_core::config::UencConfig;

use super::{emit_lines, read_stdin_input};

/// Decode each argument on its own line, or stdin when no arguments.
/// Strict by default; `--lossy` (or the config default) never fails.
pub fn run_decode(cfg: &UencConfig, text: &[String], lossy: bool) -> Result<()> {
    let lossy = lossy || cfg.lossy_decode;
    let inputs: Vec<String> = if text.is_empty() {
        vec![read_stdin_input()?]
    } else {
        text.to_vec()
    };

    let mut lines = Vec::with_capacity(inputs.len());
    for input in &inputs {
        let decoded = if lossy {
            decode_component_lossy(input)
        } else {
            decode_component(input).with_context(|| format!("decode {:?}", input))?
        };
        lines.push(decoded);
    }
    emit_lines(cfg, &lines);
    Ok(())
}
