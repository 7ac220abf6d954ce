//! Query command: compose a query string from pairs and/or JSON.

use anyhow::{bail, Context, Result};
use uenc_core::config::UencConfig;
use uenc_core::query::QueryPairs;
use uenc_core::value::Value;

use super::emit_lines;

/// Compose `k=v&...` from repeated `-p key=value` pairs, then the entries
/// of a flat JSON object if one is given.
pub fn run_query(cfg: &UencConfig, pairs: &[String], json: Option<&str>) -> Result<()> {
    let mut query = QueryPairs::new();

    for raw in pairs {
        let (key, value) = match raw.split_once('=') {
            Some(split) => split,
            None => bail!("pair {:?} is not KEY=VALUE", raw),
        };
        query.push_str(key, value);
    }

    if let Some(json) = json {
        let parsed: serde_json::Value = serde_json::from_str(json).context("parse --json")?;
        let value = Value::from_json(&parsed)?;
        let from_json = QueryPairs::from_value(&value)?;
        for (key, val) in from_json.pairs() {
            query.push_str(key, val);
        }
    }

    if query.is_empty() {
        bail!("nothing to encode: pass -p pairs or --json");
    }

    emit_lines(cfg, &[query.encode()]);
    Ok(())
}
