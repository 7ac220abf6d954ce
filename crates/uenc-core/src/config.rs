use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/uenc/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UencConfig {
    /// Terminate CLI output with a newline.
    #[serde(default = "default_trailing_newline")]
    pub trailing_newline: bool,
    /// Use the lossy decoder by default in `uenc decode` (the `--lossy`
    /// flag always forces it on).
    #[serde(default)]
    pub lossy_decode: bool,
}

fn default_trailing_newline() -> bool {
    true
}

impl Default for UencConfig {
    fn default() -> Self {
        Self {
            trailing_newline: true,
            lossy_decode: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("uenc")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UencConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UencConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UencConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = UencConfig::default();
        assert!(cfg.trailing_newline);
        assert!(!cfg.lossy_decode);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = UencConfig {
            trailing_newline: false,
            lossy_decode: true,
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: UencConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.trailing_newline, cfg.trailing_newline);
        assert_eq!(parsed.lossy_decode, cfg.lossy_decode);
    }

    #[test]
    fn config_toml_missing_fields_use_defaults() {
        let cfg: UencConfig = toml::from_str("").unwrap();
        assert!(cfg.trailing_newline);
        assert!(!cfg.lossy_decode);

        let cfg: UencConfig = toml::from_str("lossy_decode = true").unwrap();
        assert!(cfg.trailing_newline);
        assert!(cfg.lossy_decode);
    }
}
