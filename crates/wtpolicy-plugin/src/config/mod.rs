//! Plugin config loader (strict parsing).
//!
//! Relative `datadir` paths, including the defaults under `demo/`, resolve
//! against the working directory the watchtower starts the plugin in, not
//! the plugin's install location. Use absolute paths when the host's
//! working directory is not fixed.

pub mod schema;

use std::{env, fs, path::Path};

use wtpolicy_core::error::{PolicyError, Result};

pub use schema::{InFlightSection, PluginConfig, WindowSection};

/// Environment variable holding the config file path.
pub const CONFIG_ENV: &str = "WTPOLICY_CONFIG";

pub fn load_from_file(path: &Path) -> Result<PluginConfig> {
    let s = fs::read_to_string(path).map_err(|e| {
        PolicyError::Config(format!("read config {} failed: {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<PluginConfig> {
    let cfg: PluginConfig = serde_yaml::from_str(s)
        .map_err(|e| PolicyError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load the file named by `WTPOLICY_CONFIG`, or built-in defaults when unset.
pub fn load_from_env() -> Result<PluginConfig> {
    match env::var_os(CONFIG_ENV) {
        Some(path) => {
            tracing::debug!(path = ?path, "loading config");
            load_from_file(Path::new(&path))
        }
        None => Ok(PluginConfig::default()),
    }
}
