use std::path::PathBuf;

use serde::Deserialize;
use wtpolicy_core::engine::in_flight::DEFAULT_MAX_IN_FLIGHT;
use wtpolicy_core::engine::window::{DEFAULT_MAX_PER_WINDOW, DEFAULT_WINDOW_BLOCKS};
use wtpolicy_core::engine::{InFlightLimiter, WindowLimiter};
use wtpolicy_core::error::{PolicyError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginConfig {
    pub version: u32,

    #[serde(default)]
    pub in_flight: InFlightSection,

    #[serde(default)]
    pub per_window: WindowSection,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            version: 1,
            in_flight: InFlightSection::default(),
            per_window: WindowSection::default(),
        }
    }
}

impl PluginConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PolicyError::UnsupportedVersion);
        }
        self.in_flight.validate()?;
        self.per_window.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InFlightSection {
    #[serde(default = "default_in_flight_datadir")]
    pub datadir: PathBuf,

    #[serde(default = "default_max_in_flight")]
    pub max_value: u64,
}

impl Default for InFlightSection {
    fn default() -> Self {
        Self {
            datadir: default_in_flight_datadir(),
            max_value: default_max_in_flight(),
        }
    }
}

impl InFlightSection {
    pub fn validate(&self) -> Result<()> {
        if self.datadir.as_os_str().is_empty() {
            return Err(PolicyError::Config("in_flight.datadir must not be empty".into()));
        }
        if self.max_value == 0 {
            return Err(PolicyError::Config("in_flight.max_value must be positive".into()));
        }
        Ok(())
    }

    pub fn engine(&self) -> InFlightLimiter {
        InFlightLimiter::new(self.max_value)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowSection {
    #[serde(default = "default_window_datadir")]
    pub datadir: PathBuf,

    #[serde(default = "default_max_per_window")]
    pub max_value: u64,

    #[serde(default = "default_window_blocks")]
    pub window_blocks: u64,
}

impl Default for WindowSection {
    fn default() -> Self {
        Self {
            datadir: default_window_datadir(),
            max_value: default_max_per_window(),
            window_blocks: default_window_blocks(),
        }
    }
}

impl WindowSection {
    pub fn validate(&self) -> Result<()> {
        if self.datadir.as_os_str().is_empty() {
            return Err(PolicyError::Config("per_window.datadir must not be empty".into()));
        }
        if self.max_value == 0 {
            return Err(PolicyError::Config("per_window.max_value must be positive".into()));
        }
        if self.window_blocks == 0 {
            return Err(PolicyError::Config(
                "per_window.window_blocks must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn engine(&self) -> WindowLimiter {
        WindowLimiter::new(self.max_value, self.window_blocks)
    }
}

// Relative to the process working directory.
fn default_in_flight_datadir() -> PathBuf {
    PathBuf::from("demo/max_value_flight_datadir")
}
fn default_max_in_flight() -> u64 {
    DEFAULT_MAX_IN_FLIGHT
}
fn default_window_datadir() -> PathBuf {
    PathBuf::from("demo/max_value_day_datadir")
}
fn default_max_per_window() -> u64 {
    DEFAULT_MAX_PER_WINDOW
}
fn default_window_blocks() -> u64 {
    DEFAULT_WINDOW_BLOCKS
}
