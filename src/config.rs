//! Runtime configuration, read from an optional JSON blob embedded in the page.

use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{ClickerError, ClickerResult};

/// DOM id of the `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "clicker-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Scheduler interval in milliseconds (100ms = 10 ticks/sec).
    pub tick_ms: u32,
    /// Largest frame delta fed to the scheduler, so a backgrounded tab
    /// does not come back to a burst of ticks.
    pub max_frame_ms: f64,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            max_frame_ms: 500.0,
            log_level: "info".into(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ClickerResult<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ClickerResult<()> {
        if self.tick_ms == 0 {
            return Err(ClickerError::InvalidConfig("tick_ms must be positive".into()));
        }
        if !(self.max_frame_ms >= self.tick_ms as f64) {
            return Err(ClickerError::InvalidConfig(format!(
                "max_frame_ms ({}) must be at least tick_ms ({})",
                self.max_frame_ms, self.tick_ms
            )));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> ClickerResult<LevelFilter> {
        LevelFilter::from_str(&self.log_level).map_err(|_| {
            ClickerError::InvalidConfig(format!("unknown log level '{}'", self.log_level))
        })
    }

    /// Tick interval expressed in seconds (the fraction passed to each tick).
    pub fn tick_seconds(&self) -> f64 {
        self.tick_ms as f64 / 1000.0
    }
}
