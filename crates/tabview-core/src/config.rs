//! Control configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use tabview_host::ResourceTable;
use tabview_input::PlatformCapabilities;
use tabview_layout::{WidthMode, DEFAULT_MAX_TAB_WIDTH, DEFAULT_MIN_TAB_WIDTH};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial width mode
    pub tab_width_mode: WidthMode,
    /// Distance the scroll buttons move the tab strip
    pub scroll_amount: f64,
    /// What the input stack supports
    pub capabilities: PlatformCapabilities,
    /// String and number resources, including the tab width bounds
    pub resources: ResourceTable,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), "Loaded tab view config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        use tabview_host::{resource_keys, ResourceProvider};

        if !self.scroll_amount.is_finite() || self.scroll_amount <= 0.0 {
            return Err(CoreError::Config(format!(
                "scroll_amount must be a positive number, got {}",
                self.scroll_amount
            )));
        }

        let min = self
            .resources
            .number(resource_keys::TAB_MIN_WIDTH, DEFAULT_MIN_TAB_WIDTH);
        let max = self
            .resources
            .number(resource_keys::TAB_MAX_WIDTH, DEFAULT_MAX_TAB_WIDTH);
        if min > max {
            return Err(CoreError::Config(format!(
                "{} ({}) exceeds {} ({})",
                resource_keys::TAB_MIN_WIDTH,
                min,
                resource_keys::TAB_MAX_WIDTH,
                max
            )));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_width_mode: WidthMode::default(),
            scroll_amount: 50.0,
            capabilities: PlatformCapabilities::default(),
            resources: ResourceTable::default(),
        }
    }
}
