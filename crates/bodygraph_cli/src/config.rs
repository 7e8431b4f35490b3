//! Optional TOML settings file.
//!
//! ```toml
//! node_mode = "mean"
//!
//! [design]
//! solar_arc_deg = 88.0
//! max_iterations = 60
//! ```

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use bodygraph_ephem::NodeMode;
use bodygraph_search::{ChartConfig, DesignSearchConfig};

/// Settings read from `--config`. Every field is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub node_mode: NodeMode,
    pub design: DesignSearchConfig,
}

impl CliConfig {
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(text).context("parsing config")?;
        config
            .design
            .validate()
            .map_err(|msg| anyhow::anyhow!("invalid [design] section: {msg}"))?;
        Ok(config)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config =
            Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded settings");
        Ok(config)
    }

    /// File settings, or defaults when no file was given.
    pub fn resolve(path: Option<&Path>) -> anyhow::Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    pub fn chart_config(&self) -> ChartConfig {
        ChartConfig {
            design: self.design,
        }
    }
}
