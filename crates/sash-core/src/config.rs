// ABOUTME: Split container configuration handling.
// ABOUTME: Loads and saves pane sizes, bounds and drag behavior from TOML files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{SizeSpec, Split};

/// Per-pane bounds, resolved against the container extent each layout pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaneConfig {
    /// Smallest size a drag may shrink this pane to (absent = 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_size: Option<SizeSpec>,

    /// Largest size a drag may grow this pane to (absent = unbounded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<SizeSpec>,
}

impl PaneConfig {
    pub fn new(min_size: Option<SizeSpec>, max_size: Option<SizeSpec>) -> Self {
        Self { min_size, max_size }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Which way the container is divided
    pub split: Split,

    /// One size request per pane, in order. Its length is the pane count.
    pub sizes: Vec<SizeSpec>,

    /// When false dividers are drawn but ignore the pointer
    pub allow_resize: bool,

    /// Divider thickness in pixels, centered on each divider position
    pub resizer_size: f64,

    /// Keep showing the drag-start layout until the drag is released
    pub performance_mode: bool,

    /// Bounds per pane; missing entries get the default [0, unbounded)
    pub panes: Vec<PaneConfig>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            split: Split::Vertical,
            sizes: vec![SizeSpec::Auto, SizeSpec::Auto],
            allow_resize: true,
            resizer_size: 4.0,
            performance_mode: false,
            panes: Vec::new(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl SplitConfig {
    pub fn pane_count(&self) -> usize {
        self.sizes.len()
    }

    /// Bounds for pane `index`, or the defaults if none were declared
    pub fn pane(&self, index: usize) -> PaneConfig {
        self.panes.get(index).cloned().unwrap_or_default()
    }

    /// Get the default config file path (~/.config/sash/split.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sash").join("split.toml"))
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str(content)?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
