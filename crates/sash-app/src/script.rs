// ABOUTME: Pointer/resize scripts replayed against a split container.
// ABOUTME: JSON format with one tagged entry per host event.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// The container was measured at a new main-axis extent
    Resize { extent: f64 },
    /// Pointer entered divider `sash`
    Enter {
        sash: usize,
        #[serde(default)]
        at_ms: u64,
    },
    /// Pointer left divider `sash`
    Leave { sash: usize },
    /// Advance hover timers
    Tick { at_ms: u64 },
    /// Button pressed at (x, y). Without `sash` the divider under the
    /// pointer is looked up in the current frame.
    Down {
        #[serde(default)]
        sash: Option<usize>,
        x: f64,
        y: f64,
    },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Script {
    /// Extent applied before the first event
    pub extent: f64,
    /// Size of the container along the other axis, for hit testing and rects
    pub cross_extent: f64,
    pub events: Vec<ScriptEvent>,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            extent: 0.0,
            cross_extent: 100.0,
            events: Vec::new(),
        }
    }
}

impl Script {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
