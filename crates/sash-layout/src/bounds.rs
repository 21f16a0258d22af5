// ABOUTME: Per-pane min/max pixel bounds derived from declared size specs.
// ABOUTME: Recomputed every layout pass from the specs and the container extent.

use sash_core::{resolve, PaneConfig, SplitConfig, UNBOUNDED};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for PaneBounds {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: UNBOUNDED,
        }
    }
}

impl PaneBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Resolve a pane's declared bounds. Absent or unusable specs keep the
    /// default edge, so the result is always within [0, unbounded].
    pub fn resolve(pane: &PaneConfig, extent: f64) -> Self {
        Self {
            min: resolve(pane.min_size.as_ref(), extent, 0.0),
            max: resolve(pane.max_size.as_ref(), extent, UNBOUNDED),
        }
    }
}

/// Bounds for every pane of the container, in pane order
pub fn pane_bounds(config: &SplitConfig, extent: f64) -> Vec<PaneBounds> {
    (0..config.pane_count())
        .map(|index| PaneBounds::resolve(&config.pane(index), extent))
        .collect()
}
