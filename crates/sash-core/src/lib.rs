// ABOUTME: Shared types and configuration for sash split containers.
// ABOUTME: Defines size specs, split axis, and config file handling.

pub mod axis;
pub mod config;
pub mod size;

pub use axis::{Point, Split};
pub use config::{ConfigError, PaneConfig, SplitConfig};
pub use size::{resolve, SizeSpec, SizeSpecError, UNBOUNDED};
