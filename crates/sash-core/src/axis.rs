// ABOUTME: Split direction and main-axis projection helpers.
// ABOUTME: Vertical splits lay panes out left to right, horizontal ones top to bottom.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Split {
    /// Panes side by side, sized by width along x
    #[default]
    Vertical,
    /// Panes stacked, sized by height along y
    Horizontal,
}

/// A pointer position in page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Split {
    /// Main-axis coordinate of a pointer position
    pub fn project(&self, point: Point) -> f64 {
        match self {
            Split::Vertical => point.x,
            Split::Horizontal => point.y,
        }
    }
}
