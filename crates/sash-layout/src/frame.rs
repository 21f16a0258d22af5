// ABOUTME: Render-ready geometry for one pass of a split container.
// ABOUTME: Pane extents, divider boxes and their hosted content along the main axis.

use sash_core::Split;

/// Rectangle in container pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Box spanning `offset..offset + size` on the main axis and the full
    /// cross extent on the other
    pub fn along(split: Split, offset: f64, size: f64, cross: f64) -> Self {
        match split {
            Split::Vertical => Self {
                x: offset,
                y: 0.0,
                width: size,
                height: cross,
            },
            Split::Horizontal => Self {
                x: 0.0,
                y: offset,
                width: cross,
                height: size,
            },
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneGeometry {
    pub index: usize,
    pub offset: f64,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SashGeometry<C> {
    pub index: usize,
    /// Leading edge, so the divider is centered on its position
    pub offset: f64,
    pub thickness: f64,
    /// False when resizing is disabled; the divider still renders
    pub interactive: bool,
    pub active: bool,
    pub content: C,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SplitFrame<C> {
    pub split: Split,
    pub dragging: bool,
    pub panes: Vec<PaneGeometry>,
    pub sashes: Vec<SashGeometry<C>>,
}

impl<C> SplitFrame<C> {
    /// Full rectangles for every pane, given the cross-axis extent
    pub fn pane_rects(&self, cross: f64) -> Vec<Rect> {
        self.panes
            .iter()
            .map(|p| Rect::along(self.split, p.offset, p.size, cross))
            .collect()
    }

    pub fn sash_rects(&self, cross: f64) -> Vec<Rect> {
        self.sashes
            .iter()
            .map(|s| Rect::along(self.split, s.offset, s.thickness, cross))
            .collect()
    }

    /// Divider under a point, if any. Dividers are checked before panes
    /// because they overlap the pane edges.
    pub fn hit_sash(&self, x: f64, y: f64, cross: f64) -> Option<usize> {
        self.sash_rects(cross)
            .iter()
            .position(|r| r.contains(x, y))
    }
}
