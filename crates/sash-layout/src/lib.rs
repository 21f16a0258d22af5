// ABOUTME: Split container layout: size solving, drag constraints and divider state.
// ABOUTME: Pure and synchronous; rendering and pointer plumbing stay with the host.

mod bounds;
mod drag;
mod frame;
mod sash;
mod solver;
mod split;

pub use bounds::{pane_bounds, PaneBounds};
pub use drag::{clamp_delta, DragController, DragSession};
pub use frame::{PaneGeometry, Rect, SashGeometry, SplitFrame};
pub use sash::{
    CaptureGuard, DefaultSash, NoCapture, PointerCapture, Sash, SashContent, SashRender,
    SashStyle, HOVER_DWELL,
};
pub use solver::{divider_positions, resolve_sizes, solve, LayoutResult};
pub use split::{PointerEvent, SplitPane};
