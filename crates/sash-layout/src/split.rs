// ABOUTME: Split container orchestrator tying extent, specs, dividers and drags together.
// ABOUTME: Proposes new size arrays through callbacks; the caller decides what to adopt.

use std::time::Instant;

use sash_core::{PaneConfig, Point, SizeSpec, Split, SplitConfig};

use crate::bounds::{pane_bounds, PaneBounds};
use crate::drag::DragController;
use crate::frame::{PaneGeometry, SashGeometry, SplitFrame};
use crate::sash::{DefaultSash, NoCapture, PointerCapture, Sash, SashRender};
use crate::solver::LayoutResult;

/// A raw pointer event in page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    pub position: Point,
}

impl PointerEvent {
    pub const fn at(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
        }
    }
}

type ChangeHandler = Box<dyn FnMut(&[f64])>;
type DragHandler = Box<dyn FnMut(&PointerEvent)>;

pub struct SplitPane<R = DefaultSash> {
    config: SplitConfig,
    extent: f64,
    drag: DragController,
    sashes: Vec<Sash>,
    /// Layout captured at drag start, shown instead of the live one while
    /// dragging in performance mode
    frozen: Option<LayoutResult>,
    renderer: R,
    capture: Box<dyn PointerCapture>,
    on_change: Option<ChangeHandler>,
    on_drag_start: Option<DragHandler>,
    on_drag_end: Option<DragHandler>,
}

impl SplitPane<DefaultSash> {
    pub fn new(config: SplitConfig) -> Self {
        Self::with_renderer(config, DefaultSash::default())
    }
}

impl<R: SashRender> SplitPane<R> {
    pub fn with_renderer(config: SplitConfig, renderer: R) -> Self {
        let mut pane = Self {
            config,
            extent: 0.0,
            drag: DragController::new(),
            sashes: Vec::new(),
            frozen: None,
            renderer,
            capture: Box::new(NoCapture),
            on_change: None,
            on_drag_start: None,
            on_drag_end: None,
        };
        pane.sync_sashes();
        pane
    }

    /// Called with the full proposed size array on every drag move and at release
    pub fn on_change(mut self, handler: impl FnMut(&[f64]) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    pub fn on_drag_start(mut self, handler: impl FnMut(&PointerEvent) + 'static) -> Self {
        self.on_drag_start = Some(Box::new(handler));
        self
    }

    pub fn on_drag_end(mut self, handler: impl FnMut(&PointerEvent) + 'static) -> Self {
        self.on_drag_end = Some(Box::new(handler));
        self
    }

    pub fn with_capture(mut self, capture: impl PointerCapture + 'static) -> Self {
        self.capture = Box::new(capture);
        self
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// New main-axis extent from whatever measures the container. Each
    /// update fully replaces the previous one.
    pub fn update_extent(&mut self, extent: f64) {
        let extent = if extent.is_finite() { extent.max(0.0) } else { 0.0 };
        if extent != self.extent {
            tracing::debug!("Container extent {} -> {}", self.extent, extent);
            self.extent = extent;
        }
    }

    /// Adopt a new set of size specs (typically the array from `on_change`)
    pub fn set_sizes(&mut self, sizes: Vec<SizeSpec>) {
        self.config.sizes = sizes;
        self.sync_sashes();
    }

    /// Adopt concrete pixel sizes
    pub fn set_pixel_sizes(&mut self, sizes: &[f64]) {
        self.set_sizes(sizes.iter().copied().map(SizeSpec::Fixed).collect());
    }

    pub fn set_panes(&mut self, panes: Vec<PaneConfig>) {
        self.config.panes = panes;
    }

    pub fn set_split(&mut self, split: Split) {
        self.config.split = split;
    }

    /// Disabling only stops new drags; one already running carries on
    pub fn set_allow_resize(&mut self, allow: bool) {
        self.config.allow_resize = allow;
    }

    pub fn set_performance_mode(&mut self, enabled: bool) {
        self.config.performance_mode = enabled;
    }

    /// Live layout from the current specs and extent
    pub fn layout(&self) -> LayoutResult {
        LayoutResult::compute(&self.config.sizes, self.extent)
    }

    pub fn bounds(&self) -> Vec<PaneBounds> {
        pane_bounds(&self.config, self.extent)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn sash(&self, index: usize) -> Option<&Sash> {
        self.sashes.get(index)
    }

    /// Layout the panes should be drawn with right now
    pub fn displayed_layout(&self) -> LayoutResult {
        match self.frozen_layout() {
            Some(frozen) => frozen.clone(),
            None => self.layout(),
        }
    }

    fn frozen_layout(&self) -> Option<&LayoutResult> {
        if self.config.performance_mode && self.drag.is_dragging() {
            self.frozen.as_ref()
        } else {
            None
        }
    }

    pub fn pointer_enter(&mut self, sash: usize, now: Instant) {
        if let Some(s) = self.sashes.get_mut(sash) {
            s.pointer_enter(now);
        }
    }

    pub fn pointer_leave(&mut self, sash: usize) {
        if let Some(s) = self.sashes.get_mut(sash) {
            s.pointer_leave();
        }
    }

    /// Advance hover dwell timers. Returns true if any divider changed its
    /// active flag and needs redrawing.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.sashes
            .iter_mut()
            .fold(false, |changed, s| s.tick(now) || changed)
    }

    /// Press on divider `sash`. Starts a drag session unless resizing is
    /// disabled or a drag is already running.
    pub fn pointer_down(&mut self, sash: usize, event: PointerEvent) -> bool {
        if !self.config.allow_resize || self.drag.is_dragging() {
            return false;
        }
        let layout = self.layout();
        let Some(target) = self.sashes.get_mut(sash) else {
            return false;
        };
        if !self.drag.start(event.position, sash, self.config.split, &layout) {
            return false;
        }
        target.pointer_down(self.capture.as_mut());

        if self.config.performance_mode {
            self.frozen = Some(layout);
        }
        if let Some(handler) = self.on_drag_start.as_mut() {
            handler(&event);
        }
        true
    }

    /// Pointer moved anywhere while captured. Returns the proposal that was
    /// passed to `on_change`, if a drag is running.
    pub fn pointer_move(&mut self, event: PointerEvent) -> Option<Vec<f64>> {
        let bounds = self.bounds();
        let sizes = self.drag.propose(event.position, &bounds)?;
        self.emit_change(&sizes);
        Some(sizes)
    }

    /// Button released anywhere. Emits a final proposal, releases captured
    /// listeners and clears the freeze cache. Repeated releases are no-ops.
    pub fn pointer_up(&mut self, event: PointerEvent) -> Option<Vec<f64>> {
        for sash in &mut self.sashes {
            sash.pointer_up();
        }
        if !self.drag.is_dragging() {
            return None;
        }

        let bounds = self.bounds();
        let sizes = self.drag.finish(event.position, &bounds);
        self.frozen = None;
        if let Some(sizes) = &sizes {
            self.emit_change(sizes);
        }
        if let Some(handler) = self.on_drag_end.as_mut() {
            handler(&event);
        }
        sizes
    }

    /// Geometry and divider content for the renderer
    pub fn frame(&self) -> SplitFrame<R::Content> {
        let live = self.layout();
        let shown = self.frozen_layout().unwrap_or(&live);

        let panes = shown
            .sizes
            .iter()
            .zip(&shown.positions)
            .enumerate()
            .map(|(index, (&size, &offset))| PaneGeometry { index, offset, size })
            .collect();

        let thickness = self.config.resizer_size;
        let sashes = live
            .sash_positions()
            .iter()
            .zip(&self.sashes)
            .map(|(&position, sash)| {
                let active = sash.is_active();
                SashGeometry {
                    index: sash.index(),
                    offset: position - thickness / 2.0,
                    thickness,
                    interactive: self.config.allow_resize,
                    active,
                    content: self.renderer.render(sash.index(), active),
                }
            })
            .collect();

        SplitFrame {
            split: self.config.split,
            dragging: self.drag.is_dragging(),
            panes,
            sashes,
        }
    }

    fn emit_change(&mut self, sizes: &[f64]) {
        if let Some(handler) = self.on_change.as_mut() {
            handler(sizes);
        }
    }

    fn sync_sashes(&mut self) {
        let wanted = self.config.pane_count().saturating_sub(1);
        if self.sashes.len() > wanted {
            self.sashes.truncate(wanted);
        } else {
            let start = self.sashes.len();
            self.sashes.extend((start..wanted).map(Sash::new));
        }
    }
}
