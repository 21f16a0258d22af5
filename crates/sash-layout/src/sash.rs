// ABOUTME: Divider widget state: hover dwell, drag capture and pluggable content.
// ABOUTME: Pointer capture is an RAII guard held for exactly the lifetime of a drag.

use std::fmt;
use std::time::{Duration, Instant};

/// How long the pointer must rest on a divider before it lights up
pub const HOVER_DWELL: Duration = Duration::from_millis(150);

/// Releases drag-scoped pointer listeners exactly once, on [`release`]
/// or on drop, whichever comes first.
///
/// [`release`]: CaptureGuard::release
pub struct CaptureGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl CaptureGuard {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A guard with nothing to release, for hosts that route pointer events
    /// to the container themselves
    pub fn noop() -> Self {
        Self { release: None }
    }

    pub fn release(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        self.run();
    }
}

impl fmt::Debug for CaptureGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureGuard")
            .field("armed", &self.release.is_some())
            .finish()
    }
}

/// Attaches move/release listeners that outlive the divider's own bounds,
/// so a drag keeps tracking when the pointer wanders off the widget.
pub trait PointerCapture {
    fn acquire(&mut self, sash: usize) -> CaptureGuard;
}

/// Capture for hosts that already deliver every pointer event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCapture;

impl PointerCapture for NoCapture {
    fn acquire(&mut self, _sash: usize) -> CaptureGuard {
        CaptureGuard::noop()
    }
}

/// Produces the visual content hosted inside a divider
pub trait SashRender {
    type Content;

    fn render(&self, index: usize, active: bool) -> Self::Content;
}

impl<F, C> SashRender for F
where
    F: Fn(usize, bool) -> C,
{
    type Content = C;

    fn render(&self, index: usize, active: bool) -> C {
        self(index, active)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SashStyle {
    /// Plain line, no highlight
    Default,
    /// Thin line that thickens and highlights while active
    #[default]
    Vscode,
}

/// Content produced by the built-in renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SashContent {
    pub active: bool,
    pub style: SashStyle,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSash {
    pub style: SashStyle,
}

impl SashRender for DefaultSash {
    type Content = SashContent;

    fn render(&self, _index: usize, active: bool) -> SashContent {
        SashContent {
            active,
            style: self.style,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hover {
    Outside,
    Dwelling(Instant),
    Hovered,
}

/// One divider's interaction state
#[derive(Debug)]
pub struct Sash {
    index: usize,
    hover: Hover,
    capture: Option<CaptureGuard>,
}

impl Sash {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            hover: Hover::Outside,
            capture: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_dragging(&self) -> bool {
        self.capture.is_some()
    }

    pub fn is_hovered(&self) -> bool {
        self.hover == Hover::Hovered
    }

    /// Highlight flag handed to the content renderer
    pub fn is_active(&self) -> bool {
        self.is_dragging() || self.is_hovered()
    }

    pub fn pointer_enter(&mut self, now: Instant) {
        if self.hover != Hover::Hovered {
            self.hover = Hover::Dwelling(now);
        }
    }

    /// Leaving cancels a pending dwell and drops any hover highlight
    pub fn pointer_leave(&mut self) {
        self.hover = Hover::Outside;
    }

    /// Promote a dwell that has lasted long enough. Returns true if the
    /// active flag changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.hover {
            Hover::Dwelling(since) if now.saturating_duration_since(since) >= HOVER_DWELL => {
                let was_active = self.is_active();
                self.hover = Hover::Hovered;
                was_active != self.is_active()
            }
            _ => false,
        }
    }

    /// Grab the divider. Acquires drag-scoped listeners unless this divider
    /// already holds them; returns true when a new drag begins.
    pub fn pointer_down(&mut self, capture: &mut dyn PointerCapture) -> bool {
        if self.capture.is_some() {
            return false;
        }
        self.capture = Some(capture.acquire(self.index));
        true
    }

    /// Let go of the divider. Safe to call any number of times; listeners
    /// are released on the first call only.
    pub fn pointer_up(&mut self) -> bool {
        match self.capture.take() {
            Some(guard) => {
                guard.release();
                true
            }
            None => false,
        }
    }
}
