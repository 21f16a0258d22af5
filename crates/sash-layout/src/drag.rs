// ABOUTME: Drag sessions that turn pointer displacement into bounded size changes.
// ABOUTME: Every move is measured from the drag-start snapshot, never from the last move.

use sash_core::{Point, Split};

use crate::bounds::PaneBounds;
use crate::solver::LayoutResult;

/// Everything captured when a divider is grabbed
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub start_pointer: Point,
    pub sizes_at_start: Vec<f64>,
    pub positions_at_start: Vec<f64>,
    pub divider: usize,
    pub split: Split,
}

/// Owns at most one drag session. It only proposes new size arrays; adopting
/// them is up to the caller.
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Begin dragging `divider` (the boundary between panes `divider` and
    /// `divider + 1`). Returns false and stays idle if that divider does not
    /// exist in `layout` or a session is already running.
    pub fn start(&mut self, pointer: Point, divider: usize, split: Split, layout: &LayoutResult) -> bool {
        if self.session.is_some() {
            return false;
        }
        if divider + 1 >= layout.pane_count() {
            tracing::warn!(
                "Ignoring drag on divider {} with only {} panes",
                divider,
                layout.pane_count()
            );
            return false;
        }

        tracing::debug!("Drag start on divider {} at {:?}", divider, pointer);
        self.session = Some(DragSession {
            start_pointer: pointer,
            sizes_at_start: layout.sizes.clone(),
            positions_at_start: layout.positions.clone(),
            divider,
            split,
        });
        true
    }

    /// Sizes the session would produce with the pointer at `pointer`
    pub fn propose(&self, pointer: Point, bounds: &[PaneBounds]) -> Option<Vec<f64>> {
        let session = self.session.as_ref()?;
        let i = session.divider;
        let raw = session.split.project(pointer) - session.split.project(session.start_pointer);

        let default_bounds = PaneBounds::default();
        let first = bounds.get(i).unwrap_or(&default_bounds);
        let second = bounds.get(i + 1).unwrap_or(&default_bounds);
        let delta = clamp_delta(raw, &session.sizes_at_start, i, first, second);
        tracing::trace!("Drag divider {}: raw {} clamped {}", i, raw, delta);

        let mut sizes = session.sizes_at_start.clone();
        sizes[i] += delta;
        sizes[i + 1] -= delta;
        Some(sizes)
    }

    /// Final proposal at release, after which the controller is idle again
    pub fn finish(&mut self, pointer: Point, bounds: &[PaneBounds]) -> Option<Vec<f64>> {
        let sizes = self.propose(pointer, bounds);
        if let Some(session) = self.session.take() {
            tracing::debug!("Drag end on divider {} at {:?}", session.divider, pointer);
        }
        sizes
    }
}

/// Clamp a raw main-axis displacement of divider `i` so neither neighbour
/// leaves its bounds. The tighter of the two panes wins in each direction.
///
/// A pane that starts the drag outside its bounds is snapped back to the
/// violated edge. When the two borders contradict each other the right
/// border is applied last and wins.
pub fn clamp_delta(raw: f64, sizes: &[f64], i: usize, first: &PaneBounds, second: &PaneBounds) -> f64 {
    let left_border = -f64::min(sizes[i] - first.min, second.max - sizes[i + 1]);
    let right_border = f64::min(sizes[i + 1] - second.min, first.max - sizes[i]);

    if raw.is_nan() {
        return 0.0;
    }
    // Sequential comparisons rather than f64::clamp, which panics when the
    // borders cross
    let mut delta = raw;
    if delta < left_border {
        delta = left_border;
    }
    if delta > right_border {
        delta = right_border;
    }
    delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use sash_core::UNBOUNDED;

    fn layout(sizes: &[f64]) -> LayoutResult {
        LayoutResult::from_sizes(sizes.to_vec())
    }

    fn min50() -> Vec<PaneBounds> {
        vec![PaneBounds::new(50.0, UNBOUNDED); 2]
    }

    #[test]
    fn drag_clamps_to_min_size() {
        let mut drag = DragController::new();
        assert!(drag.start(Point::new(100.0, 0.0), 0, Split::Vertical, &layout(&[100.0, 100.0])));

        let sizes = drag.propose(Point::new(-100.0, 0.0), &min50()).unwrap();
        assert_eq!(sizes, vec![50.0, 150.0]);
    }

    #[test]
    fn drag_respects_neighbour_max() {
        let bounds = vec![PaneBounds::default(), PaneBounds::new(0.0, 130.0)];
        let mut drag = DragController::new();
        drag.start(Point::new(0.0, 0.0), 0, Split::Vertical, &layout(&[100.0, 100.0]));

        // Shrinking pane 0 grows pane 1, which tops out at 130
        let sizes = drag.propose(Point::new(-80.0, 0.0), &bounds).unwrap();
        assert_eq!(sizes, vec![70.0, 130.0]);
    }

    #[test]
    fn drag_right_respects_both_panes() {
        let bounds = vec![PaneBounds::new(0.0, 160.0), PaneBounds::new(20.0, UNBOUNDED)];
        let mut drag = DragController::new();
        drag.start(Point::new(0.0, 0.0), 0, Split::Vertical, &layout(&[100.0, 100.0]));

        let sizes = drag.propose(Point::new(500.0, 0.0), &bounds).unwrap();
        assert_eq!(sizes, vec![160.0, 40.0]);
    }

    #[test]
    fn moves_are_measured_from_the_start_snapshot() {
        let mut drag = DragController::new();
        drag.start(Point::new(10.0, 0.0), 1, Split::Vertical, &layout(&[100.0, 100.0, 100.0]));
        let bounds = vec![PaneBounds::default(); 3];

        let _ = drag.propose(Point::new(30.0, 0.0), &bounds);
        let two_steps = drag.propose(Point::new(55.0, 0.0), &bounds).unwrap();

        let mut fresh = DragController::new();
        fresh.start(Point::new(10.0, 0.0), 1, Split::Vertical, &layout(&[100.0, 100.0, 100.0]));
        let one_step = fresh.propose(Point::new(55.0, 0.0), &bounds).unwrap();

        assert_eq!(two_steps, one_step);
        assert_eq!(one_step, vec![100.0, 145.0, 55.0]);
    }

    #[test]
    fn horizontal_split_follows_y() {
        let mut drag = DragController::new();
        drag.start(Point::new(0.0, 0.0), 0, Split::Horizontal, &layout(&[100.0, 100.0]));
        let sizes = drag.propose(Point::new(999.0, 25.0), &min50()).unwrap();
        assert_eq!(sizes, vec![125.0, 75.0]);
    }

    #[test]
    fn finish_proposes_then_goes_idle() {
        let mut drag = DragController::new();
        drag.start(Point::new(0.0, 0.0), 0, Split::Vertical, &layout(&[100.0, 100.0]));
        let sizes = drag.finish(Point::new(20.0, 0.0), &min50()).unwrap();
        assert_eq!(sizes, vec![120.0, 80.0]);
        assert!(!drag.is_dragging());
        assert_eq!(drag.finish(Point::new(20.0, 0.0), &min50()), None);
    }

    #[test]
    fn only_one_session_at_a_time() {
        let mut drag = DragController::new();
        assert!(drag.start(Point::new(0.0, 0.0), 0, Split::Vertical, &layout(&[100.0, 100.0, 100.0])));
        assert!(!drag.start(Point::new(0.0, 0.0), 1, Split::Vertical, &layout(&[100.0, 100.0, 100.0])));
        assert_eq!(drag.session().map(|s| s.divider), Some(0));
    }

    #[test]
    fn missing_divider_is_ignored() {
        let mut drag = DragController::new();
        assert!(!drag.start(Point::new(0.0, 0.0), 1, Split::Vertical, &layout(&[100.0, 100.0])));
        assert!(!drag.is_dragging());
        assert_eq!(drag.propose(Point::new(5.0, 0.0), &[]), None);
    }

    #[test]
    fn pinned_panes_do_not_move() {
        let bounds = vec![PaneBounds::new(100.0, 100.0), PaneBounds::default()];
        assert_eq!(clamp_delta(-40.0, &[100.0, 100.0], 0, &bounds[0], &bounds[1]), 0.0);
        assert_eq!(clamp_delta(40.0, &[100.0, 100.0], 0, &bounds[0], &bounds[1]), 0.0);
    }

    #[test]
    fn pane_below_min_snaps_back_up() {
        let first = PaneBounds::new(80.0, UNBOUNDED);
        let second = PaneBounds::default();
        // Any shrink, or too small a grow, lands the pane on its min
        assert_eq!(clamp_delta(-30.0, &[60.0, 140.0], 0, &first, &second), 20.0);
        assert_eq!(clamp_delta(0.0, &[60.0, 140.0], 0, &first, &second), 20.0);
        assert_eq!(clamp_delta(30.0, &[60.0, 140.0], 0, &first, &second), 30.0);
    }

    #[test]
    fn pane_above_max_snaps_back_down() {
        let first = PaneBounds::new(0.0, 200.0);
        let second = PaneBounds::default();
        let mut drag = DragController::new();
        drag.start(Point::new(300.0, 0.0), 0, Split::Vertical, &layout(&[300.0, 100.0]));
        let bounds = [first, second];

        assert_eq!(drag.propose(Point::new(300.0, 0.0), &bounds), Some(vec![200.0, 200.0]));
        assert_eq!(drag.propose(Point::new(250.0, 0.0), &bounds), Some(vec![200.0, 200.0]));
        assert_eq!(drag.propose(Point::new(150.0, 0.0), &bounds), Some(vec![150.0, 250.0]));
    }

    #[test]
    fn nan_displacement_is_ignored() {
        let b = PaneBounds::default();
        assert_eq!(clamp_delta(f64::NAN, &[100.0, 100.0], 0, &b, &b), 0.0);
    }
}
