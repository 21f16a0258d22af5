//! Property-based invariant tests for the layout solver and drag clamping.
//!
//! 1. Solved sizes sum to the extent whenever any space can be assigned.
//! 2. Solved sizes are finite and non-negative.
//! 3. Exact fits with no auto panes come back unchanged.
//! 4. Solving is deterministic.
//! 5. Divider positions start at 0 and end at the extent.
//! 6. A drag never pushes either neighbour outside its bounds.
//! 7. A drag preserves the total size.
//! 8. Drag results depend only on the final pointer position.

use proptest::prelude::*;
use sash_core::{Point, Split, UNBOUNDED};
use sash_layout::{divider_positions, solve, DragController, LayoutResult, PaneBounds};

// ── Helpers ─────────────────────────────────────────────────────────────

fn resolved_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(
        prop_oneof![
            6 => (0.0f64..2000.0),
            2 => Just(UNBOUNDED),
            1 => (1e300f64..f64::MAX),
        ],
        1..8,
    )
}

fn can_fill(resolved: &[f64]) -> bool {
    resolved.iter().any(|s| *s == UNBOUNDED || *s > 0.0)
}

fn drag_setup() -> impl Strategy<Value = (Vec<f64>, Vec<PaneBounds>)> {
    prop::collection::vec((1.0f64..500.0, 0.0f64..1.0, 1.0f64..2.0), 2..6).prop_map(|panes| {
        let sizes = panes.iter().map(|(size, _, _)| *size).collect();
        let bounds = panes
            .iter()
            .map(|(size, lo, hi)| PaneBounds::new(size * lo, size * hi))
            .collect();
        (sizes, bounds)
    })
}

// ═════════════════════════════════════════════════════════════════════════
// 1–2. Sizes fill the extent and stay well-formed
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn solved_sizes_sum_to_extent(resolved in resolved_strategy(), extent in 0.0f64..5000.0) {
        prop_assume!(can_fill(&resolved));
        let solved = solve(&resolved, extent);
        let total: f64 = solved.iter().sum();
        prop_assert!(
            (total - extent).abs() < 1e-6,
            "sum {} != extent {} for {:?}",
            total, extent, resolved
        );
    }

    #[test]
    fn solved_sizes_are_finite_and_non_negative(resolved in resolved_strategy(), extent in 0.0f64..5000.0) {
        let solved = solve(&resolved, extent);
        prop_assert_eq!(solved.len(), resolved.len());
        prop_assert!(solved.iter().all(|s| s.is_finite() && *s >= 0.0), "{:?}", solved);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3–5. Fixed points, determinism and positions
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn exact_fit_is_a_fixed_point(sizes in prop::collection::vec(0u32..1000, 1..8)) {
        let sizes: Vec<f64> = sizes.into_iter().map(f64::from).collect();
        let extent: f64 = sizes.iter().sum();
        prop_assert_eq!(solve(&sizes, extent), sizes);
    }

    #[test]
    fn solve_is_deterministic(resolved in resolved_strategy(), extent in 0.0f64..5000.0) {
        prop_assert_eq!(solve(&resolved, extent), solve(&resolved, extent));
    }

    #[test]
    fn positions_span_the_extent(resolved in resolved_strategy(), extent in 1.0f64..5000.0) {
        prop_assume!(can_fill(&resolved));
        let positions = divider_positions(&solve(&resolved, extent));
        prop_assert_eq!(positions.len(), resolved.len() + 1);
        prop_assert_eq!(positions[0], 0.0);
        prop_assert!((positions[positions.len() - 1] - extent).abs() < 1e-6);
        prop_assert!(positions.windows(2).all(|w| w[0] <= w[1]));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6–8. Drag clamping
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn drag_respects_neighbour_bounds(
        (sizes, bounds) in drag_setup(),
        divider in 0usize..5,
        dx in -1000.0f64..1000.0,
    ) {
        let divider = divider % (sizes.len() - 1);
        let mut drag = DragController::new();
        drag.start(Point::new(0.0, 0.0), divider, Split::Vertical, &LayoutResult::from_sizes(sizes.clone()));

        let next = drag.propose(Point::new(dx, 0.0), &bounds).unwrap();
        for i in [divider, divider + 1] {
            prop_assert!(
                next[i] >= bounds[i].min - 1e-9 && next[i] <= bounds[i].max + 1e-9,
                "pane {} = {} outside {:?}",
                i, next[i], bounds[i]
            );
        }
        let before: f64 = sizes.iter().sum();
        let after: f64 = next.iter().sum();
        prop_assert!((before - after).abs() < 1e-6);
    }

    #[test]
    fn drag_is_path_independent(
        (sizes, bounds) in drag_setup(),
        path in prop::collection::vec(-800.0f64..800.0, 1..10),
    ) {
        let layout = LayoutResult::from_sizes(sizes);
        let mut wandering = DragController::new();
        let mut direct = DragController::new();
        wandering.start(Point::new(50.0, 0.0), 0, Split::Vertical, &layout);
        direct.start(Point::new(50.0, 0.0), 0, Split::Vertical, &layout);

        let mut last = None;
        for x in &path {
            last = wandering.propose(Point::new(*x, 0.0), &bounds);
        }
        let target = Point::new(path[path.len() - 1], 0.0);
        prop_assert_eq!(last, direct.propose(target, &bounds));
    }
}
