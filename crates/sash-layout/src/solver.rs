// ABOUTME: Turns resolved pane sizes and the container extent into final pixel sizes.
// ABOUTME: Fixed panes yield proportionally on overflow, auto panes share what is left.

use sash_core::{SizeSpec, UNBOUNDED};

/// Final pane sizes plus the cumulative divider positions derived from them.
///
/// `positions` has one more entry than `sizes`: `positions[0]` is 0 and the
/// last entry is the container extent. Divider `i` sits at `positions[i + 1]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutResult {
    pub sizes: Vec<f64>,
    pub positions: Vec<f64>,
}

impl LayoutResult {
    /// Resolve and solve a full set of size specs
    pub fn compute(specs: &[SizeSpec], extent: f64) -> Self {
        Self::from_sizes(solve(&resolve_sizes(specs, extent), extent))
    }

    pub fn from_sizes(sizes: Vec<f64>) -> Self {
        let positions = divider_positions(&sizes);
        Self { sizes, positions }
    }

    pub fn pane_count(&self) -> usize {
        self.sizes.len()
    }

    /// Positions of the draggable dividers, excluding both container edges
    pub fn sash_positions(&self) -> &[f64] {
        match self.positions.len() {
            0..=2 => &[],
            n => &self.positions[1..n - 1],
        }
    }
}

/// Resolve each pane spec; auto panes come back as [`UNBOUNDED`]
pub fn resolve_sizes(specs: &[SizeSpec], extent: f64) -> Vec<f64> {
    specs.iter().map(|s| s.resolve(extent, UNBOUNDED)).collect()
}

/// Distribute the container extent across panes.
///
/// Every result is finite and non-negative. Whenever at least one pane is
/// auto or the finite sizes are non-zero, the results sum to `extent`.
pub fn solve(resolved: &[f64], extent: f64) -> Vec<f64> {
    let extent = if extent.is_finite() { extent.max(0.0) } else { 0.0 };

    let mut count = 0usize;
    let mut sum = 0.0;
    for &size in resolved {
        if size == UNBOUNDED {
            count += 1;
        } else {
            sum += size;
        }
    }

    let solved: Vec<f64> = if sum > extent || (count == 0 && sum < extent) {
        // Scale by the largest entry first so sizes near f64::MAX cannot
        // overflow the total
        let peak = resolved
            .iter()
            .filter(|&&size| size != UNBOUNDED)
            .fold(0.0f64, |acc, &size| acc.max(size));
        let scaled_sum: f64 = resolved
            .iter()
            .filter(|&&size| size != UNBOUNDED)
            .map(|&size| if peak > 0.0 { size / peak } else { 0.0 })
            .sum();
        resolved
            .iter()
            .map(|&size| {
                if size == UNBOUNDED {
                    0.0
                } else if scaled_sum > 0.0 {
                    size / peak / scaled_sum * extent
                } else {
                    size
                }
            })
            .collect()
    } else if count > 0 {
        let remaining = (extent - sum) / count as f64;
        resolved
            .iter()
            .map(|&size| if size == UNBOUNDED { remaining } else { size })
            .collect()
    } else {
        resolved.to_vec()
    };

    solved.into_iter().map(|size| size.max(0.0)).collect()
}

/// Prefix sums of the pane sizes, starting at 0
pub fn divider_positions(sizes: &[f64]) -> Vec<f64> {
    let mut positions = Vec::with_capacity(sizes.len() + 1);
    let mut acc = 0.0;
    positions.push(acc);
    for size in sizes {
        acc += size;
        positions.push(acc);
    }
    positions
}
