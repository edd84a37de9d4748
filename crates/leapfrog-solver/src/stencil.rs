//! Point updates of the transport scheme and the domain-edge conditions.
//!
//! Two updates are used:
//!
//! - **upwind** (first step only, `t_0 -> t_1`), which needs one prior level:
//!   `u1[i] = u0[i] - lambda * (u0[i] - u0[i-1]) + tau * f(0, x_i)`
//! - **leapfrog** (every later step), which needs two:
//!   `new[i] = old[i] - lambda * (cur[i+1] - cur[i-1]) + 2 * tau * f(t_k, x_i)`
//!
//! At global index `0` the inflow `psi(t)` replaces the update, at global
//! index `M` the value is `0`. No clamping or NaN guarding is applied.
//!
//! Slices passed here are whole local buffers: slot `0` is the left ghost,
//! slots `1..=len` are owned, slot `len + 1` is the right ghost.

use std::ops::RangeInclusive;

use leapfrog_core::{Problem, SchemeParams};
use leapfrog_space::Partition;

/// Centered-in-time, centered-in-space update of one point.
#[inline]
pub fn leapfrog_point(
    old: f64,
    cur_left: f64,
    cur_right: f64,
    lambda: f64,
    tau: f64,
    source: f64,
) -> f64 {
    old - lambda * (cur_right - cur_left) + 2.0 * tau * source
}

/// First-order one-sided update of one point.
#[inline]
pub fn upwind_point(old: f64, old_left: f64, lambda: f64, tau: f64, source: f64) -> f64 {
    old - lambda * (old - old_left) + tau * source
}

/// Value imposed at a physical edge at time `t`, or `None` for interior
/// points.
#[inline]
pub fn boundary_value(
    params: &SchemeParams,
    problem: &dyn Problem,
    global: usize,
    t: f64,
) -> Option<f64> {
    if global == 0 {
        Some(problem.inflow(t))
    } else if global == params.last_index() {
        Some(0.0)
    } else {
        None
    }
}

/// Local slots that do not read any ghost in a leapfrog step: `2..=len-1`.
pub fn leapfrog_interior(len: usize) -> RangeInclusive<usize> {
    2..=len.saturating_sub(1)
}

/// Local slots that do not read any ghost in the upwind step: `2..=len`.
pub fn upwind_interior(len: usize) -> RangeInclusive<usize> {
    2..=len
}

/// The ghost-adjacent local slots `1` and `len`, without duplicates.
pub fn ghost_adjacent(len: usize) -> impl Iterator<Item = usize> {
    let first = (len >= 1).then_some(1);
    let last = (len >= 2).then_some(len);
    first.into_iter().chain(last)
}

/// Geometry and constants needed to update a block.
#[derive(Clone, Copy)]
pub struct Block<'p> {
    /// Scheme constants.
    pub params: SchemeParams,
    /// The block being updated.
    pub partition: Partition,
    /// Problem data.
    pub problem: &'p dyn Problem,
}

impl Block<'_> {
    /// Upwind value of local slot `i` at `t_1`.
    pub fn upwind_at(&self, i: usize, old: &[f64]) -> f64 {
        let global = self.partition.global_index(i);
        let p = &self.params;
        boundary_value(p, self.problem, global, p.t(1)).unwrap_or_else(|| {
            let source = self.problem.source(0.0, p.x(global));
            upwind_point(old[i], old[i - 1], p.lambda, p.tau, source)
        })
    }

    /// Leapfrog value of local slot `i` at `t_{k+1}`.
    pub fn leapfrog_at(&self, k: usize, i: usize, old: &[f64], cur: &[f64]) -> f64 {
        let global = self.partition.global_index(i);
        let p = &self.params;
        boundary_value(p, self.problem, global, p.t(k + 1)).unwrap_or_else(|| {
            let source = self.problem.source(p.t(k), p.x(global));
            leapfrog_point(old[i], cur[i - 1], cur[i + 1], p.lambda, p.tau, source)
        })
    }

    /// Refresh the ghosts that sit outside the physical domain at time `t`.
    ///
    /// Ghosts facing a neighbour are left alone; the halo exchange owns them.
    pub fn fix_edge_ghosts(&self, level: &mut [f64], t: f64) {
        let len = self.partition.len;
        if self.partition.touches_left() {
            level[0] = self.problem.inflow(t);
        }
        if self.partition.touches_right(self.params.point_count()) {
            level[len + 1] = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leapfrog_core::{FnProblem, SineTransport, SolverConfig};
    use leapfrog_space::partition;

    #[test]
    fn leapfrog_point_formula() {
        // 1 - 0.5 * (4 - 2) + 2 * 0.1 * 3
        let v = leapfrog_point(1.0, 2.0, 4.0, 0.5, 0.1, 3.0);
        assert!((v - 0.6).abs() < 1e-15);
    }

    #[test]
    fn upwind_point_formula() {
        // 2 - 0.5 * (2 - 1) + 0.1 * 3
        let v = upwind_point(2.0, 1.0, 0.5, 0.1, 3.0);
        assert!((v - 1.8).abs() < 1e-15);
    }

    #[test]
    fn zero_ratio_and_source_is_identity() {
        assert_eq!(leapfrog_point(0.7, 5.0, -5.0, 0.0, 0.1, 0.0), 0.7);
        assert_eq!(upwind_point(0.7, 5.0, 0.0, 0.1, 0.0), 0.7);
    }

    #[test]
    fn interior_ranges() {
        assert_eq!(leapfrog_interior(5).collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(leapfrog_interior(2).count(), 0);
        assert_eq!(leapfrog_interior(1).count(), 0);
        assert_eq!(leapfrog_interior(0).count(), 0);
        assert_eq!(upwind_interior(3).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(upwind_interior(1).count(), 0);
    }

    #[test]
    fn ghost_adjacent_slots() {
        assert_eq!(ghost_adjacent(0).count(), 0);
        assert_eq!(ghost_adjacent(1).collect::<Vec<_>>(), vec![1]);
        assert_eq!(ghost_adjacent(2).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(ghost_adjacent(7).collect::<Vec<_>>(), vec![1, 7]);
    }

    #[test]
    fn boundary_values_at_edges_only() {
        let params = SolverConfig::with_mesh(4, 4).params().unwrap();
        let problem = FnProblem::new(|_| 0.0, |t| 10.0 + t, |_, _| 0.0);
        assert_eq!(boundary_value(&params, &problem, 0, 0.5), Some(10.5));
        assert_eq!(boundary_value(&params, &problem, 4, 0.5), Some(0.0));
        assert_eq!(boundary_value(&params, &problem, 2, 0.5), None);
    }

    #[test]
    fn leapfrog_at_uses_boundary_at_global_edges() {
        let params = SolverConfig::with_mesh(4, 4).params().unwrap();
        let problem = FnProblem::new(|_| 0.0, |t| t, |_, _| 0.0);
        let block = Block {
            params,
            partition: partition(5, 1, 0).unwrap(),
            problem: &problem,
        };
        let old = [9.0; 7];
        let cur = [9.0; 7];
        // Slot 1 is global 0 -> psi(t_2).
        assert_eq!(block.leapfrog_at(1, 1, &old, &cur), params.t(2));
        // Slot 5 is global 4 = M -> 0.
        assert_eq!(block.leapfrog_at(1, 5, &old, &cur), 0.0);
        // Flat field stays flat in the interior.
        assert_eq!(block.leapfrog_at(1, 3, &old, &cur), 9.0);
    }

    #[test]
    fn edge_ghosts_only_touch_physical_edges() {
        let params = SolverConfig::with_mesh(9, 4).params().unwrap();
        let problem = SineTransport;
        let middle = Block {
            params,
            partition: partition(10, 3, 1).unwrap(),
            problem: &problem,
        };
        let mut level = vec![7.0; middle.partition.len + 2];
        middle.fix_edge_ghosts(&mut level, 0.3);
        assert!(level.iter().all(|&v| v == 7.0));

        let last = Block {
            partition: partition(10, 3, 2).unwrap(),
            ..middle
        };
        let mut level = vec![7.0; last.partition.len + 2];
        last.fix_edge_ghosts(&mut level, 0.3);
        assert_eq!(level[0], 7.0);
        assert_eq!(level[last.partition.len + 1], 0.0);
    }
}
