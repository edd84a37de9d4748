//! Single-process reference solver.
//!
//! Walks the whole grid `0..=M` with the same point updates as the
//! distributed solver, so for identical inputs the two agree to the last
//! bit. Used as an oracle by tests, benches and the `--verify` flag.

use leapfrog_core::{Problem, SolverConfig};
use tracing::debug;

use crate::error::SolverError;
use crate::levels::zeroed;
use crate::stencil::{boundary_value, leapfrog_point, upwind_point};

/// Solve on one thread and return the `M + 1` values at `t_K`.
pub fn solve_serial(config: &SolverConfig, problem: &dyn Problem) -> Result<Vec<f64>, SolverError> {
    let p = config.params()?;
    let n = p.point_count();
    let last = p.last_index();
    let alloc = || zeroed(n).map_err(|_| SolverError::AllocationFailed { rank: 0, len: n });
    let mut levels = [alloc()?, alloc()?, alloc()?];
    debug!(points = n, steps = p.steps, "serial solve");

    {
        let [u0, u1, _] = &mut levels;
        for (i, slot) in u0.iter_mut().enumerate() {
            *slot = problem.initial(p.x(i));
        }
        u0[0] = problem.inflow(0.0);
        u0[last] = 0.0;

        for i in 0..n {
            u1[i] = boundary_value(&p, problem, i, p.t(1)).unwrap_or_else(|| {
                upwind_point(u0[i], u0[i - 1], p.lambda, p.tau, problem.source(0.0, p.x(i)))
            });
        }
    }

    for k in 1..p.steps {
        let [old, cur, new] = &mut levels;
        let t_next = p.t(k + 1);
        for i in 0..n {
            new[i] = boundary_value(&p, problem, i, t_next).unwrap_or_else(|| {
                let source = problem.source(p.t(k), p.x(i));
                leapfrog_point(old[i], cur[i - 1], cur[i + 1], p.lambda, p.tau, source)
            });
        }
        levels.rotate_left(1);
    }

    let [_, cur, _] = levels;
    Ok(cur)
}

/// Largest absolute element-wise difference between two grids of equal
/// length, e.g. a parallel solution and [`solve_serial`].
pub fn max_deviation(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}
