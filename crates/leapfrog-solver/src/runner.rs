//! Multi-worker entry point.

use std::fmt;

use leapfrog_comm::{launch, GroupConfig};
use leapfrog_core::{Problem, SolverConfig};
use tracing::info;

use crate::driver::{run_worker, NoopObserver, WorkerOutcome};
use crate::error::SolverError;

/// Parameters and timing of a finished run, as reported by rank 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunReport {
    /// Worker count `P`.
    pub workers: usize,
    /// Spatial cells `M`.
    pub cells: usize,
    /// Time steps `K`.
    pub steps: usize,
    /// Courant ratio.
    pub lambda: f64,
    /// Seconds between the post-warmup and the final barrier.
    pub elapsed: f64,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "parallel leapfrog solver:")?;
        writeln!(
            f,
            "  workers: {}, M={}, K={}, lambda={:.3}",
            self.workers, self.cells, self.steps, self.lambda
        )?;
        write!(f, "  elapsed: {:.6} s", self.elapsed)
    }
}

/// Result of [`solve_parallel`].
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// The `M + 1` global values at `t_K`.
    pub values: Vec<f64>,
    /// Run parameters and timing.
    pub report: RunReport,
}

/// Solve with `workers` in-process workers and gather the result.
///
/// If any worker fails the group is aborted and the first failure that is
/// not merely a consequence of the abort is returned.
pub fn solve_parallel(
    config: &SolverConfig,
    problem: &dyn Problem,
    workers: usize,
    group: GroupConfig,
) -> Result<Solution, SolverError> {
    let params = config.params()?;
    let results = launch(workers, group, |comm| {
        run_worker(comm, config, problem, &mut NoopObserver)
    })?;
    let outcomes = root_cause(results)?;

    let mut values = Vec::with_capacity(params.point_count());
    for outcome in &outcomes {
        values.extend_from_slice(&outcome.values);
    }
    let report = RunReport {
        workers,
        cells: params.cells,
        steps: params.steps,
        lambda: params.lambda,
        elapsed: outcomes.first().map_or(0.0, |o| o.elapsed),
    };
    info!(
        workers,
        cells = report.cells,
        steps = report.steps,
        lambda = report.lambda,
        elapsed = report.elapsed,
        "run complete"
    );
    Ok(Solution { values, report })
}

/// All outcomes in rank order, or the most informative error.
fn root_cause(
    results: Vec<Result<WorkerOutcome, SolverError>>,
) -> Result<Vec<WorkerOutcome>, SolverError> {
    let mut outcomes = Vec::with_capacity(results.len());
    let mut abort = None;
    for result in results {
        match result {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) if e.is_abort() => {
                abort.get_or_insert(e);
            }
            Err(e) => return Err(e),
        }
    }
    match abort {
        Some(e) => Err(e),
        None => Ok(outcomes),
    }
}
