//! Benchmark profiles for the leapfrog transport solver.
//!
//! - [`stable_profile`]: Courant ratio `0.5`, the regime real runs use
//! - [`reference_profile`]: the default `M = K = 1000` run

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use leapfrog_core::SolverConfig;

/// Worker counts swept by the parallel benchmarks.
pub const WORKER_COUNTS: [usize; 4] = [1, 2, 4, 8];

/// `cells` cells and `2 * cells` steps: `lambda = 0.5`.
pub fn stable_profile(cells: usize) -> SolverConfig {
    SolverConfig::with_mesh(cells, 2 * cells)
}

/// The default run: `M = K = 1000`, `lambda = 1`.
pub fn reference_profile() -> SolverConfig {
    SolverConfig::default()
}
