//! Leapfrog: a distributed explicit solver for the 1-D transport equation
//! `du/dt + a du/dx = f(t, x)`.
//!
//! This is the facade crate that re-exports the public API of the
//! sub-crates. For most users, depending on `leapfrog` alone is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use leapfrog::prelude::*;
//!
//! let config = SolverConfig::with_mesh(100, 200);
//! let solution = solve_parallel(&config, &SineTransport, 4, GroupConfig::default()).unwrap();
//! assert_eq!(solution.values.len(), 101);
//!
//! let oracle = solve_serial(&config, &SineTransport).unwrap();
//! assert_eq!(solution.values, oracle);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`model`] | `leapfrog-core` | configuration, scheme parameters, problem data |
//! | [`space`] | `leapfrog-space` | partitioner and line topology |
//! | [`comm`] | `leapfrog-comm` | in-process worker group and messaging |
//! | [`solver`] | `leapfrog-solver` | grid state, halo exchange, driver, runners |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Configuration, scheme parameters and problem data (`leapfrog-core`).
pub use leapfrog_core as model;

/// Partitioner and line topology (`leapfrog-space`).
pub use leapfrog_space as space;

/// In-process worker group: tagged non-blocking messages, barrier, abort
/// (`leapfrog-comm`).
pub use leapfrog_comm as comm;

/// Grid state, halo exchange, driver and runners (`leapfrog-solver`).
pub use leapfrog_solver as solver;

/// Common imports for typical usage.
///
/// ```rust
/// use leapfrog::prelude::*;
/// ```
pub mod prelude {
    // Configuration and problem data
    pub use leapfrog_core::{
        ConfigError, CourantWarning, FnProblem, Problem, SchemeParams, SineTransport,
        SolverConfig,
    };

    // Messaging
    pub use leapfrog_comm::{CommError, GroupConfig};

    // Solver
    pub use leapfrog_solver::{
        max_deviation, solve_parallel, solve_serial, RunReport, Solution, SolverError, StepObserver, StepView,
    };
}
