//! Distributed explicit solver for `du/dt + a du/dx = f(t, x)`.
//!
//! The global grid `[0, M]` is split into contiguous blocks, one per worker.
//! Each worker keeps three time levels of its block plus one ghost cell per
//! side and advances them with the centered "cross" (leapfrog) scheme:
//!
//! ```text
//! new[i] = old[i] - lambda * (cur[i+1] - cur[i-1]) + 2 * tau * f(t_k, x_i)
//! ```
//!
//! Ghost cells are refreshed every step by a non-blocking halo exchange
//! whose latency is hidden behind the interior update.
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`levels`] | three rotating time-level buffers |
//! | [`state`] | per-worker grid state and its initialization |
//! | [`stencil`] | point updates and boundary conditions |
//! | [`halo`] | ghost-cell exchange with neighbours |
//! | [`driver`] | per-worker state machine |
//! | [`runner`] | multi-worker entry point and run report |
//! | [`reference`] | single-process oracle |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod driver;
pub mod error;
pub mod halo;
pub mod levels;
pub mod reference;
pub mod runner;
pub mod state;
pub mod stencil;

pub use driver::{run_worker, NoopObserver, Phase, StepObserver, StepView, Worker, WorkerOutcome};
pub use error::SolverError;
pub use halo::{HaloExchange, PendingHalo};
pub use levels::TimeLevels;
pub use reference::{max_deviation, solve_serial};
pub use runner::{solve_parallel, RunReport, Solution};
pub use state::GridState;
