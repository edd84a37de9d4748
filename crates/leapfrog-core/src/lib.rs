//! Core types for the leapfrog transport solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! problem being solved (initial condition, inflow boundary, source term),
//! the user-facing [`SolverConfig`], and the derived [`SchemeParams`] shared
//! read-only by every worker.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod params;
pub mod problem;

pub use config::SolverConfig;
pub use error::ConfigError;
pub use params::{CourantWarning, SchemeParams};
pub use problem::{FnProblem, Problem, SineTransport};
