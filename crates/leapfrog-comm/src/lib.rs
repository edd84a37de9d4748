//! In-process worker group with explicit message passing.
//!
//! Each worker runs on its own thread and owns a [`Communicator`]. Workers
//! share no mutable state: they exchange tagged `f64` payloads over
//! crossbeam channels with a non-blocking post / wait-later API modelled on
//! point-to-point MPI, plus a barrier, a group-wide abort and a wall clock.
//!
//! ```
//! use leapfrog_comm::{launch, GroupConfig, Request};
//!
//! let sums = launch(3, GroupConfig::default(), |comm| {
//!     let right = (comm.rank() + 1) % comm.size();
//!     let left = (comm.rank() + comm.size() - 1) % comm.size();
//!     let mut reqs = [
//!         comm.irecv(left, 7)?,
//!         comm.isend(right, 7, &[comm.rank() as f64])?,
//!     ];
//!     comm.wait_all(&mut reqs)?;
//!     let got = reqs[0].take_payload().unwrap_or_default();
//!     comm.barrier()?;
//!     Ok::<f64, leapfrog_comm::CommError>(got[0])
//! })
//! .unwrap();
//! let sums: Vec<f64> = sums.into_iter().map(|r| r.unwrap()).collect();
//! assert_eq!(sums, vec![2.0, 0.0, 1.0]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod communicator;
pub mod config;
pub mod error;
pub mod group;
mod message;
pub mod request;

pub use communicator::{AbortHandle, Communicator};
pub use config::GroupConfig;
pub use error::CommError;
pub use group::{create_group, launch};
pub use message::{Payload, Tag};
pub use request::Request;
