//! Domain decomposition for the leapfrog transport solver.
//!
//! Splits the global index space `[0, M]` into contiguous per-worker
//! [`Partition`]s and resolves each worker's left/right peers on a line
//! topology. Both are pure functions of `(N, P, rank)`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod partition;
pub mod topology;

pub use error::SpaceError;
pub use partition::{partition, partition_all, Partition};
pub use topology::{LineTopology, Links, Neighbor};
