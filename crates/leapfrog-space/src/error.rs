//! Error types for decomposition queries.

use std::fmt;

/// Errors arising from partitioning or topology lookups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// The worker group has no members.
    NoWorkers,
    /// The global index space has no points.
    EmptyGrid,
    /// A rank outside `[0, workers)` was requested.
    RankOutOfRange {
        /// The offending rank.
        rank: usize,
        /// Number of workers in the group.
        workers: usize,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWorkers => write!(f, "worker count must be at least 1"),
            Self::EmptyGrid => write!(f, "grid must have at least one point"),
            Self::RankOutOfRange { rank, workers } => {
                write!(f, "rank {rank} out of range [0, {workers})")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
