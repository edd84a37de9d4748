//! Error types for the worker group.

use std::error::Error;
use std::fmt;
use std::time::Duration;

/// Errors from point-to-point messaging, barriers and group launch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommError {
    /// A group must have at least one worker.
    EmptyGroup,
    /// A peer rank outside `[0, size)` was addressed.
    InvalidRank {
        /// The offending rank.
        rank: usize,
        /// Group size.
        size: usize,
    },
    /// The group was aborted by `origin`; no further communication is
    /// possible.
    Aborted {
        /// Rank that requested the abort.
        origin: usize,
    },
    /// A blocking wait exceeded the configured receive timeout.
    Timeout {
        /// Rank that gave up waiting.
        rank: usize,
        /// How long it waited.
        waited: Duration,
    },
    /// The peer's mailbox is gone (its worker already exited).
    Disconnected {
        /// The unreachable rank.
        peer: usize,
    },
    /// This worker's own inbox was closed, so nothing can arrive any more.
    InboxClosed {
        /// Rank whose inbox closed.
        rank: usize,
    },
    /// A worker thread panicked.
    WorkerPanicked {
        /// Rank of the panicked worker.
        rank: usize,
    },
    /// A worker thread could not be spawned.
    ThreadSpawnFailed {
        /// Rank whose thread failed to start.
        rank: usize,
        /// OS error description.
        reason: String,
    },
}

impl fmt::Display for CommError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGroup => write!(f, "worker group must have at least one member"),
            Self::InvalidRank { rank, size } => {
                write!(f, "rank {rank} out of range for group of {size}")
            }
            Self::Aborted { origin } => write!(f, "worker group aborted by rank {origin}"),
            Self::Timeout { rank, waited } => {
                write!(f, "rank {rank} timed out after {waited:?} waiting for a message")
            }
            Self::Disconnected { peer } => write!(f, "rank {peer} is no longer reachable"),
            Self::InboxClosed { rank } => write!(f, "inbox of rank {rank} is closed"),
            Self::WorkerPanicked { rank } => write!(f, "worker thread for rank {rank} panicked"),
            Self::ThreadSpawnFailed { rank, reason } => {
                write!(f, "failed to spawn worker thread for rank {rank}: {reason}")
            }
        }
    }
}

impl Error for CommError {}
