//! Ghost-cell exchange between neighbouring blocks.
//!
//! One exchange moves two values per interior boundary:
//!
//! ```text
//!        rank r-1                 rank r                  rank r+1
//!  [.. | len] [ghost]   [ghost] [1 | .. | len] [ghost]   [ghost] [1 | ..]
//!          \______RIGHTWARD_____^      ^ \____RIGHTWARD______^
//!                 ^__LEFTWARD__/        \___LEFTWARD________/
//! ```
//!
//! [`HaloExchange::begin`] posts both receives and both sends and returns
//! immediately; the caller updates interior points, then
//! [`PendingHalo::complete`] waits on all four requests and writes the
//! ghosts. Ghosts therefore always hold the neighbour's level from the same
//! step. `Null` neighbours post nothing.

use leapfrog_comm::{Communicator, Request, Tag};
use leapfrog_space::{Links, Neighbor};
use tracing::trace;

use crate::error::SolverError;

/// Tag for values travelling to the higher rank (they land in its left ghost).
pub const TAG_RIGHTWARD: Tag = 0;
/// Tag for values travelling to the lower rank (they land in its right ghost).
pub const TAG_LEFTWARD: Tag = 1;

/// Entry point for the exchange.
pub struct HaloExchange;

impl HaloExchange {
    /// Post the exchange for `level` (a whole local buffer with ghosts).
    ///
    /// The boundary values are copied out at post time, so `level` may be
    /// read again immediately.
    pub fn begin(
        comm: &mut Communicator,
        links: Links,
        level: &[f64],
    ) -> Result<PendingHalo, SolverError> {
        let len = level.len() - 2;
        let from_left = match links.left {
            Neighbor::Peer(r) => comm.irecv(r, TAG_RIGHTWARD)?,
            Neighbor::Null => Request::null(),
        };
        let from_right = match links.right {
            Neighbor::Peer(r) => comm.irecv(r, TAG_LEFTWARD)?,
            Neighbor::Null => Request::null(),
        };
        let to_left = match links.left {
            Neighbor::Peer(r) if len > 0 => comm.isend(r, TAG_LEFTWARD, &level[1..2])?,
            _ => Request::null(),
        };
        let to_right = match links.right {
            Neighbor::Peer(r) if len > 0 => comm.isend(r, TAG_RIGHTWARD, &level[len..=len])?,
            _ => Request::null(),
        };
        trace!(rank = comm.rank(), ?links, "halo posted");
        Ok(PendingHalo {
            requests: [from_left, from_right, to_left, to_right],
        })
    }
}

/// The four in-flight requests of one exchange.
#[must_use = "ghosts are stale until the exchange is completed"]
#[derive(Debug)]
pub struct PendingHalo {
    requests: [Request; 4],
}

impl PendingHalo {
    /// Whether every request has already completed.
    pub fn is_complete(&self) -> bool {
        self.requests.iter().all(Request::is_complete)
    }

    /// Wait for all four requests, then write the received ghosts into
    /// `level`. This is the only blocking point of a step.
    pub fn complete(mut self, comm: &mut Communicator, level: &mut [f64]) -> Result<(), SolverError> {
        comm.wait_all(&mut self.requests)?;
        let rank = comm.rank();
        let ghost = |payload: Option<leapfrog_comm::Payload>| -> Result<Option<f64>, SolverError> {
            match payload {
                None => Ok(None),
                Some(p) => p.first().copied().map(Some).ok_or(SolverError::EmptyHalo { rank }),
            }
        };
        let right_slot = level.len() - 1;
        if let Some(v) = ghost(self.requests[0].take_payload())? {
            level[0] = v;
        }
        if let Some(v) = ghost(self.requests[1].take_payload())? {
            level[right_slot] = v;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leapfrog_comm::{launch, GroupConfig};
    use leapfrog_space::{partition_all, LineTopology};

    /// Each rank fills its owned slots with `100 * rank + slot` and exchanges once.
    fn exchange(points: usize, workers: usize) -> Vec<Vec<f64>> {
        let parts = partition_all(points, workers).unwrap();
        let topo = LineTopology::new(&parts);
        launch(workers, GroupConfig::default(), |comm| {
            let part = parts[comm.rank()];
            let links = topo.links(comm.rank()).unwrap();
            let mut level = vec![-1.0; part.len + 2];
            for (i, slot) in level.iter_mut().enumerate().take(part.len + 1).skip(1) {
                *slot = (100 * comm.rank() + i) as f64;
            }
            let pending = HaloExchange::begin(comm, links, &level).unwrap();
            pending.complete(comm, &mut level).unwrap();
            level
        })
        .unwrap()
    }

    #[test]
    fn ghosts_hold_neighbour_edges() {
        // 9 points over 3 ranks: 3 each.
        let levels = exchange(9, 3);
        assert_eq!(levels[0], vec![-1.0, 1.0, 2.0, 3.0, 101.0]);
        assert_eq!(levels[1], vec![3.0, 101.0, 102.0, 103.0, 201.0]);
        assert_eq!(levels[2], vec![103.0, 201.0, 202.0, 203.0, -1.0]);
    }

    #[test]
    fn single_point_blocks_exchange_both_ways() {
        let levels = exchange(3, 3);
        assert_eq!(levels[1], vec![1.0, 101.0, 201.0]);
    }

    #[test]
    fn isolated_worker_completes_immediately() {
        let out = launch(1, GroupConfig::default(), |comm| {
            let level = vec![0.0; 5];
            let pending = HaloExchange::begin(comm, Links::ISOLATED, &level).unwrap();
            pending.is_complete()
        })
        .unwrap();
        assert!(out[0]);
    }

    #[test]
    fn empty_trailing_workers_take_no_part() {
        // 3 points over 5 ranks: ranks 3, 4 are empty and isolated.
        let levels = exchange(3, 5);
        assert_eq!(levels[2], vec![101.0, 201.0, -1.0]);
        assert_eq!(levels[3], vec![-1.0, -1.0]);
    }

    #[test]
    fn repeated_exchanges_stay_in_step() {
        let parts = partition_all(8, 4).unwrap();
        let topo = LineTopology::new(&parts);
        let out = launch(4, GroupConfig::default(), |comm| {
            let links = topo.links(comm.rank()).unwrap();
            let mut seen = Vec::new();
            let mut level = vec![0.0; 4];
            for step in 0..20 {
                level[1] = step as f64;
                level[2] = step as f64;
                let pending = HaloExchange::begin(comm, links, &level).unwrap();
                pending.complete(comm, &mut level).unwrap();
                if comm.rank() == 1 {
                    seen.push((level[0], level[3]));
                }
            }
            seen
        })
        .unwrap();
        for (step, &(left, right)) in out[1].iter().enumerate() {
            assert_eq!(left, step as f64);
            assert_eq!(right, step as f64);
        }
    }
}
