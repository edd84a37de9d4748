//! Line topology: each worker talks only to `rank - 1` and `rank + 1`.
//!
//! Missing peers are represented as [`Neighbor::Null`], whose sends and
//! receives are elided. Links to or from a worker that owns no points are
//! also `Null`: with remainder-to-lowest partitioning the empty workers
//! are always the highest ranks, so the non-empty workers still form one
//! unbroken chain.

use crate::error::SpaceError;
use crate::partition::Partition;

/// One side of a worker's link set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Neighbor {
    /// Exchange with this rank.
    Peer(usize),
    /// No peer on this side; operations are no-ops.
    Null,
}

impl Neighbor {
    /// The peer rank, if any.
    pub fn rank(self) -> Option<usize> {
        match self {
            Self::Peer(r) => Some(r),
            Self::Null => None,
        }
    }

    /// Whether this side has no peer.
    pub fn is_null(self) -> bool {
        matches!(self, Self::Null)
    }
}

/// A worker's left and right neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Links {
    /// Neighbour owning the indices just below this partition.
    pub left: Neighbor,
    /// Neighbour owning the indices just above this partition.
    pub right: Neighbor,
}

impl Links {
    /// A worker with no neighbours at all.
    pub const ISOLATED: Links = Links {
        left: Neighbor::Null,
        right: Neighbor::Null,
    };
}

/// Resolves [`Links`] over a fixed set of partitions.
#[derive(Clone, Debug)]
pub struct LineTopology<'a> {
    partitions: &'a [Partition],
}

impl<'a> LineTopology<'a> {
    /// Topology over `partitions`, which must be indexed by rank.
    pub fn new(partitions: &'a [Partition]) -> Self {
        Self { partitions }
    }

    /// Number of workers.
    pub fn workers(&self) -> usize {
        self.partitions.len()
    }

    /// Links for `rank`.
    pub fn links(&self, rank: usize) -> Result<Links, SpaceError> {
        let me = self
            .partitions
            .get(rank)
            .ok_or(SpaceError::RankOutOfRange {
                rank,
                workers: self.partitions.len(),
            })?;
        if me.is_empty() {
            return Ok(Links::ISOLATED);
        }
        let peer = |r: Option<usize>| match r.and_then(|r| self.partitions.get(r)) {
            Some(p) if !p.is_empty() => Neighbor::Peer(p.rank),
            _ => Neighbor::Null,
        };
        Ok(Links {
            left: peer(rank.checked_sub(1)),
            right: peer(rank.checked_add(1)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::partition_all;

    #[test]
    fn interior_rank_has_both_peers() {
        let parts = partition_all(12, 4).unwrap();
        let topo = LineTopology::new(&parts);
        let links = topo.links(2).unwrap();
        assert_eq!(links.left, Neighbor::Peer(1));
        assert_eq!(links.right, Neighbor::Peer(3));
    }

    #[test]
    fn end_ranks_have_null_sides() {
        let parts = partition_all(12, 4).unwrap();
        let topo = LineTopology::new(&parts);
        assert_eq!(topo.links(0).unwrap().left, Neighbor::Null);
        assert_eq!(topo.links(0).unwrap().right, Neighbor::Peer(1));
        assert_eq!(topo.links(3).unwrap().right, Neighbor::Null);
    }

    #[test]
    fn single_worker_is_isolated() {
        let parts = partition_all(5, 1).unwrap();
        let topo = LineTopology::new(&parts);
        assert_eq!(topo.links(0).unwrap(), Links::ISOLATED);
    }

    #[test]
    fn empty_partitions_are_cut_out_of_the_chain() {
        // 3 points over 5 workers: ranks 3 and 4 own nothing.
        let parts = partition_all(3, 5).unwrap();
        let topo = LineTopology::new(&parts);
        assert_eq!(topo.links(2).unwrap().right, Neighbor::Null);
        assert_eq!(topo.links(2).unwrap().left, Neighbor::Peer(1));
        assert_eq!(topo.links(3).unwrap(), Links::ISOLATED);
        assert_eq!(topo.links(4).unwrap(), Links::ISOLATED);
    }

    #[test]
    fn out_of_range_rank() {
        let parts = partition_all(3, 2).unwrap();
        let topo = LineTopology::new(&parts);
        assert!(matches!(
            topo.links(2),
            Err(SpaceError::RankOutOfRange { rank: 2, workers: 2 })
        ));
    }

    #[test]
    fn neighbor_helpers() {
        assert_eq!(Neighbor::Peer(3).rank(), Some(3));
        assert_eq!(Neighbor::Null.rank(), None);
        assert!(Neighbor::Null.is_null());
    }
}
