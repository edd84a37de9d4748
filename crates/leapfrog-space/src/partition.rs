//! Contiguous near-equal block partitioning.
//!
//! `N` points are split over `P` workers: the first `N mod P` ranks get
//! `floor(N/P) + 1` points, the rest get `floor(N/P)`. When `P > N` the
//! trailing ranks own nothing.

use crate::error::SpaceError;

/// The half-open global index range `[start, start + len)` owned by `rank`.
///
/// # Examples
///
/// ```
/// use leapfrog_space::partition;
///
/// // 5 points over 2 workers: the remainder goes to rank 0.
/// let p0 = partition(5, 2, 0).unwrap();
/// let p1 = partition(5, 2, 1).unwrap();
/// assert_eq!((p0.start, p0.len), (0, 3));
/// assert_eq!((p1.start, p1.len), (3, 2));
/// assert!(p0.touches_left());
/// assert!(p1.touches_right(5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Partition {
    /// Owning worker.
    pub rank: usize,
    /// First owned global index.
    pub start: usize,
    /// Number of owned points.
    pub len: usize,
}

impl Partition {
    /// One past the last owned global index.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Whether this worker owns no points.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `global_index` is owned by this partition.
    pub fn contains(&self, global_index: usize) -> bool {
        (self.start..self.end()).contains(&global_index)
    }

    /// Whether the partition owns global index `0`.
    pub fn touches_left(&self) -> bool {
        !self.is_empty() && self.start == 0
    }

    /// Whether the partition owns the last of `points` global indices.
    pub fn touches_right(&self, points: usize) -> bool {
        !self.is_empty() && self.end() == points
    }

    /// Global index of local buffer slot `local` (1-based; slot 0 is the
    /// left ghost).
    pub fn global_index(&self, local: usize) -> usize {
        debug_assert!(local >= 1 && local <= self.len);
        self.start + local - 1
    }
}

/// Partition of `points` global indices for `rank` in a group of `workers`.
pub fn partition(points: usize, workers: usize, rank: usize) -> Result<Partition, SpaceError> {
    if workers == 0 {
        return Err(SpaceError::NoWorkers);
    }
    if points == 0 {
        return Err(SpaceError::EmptyGrid);
    }
    if rank >= workers {
        return Err(SpaceError::RankOutOfRange { rank, workers });
    }
    let base = points / workers;
    let rem = points % workers;
    let len = base + usize::from(rank < rem);
    let start = if rank < rem {
        rank * (base + 1)
    } else {
        rem * (base + 1) + (rank - rem) * base
    };
    Ok(Partition { rank, start, len })
}

/// Partitions for every rank, in rank order.
pub fn partition_all(points: usize, workers: usize) -> Result<Vec<Partition>, SpaceError> {
    (0..workers)
        .map(|rank| partition(points, workers, rank))
        .collect()
}
