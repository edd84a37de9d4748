//! Per-worker grid state: the partition, scheme constants and three time
//! levels over the owned block.

use leapfrog_core::{Problem, SchemeParams};
use leapfrog_space::Partition;

use crate::error::SolverError;
use crate::levels::TimeLevels;
use crate::stencil::{ghost_adjacent, leapfrog_interior, upwind_interior, Block};

/// Everything a worker owns.
///
/// An explicit value rather than process-wide state, so several solvers can
/// live in one process and the numerics can be driven without a worker
/// group. Halo exchange is the caller's job: the `*_interior` updates never
/// read a ghost, the `*_edges` updates expect fresh ghosts.
#[derive(Clone, Debug)]
pub struct GridState {
    partition: Partition,
    params: SchemeParams,
    levels: TimeLevels,
}

impl GridState {
    /// Allocate zeroed levels for `partition`.
    pub fn new(partition: Partition, params: SchemeParams) -> Result<Self, SolverError> {
        let levels = TimeLevels::new(partition.len).map_err(|_| SolverError::AllocationFailed {
            rank: partition.rank,
            len: partition.len.saturating_add(2),
        })?;
        Ok(Self {
            partition,
            params,
            levels,
        })
    }

    /// The owned block.
    pub fn partition(&self) -> Partition {
        self.partition
    }

    /// Scheme constants.
    pub fn params(&self) -> &SchemeParams {
        &self.params
    }

    /// The three levels.
    pub fn levels(&self) -> &TimeLevels {
        &self.levels
    }

    /// Mutable access to the three levels (for halo completion).
    pub fn levels_mut(&mut self) -> &mut TimeLevels {
        &mut self.levels
    }

    /// Owned values of the current level.
    pub fn owned_cur(&self) -> &[f64] {
        owned(self.levels.cur(), self.partition.len)
    }

    /// Owned values of the previous level.
    pub fn owned_old(&self) -> &[f64] {
        owned(self.levels.old(), self.partition.len)
    }

    fn block<'p>(&self, problem: &'p dyn Problem) -> Block<'p> {
        Block {
            params: self.params,
            partition: self.partition,
            problem,
        }
    }

    /// Fill `old` with `u(0, x)`.
    ///
    /// The global left edge and its ghost take the inflow value `psi(0)`,
    /// the global right edge and its ghost take `0`.
    pub fn init_initial_level(&mut self, problem: &dyn Problem) {
        let len = self.partition.len;
        if len == 0 {
            return;
        }
        let block = self.block(problem);
        let old = self.levels.old_mut();
        for (i, slot) in old[1..=len].iter_mut().enumerate() {
            let global = block.partition.start + i;
            *slot = problem.initial(block.params.x(global));
        }
        if block.partition.touches_left() {
            let edge = problem.inflow(0.0);
            old[0] = edge;
            old[1] = edge;
        }
        if block.partition.touches_right(block.params.point_count()) {
            old[len] = 0.0;
            old[len + 1] = 0.0;
        }
    }

    /// First step, points that need no ghost: `cur` from `old` for slots
    /// `2..=len`.
    pub fn warmup_interior(&mut self, problem: &dyn Problem) {
        let block = self.block(problem);
        let (old, cur, _) = self.levels.roles_mut();
        for i in upwind_interior(block.partition.len) {
            cur[i] = block.upwind_at(i, old);
        }
    }

    /// First step, slot `1` (reads the left ghost of `old`), then the
    /// physical-edge ghosts of `cur`.
    pub fn warmup_edges(&mut self, problem: &dyn Problem) {
        if self.partition.is_empty() {
            return;
        }
        let block = self.block(problem);
        let (old, cur, _) = self.levels.roles_mut();
        cur[1] = block.upwind_at(1, old);
        block.fix_edge_ghosts(cur, block.params.t(1));
    }

    /// Leapfrog step `k -> k + 1` for slots that need no ghost.
    pub fn step_interior(&mut self, problem: &dyn Problem, k: usize) {
        let block = self.block(problem);
        let (old, cur, new) = self.levels.roles_mut();
        for i in leapfrog_interior(block.partition.len) {
            new[i] = block.leapfrog_at(k, i, old, cur);
        }
    }

    /// Leapfrog step `k -> k + 1` for the ghost-adjacent slots, then the
    /// physical-edge ghosts of `new`.
    pub fn step_edges(&mut self, problem: &dyn Problem, k: usize) {
        if self.partition.is_empty() {
            return;
        }
        let block = self.block(problem);
        let (old, cur, new) = self.levels.roles_mut();
        for i in ghost_adjacent(block.partition.len) {
            new[i] = block.leapfrog_at(k, i, old, cur);
        }
        block.fix_edge_ghosts(new, block.params.t(k + 1));
    }

    /// Rotate the level roles after a completed step.
    pub fn rotate(&mut self) {
        self.levels.rotate();
    }
}

fn owned(level: &[f64], len: usize) -> &[f64] {
    &level[1..=len]
}
