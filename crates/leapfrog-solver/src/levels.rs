//! Three rotating time-level buffers.
//!
//! Holds the levels `t_{k-1}`, `t_k`, `t_{k+1}` as roles `old`, `cur`, `new`
//! over a fixed array of three buffers. [`TimeLevels::rotate`] reassigns
//! the roles without copying:
//!
//! ```text
//! head:      0            1            2
//! old   -> buffers[0]  buffers[1]  buffers[2]
//! cur   -> buffers[1]  buffers[2]  buffers[0]
//! new   -> buffers[2]  buffers[0]  buffers[1]
//! ```

use std::collections::TryReserveError;

/// Three time levels of `len + 2` values each (one ghost per side).
#[derive(Clone, Debug)]
pub struct TimeLevels {
    buffers: [Vec<f64>; 3],
    head: usize,
}

impl TimeLevels {
    /// Allocate zeroed levels for a block of `owned` points.
    ///
    /// Uses fallible reservation so the caller can abort its group instead
    /// of the allocator aborting the process.
    pub fn new(owned: usize) -> Result<Self, TryReserveError> {
        let len = owned.saturating_add(2);
        Ok(Self {
            buffers: [zeroed(len)?, zeroed(len)?, zeroed(len)?],
            head: 0,
        })
    }

    /// Number of owned points (buffer length minus the two ghosts).
    pub fn owned_len(&self) -> usize {
        self.buffers[0].len() - 2
    }

    /// Level `t_{k-1}`.
    pub fn old(&self) -> &[f64] {
        &self.buffers[self.head]
    }

    /// Level `t_k`.
    pub fn cur(&self) -> &[f64] {
        &self.buffers[(self.head + 1) % 3]
    }

    /// Write target `t_{k+1}`.
    pub fn next(&self) -> &[f64] {
        &self.buffers[(self.head + 2) % 3]
    }

    /// Mutable level `t_{k-1}`.
    pub fn old_mut(&mut self) -> &mut [f64] {
        &mut self.buffers[self.head]
    }

    /// Mutable level `t_k`.
    pub fn cur_mut(&mut self) -> &mut [f64] {
        &mut self.buffers[(self.head + 1) % 3]
    }

    /// Disjoint mutable access to `(old, cur, new)`.
    pub fn roles_mut(&mut self) -> (&mut [f64], &mut [f64], &mut [f64]) {
        let [a, b, c] = &mut self.buffers;
        let (old, cur, new) = match self.head {
            0 => (a, b, c),
            1 => (b, c, a),
            _ => (c, a, b),
        };
        (old.as_mut_slice(), cur.as_mut_slice(), new.as_mut_slice())
    }

    /// `old := cur`, `cur := new`, `new := old`.
    pub fn rotate(&mut self) {
        self.head = (self.head + 1) % 3;
    }
}

pub(crate) fn zeroed(len: usize) -> Result<Vec<f64>, TryReserveError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)?;
    v.resize(len, 0.0);
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(levels: &mut TimeLevels) {
        let (old, cur, new) = levels.roles_mut();
        old.fill(1.0);
        cur.fill(2.0);
        new.fill(3.0);
    }

    #[test]
    fn buffers_include_ghosts() {
        let levels = TimeLevels::new(4).unwrap();
        assert_eq!(levels.owned_len(), 4);
        assert_eq!(levels.old().len(), 6);
        assert!(levels.cur().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn empty_block_still_has_ghosts() {
        let levels = TimeLevels::new(0).unwrap();
        assert_eq!(levels.owned_len(), 0);
        assert_eq!(levels.next().len(), 2);
    }

    #[test]
    fn rotate_shifts_roles() {
        let mut levels = TimeLevels::new(3).unwrap();
        tagged(&mut levels);
        levels.rotate();
        assert_eq!(levels.old()[0], 2.0);
        assert_eq!(levels.cur()[0], 3.0);
        assert_eq!(levels.next()[0], 1.0);
    }

    #[test]
    fn three_rotations_restore_roles() {
        let mut levels = TimeLevels::new(3).unwrap();
        tagged(&mut levels);
        for _ in 0..3 {
            levels.rotate();
        }
        assert_eq!(levels.old()[1], 1.0);
        assert_eq!(levels.cur()[1], 2.0);
        assert_eq!(levels.next()[1], 3.0);
    }

    #[test]
    fn rotate_does_not_move_data() {
        let mut levels = TimeLevels::new(2).unwrap();
        let before = levels.cur().as_ptr();
        levels.rotate();
        assert_eq!(levels.old().as_ptr(), before);
    }

    #[test]
    fn roles_mut_matches_accessors_after_rotation() {
        let mut levels = TimeLevels::new(2).unwrap();
        levels.rotate();
        levels.rotate();
        {
            let (old, cur, new) = levels.roles_mut();
            old[1] = 10.0;
            cur[1] = 20.0;
            new[1] = 30.0;
        }
        assert_eq!(levels.old()[1], 10.0);
        assert_eq!(levels.cur()[1], 20.0);
        assert_eq!(levels.next()[1], 30.0);
        levels.cur_mut()[0] = -1.0;
        levels.old_mut()[0] = -2.0;
        assert_eq!(levels.cur()[0], -1.0);
        assert_eq!(levels.old()[0], -2.0);
    }

    #[test]
    fn oversized_request_fails_without_aborting() {
        assert!(TimeLevels::new(usize::MAX / 4).is_err());
    }
}
