//! Property tests: partitions tile `[0, M]` exactly once and links are
//! mutually consistent.

use leapfrog_space::{partition_all, LineTopology, Neighbor};
use proptest::prelude::*;

proptest! {
    #[test]
    fn union_is_exact_cover(cells in 1usize..2000, workers in 1usize..64) {
        let points = cells + 1;
        let parts = partition_all(points, workers).unwrap();
        let mut owner = vec![0u32; points];
        let mut cursor = 0usize;
        for p in &parts {
            prop_assert_eq!(p.start, cursor, "partitions must be contiguous");
            for g in p.start..p.end() {
                owner[g] += 1;
            }
            cursor = p.end();
        }
        prop_assert_eq!(cursor, points);
        prop_assert!(owner.iter().all(|&c| c == 1), "each index owned exactly once");
    }

    #[test]
    fn lengths_differ_by_at_most_one(cells in 1usize..2000, workers in 1usize..64) {
        let parts = partition_all(cells + 1, workers).unwrap();
        let max = parts.iter().map(|p| p.len).max().unwrap();
        let min = parts.iter().map(|p| p.len).min().unwrap();
        prop_assert!(max - min <= 1);
        // Larger blocks come first.
        for w in parts.windows(2) {
            prop_assert!(w[0].len >= w[1].len);
        }
    }

    #[test]
    fn links_are_symmetric(cells in 1usize..200, workers in 1usize..32) {
        let parts = partition_all(cells + 1, workers).unwrap();
        let topo = LineTopology::new(&parts);
        for rank in 0..workers {
            let links = topo.links(rank).unwrap();
            if let Neighbor::Peer(r) = links.right {
                prop_assert_eq!(topo.links(r).unwrap().left, Neighbor::Peer(rank));
                prop_assert_eq!(parts[r].start, parts[rank].end());
            }
            if let Neighbor::Peer(l) = links.left {
                prop_assert_eq!(topo.links(l).unwrap().right, Neighbor::Peer(rank));
            }
        }
    }

    #[test]
    fn exactly_one_worker_touches_each_edge(cells in 1usize..500, workers in 1usize..40) {
        let points = cells + 1;
        let parts = partition_all(points, workers).unwrap();
        prop_assert_eq!(parts.iter().filter(|p| p.touches_left()).count(), 1);
        prop_assert_eq!(parts.iter().filter(|p| p.touches_right(points)).count(), 1);
    }
}
