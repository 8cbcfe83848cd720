//! Integer partitions of n, generated bottom-up and cached.
//!
//! Partitions of k are built from the partitions of every smaller i by
//! appending the part (k − i) and re-sorting. The multiset over all i has
//! duplicates (e.g. (2,1) arises from (1)+2 and from (2)+1); they are
//! collapsed keeping the first occurrence, so the stored order is insertion
//! order rather than lexicographic. Generation order for n = 3 is
//! `[(3), (2,1), (1,1,1)]`.
//!
//! Use [`PartitionCache::sorted_partitions_of`] when a canonical order is
//! needed.

use std::collections::HashSet;
use std::time::Instant;

use tracing::debug;

use crate::types::Partition;

/// Append-only cache: `levels[k]` holds every partition of k.
///
/// Seeded with the partitions of 0 and 1: `[()]` and `[(1)]`.
#[derive(Clone, Debug)]
pub struct PartitionCache {
    levels: Vec<Vec<Partition>>,
}

impl Default for PartitionCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PartitionCache {
    pub fn new() -> Self {
        Self {
            levels: vec![vec![Partition::empty()], vec![Partition::from([1])]],
        }
    }

    /// Largest k whose partitions are cached.
    pub fn max_cached_degree(&self) -> usize {
        self.levels.len() - 1
    }

    /// All partitions of `n` in generation order. Grows the cache up to `n`.
    pub fn partitions_of(&mut self, n: usize) -> &[Partition] {
        self.extend_to(n);
        &self.levels[n]
    }

    /// All partitions of `n` in reverse lexicographic order: (n) first, (1^n) last.
    pub fn sorted_partitions_of(&mut self, n: usize) -> Vec<Partition> {
        let mut sorted = self.partitions_of(n).to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted
    }

    /// p(n), the number of partitions of n.
    pub fn partition_count(&mut self, n: usize) -> usize {
        self.partitions_of(n).len()
    }

    fn extend_to(&mut self, n: usize) {
        if n < self.levels.len() {
            return;
        }
        let start_time = Instant::now();
        let first_new = self.levels.len();

        for num in first_new..=n {
            let mut seen: HashSet<Partition> = HashSet::new();
            let mut partitions_of_num = Vec::new();
            for index in 0..num {
                for partition in &self.levels[index] {
                    let mut parts = partition.parts().to_vec();
                    parts.push(num - index);
                    let mut candidate = Partition::new(parts);
                    candidate.sort_non_increasing();
                    if seen.insert(candidate.clone()) {
                        partitions_of_num.push(candidate);
                    }
                }
            }
            self.levels.push(partitions_of_num);
        }

        debug!(
            from = first_new,
            to = n,
            count = self.levels[n].len(),
            elapsed_ms = start_time.elapsed().as_secs_f64() * 1000.0,
            "extended partition cache"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(list: &[Partition]) -> Vec<Vec<usize>> {
        list.iter().map(|p| p.parts().to_vec()).collect()
    }

    #[test]
    fn test_seed_levels() {
        let mut cache = PartitionCache::new();
        assert_eq!(cache.partitions_of(0), &[Partition::empty()]);
        assert_eq!(cache.partitions_of(1), &[Partition::from([1])]);
        assert_eq!(cache.max_cached_degree(), 1);
    }

    #[test]
    fn test_generation_order_small() {
        let mut cache = PartitionCache::new();
        assert_eq!(parts(cache.partitions_of(2)), vec![vec![2], vec![1, 1]]);
        assert_eq!(
            parts(cache.partitions_of(3)),
            vec![vec![3], vec![2, 1], vec![1, 1, 1]]
        );
        assert_eq!(
            parts(cache.partitions_of(4)),
            vec![vec![4], vec![3, 1], vec![2, 2], vec![2, 1, 1], vec![1, 1, 1, 1]]
        );
    }

    #[test]
    fn test_partition_counts() {
        // p(0..=15)
        let expected = [1, 1, 2, 3, 5, 7, 11, 15, 22, 30, 42, 56, 77, 101, 135, 176];
        let mut cache = PartitionCache::new();
        for (n, &p) in expected.iter().enumerate() {
            assert_eq!(cache.partition_count(n), p, "p({n})");
        }
    }

    #[test]
    fn test_every_partition_is_canonical_and_sums_to_n() {
        let mut cache = PartitionCache::new();
        for n in 0..=10 {
            for p in cache.partitions_of(n) {
                assert!(p.is_canonical(), "{p} not canonical");
                assert_eq!(p.size(), n);
            }
        }
    }

    #[test]
    fn test_no_duplicates() {
        let mut cache = PartitionCache::new();
        let list = cache.partitions_of(12).to_vec();
        let unique: HashSet<_> = list.iter().cloned().collect();
        assert_eq!(unique.len(), list.len());
    }

    #[test]
    fn test_repeated_calls_are_idempotent() {
        let mut cache = PartitionCache::new();
        let first = cache.partitions_of(7).to_vec();
        cache.partitions_of(9);
        let second = cache.partitions_of(7).to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sorted_order() {
        let mut cache = PartitionCache::new();
        let sorted = cache.sorted_partitions_of(5);
        assert_eq!(sorted.first(), Some(&Partition::from([5])));
        assert_eq!(sorted.last(), Some(&Partition::from([1, 1, 1, 1, 1])));
        assert!(sorted.windows(2).all(|w| w[0] > w[1]));
    }
}
