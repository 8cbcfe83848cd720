//! Full character tables: the p(n) × p(n) matrix of χ_λ(ρ).
//!
//! Rows (characters) and columns (classes) are indexed by the same list,
//! taken from one call to [`PartitionCache::partitions_of`]. The order is
//! the generator's insertion order; [`CharacterTable::reordered_canonically`]
//! re-sorts both axes into reverse lexicographic order.
//!
//! [`PartitionCache::partitions_of`]: crate::partitions::PartitionCache::partitions_of

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::types::{CharTable, CharacterValue, Partition};

/// Character table of S_n together with its row/column labels.
///
/// `values[i][j] = χ_{partitions[i]}(partitions[j])`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterTable<V> {
    pub degree: usize,
    pub partitions: Vec<Partition>,
    pub values: Vec<Vec<V>>,
}

impl<V: Clone> CharacterTable<V> {
    /// Side length p(n).
    pub fn size(&self) -> usize {
        self.partitions.len()
    }

    pub fn index_of(&self, partition: &Partition) -> Option<usize> {
        let key = partition.corrected();
        self.partitions.iter().position(|p| *p == key)
    }

    /// χ_λ(ρ) looked up by label.
    pub fn value(&self, lambda: &Partition, rho: &Partition) -> Option<&V> {
        let i = self.index_of(lambda)?;
        let j = self.index_of(rho)?;
        Some(&self.values[i][j])
    }

    /// Same table with both axes in reverse lexicographic order.
    pub fn reordered_canonically(&self) -> CharacterTable<V> {
        let mut order: Vec<usize> = (0..self.size()).collect();
        order.sort_unstable_by(|&a, &b| self.partitions[b].cmp(&self.partitions[a]));

        let partitions = order.iter().map(|&i| self.partitions[i].clone()).collect();
        let values = order
            .iter()
            .map(|&i| order.iter().map(|&j| self.values[i][j].clone()).collect())
            .collect();

        CharacterTable {
            degree: self.degree,
            partitions,
            values,
        }
    }
}

impl<V: CharacterValue> CharTable<V> {
    /// All partitions of `n`, in the order used to index [`Self::character_table`].
    pub fn partitions_of(&mut self, n: usize) -> Vec<Partition> {
        self.partitions.partitions_of(n).to_vec()
    }

    /// All partitions of `n` in reverse lexicographic order, `(n)` first.
    pub fn sorted_partitions_of(&mut self, n: usize) -> Vec<Partition> {
        self.partitions.sorted_partitions_of(n)
    }

    /// The p(n) × p(n) matrix of χ_λ(ρ), rows and columns in [`Self::partitions_of`] order.
    ///
    /// n = 0 gives `[[1]]`.
    pub fn character_table(&mut self, n: usize) -> Vec<Vec<V>> {
        self.labelled_table(n).values
    }

    /// Like [`Self::character_table`] but keeps the labels alongside the values.
    pub fn labelled_table(&mut self, n: usize) -> CharacterTable<V> {
        let start_time = Instant::now();
        let partitions = self.partitions_of(n);

        let mut values = Vec::with_capacity(partitions.len());
        for lambda in &partitions {
            let row: Vec<V> = partitions
                .iter()
                .map(|rho| self.char_value(lambda, rho))
                .collect();
            values.push(row);
        }

        info!(
            degree = n,
            classes = partitions.len(),
            cached_values = self.cached_values(),
            elapsed_ms = start_time.elapsed().as_secs_f64() * 1000.0,
            "computed character table"
        );

        CharacterTable {
            degree: n,
            partitions,
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_zero_and_one() {
        let mut table = CharTable::<i64>::new();
        assert_eq!(table.character_table(0), vec![vec![1]]);
        assert_eq!(table.character_table(1), vec![vec![1]]);
    }

    #[test]
    fn test_s3_in_generation_order() {
        let mut table = CharTable::<i64>::new();
        assert_eq!(
            table.character_table(3),
            vec![vec![1, 1, 1], vec![-1, 0, 2], vec![1, -1, 1]]
        );
    }

    #[test]
    fn test_s3_standard_character_by_label() {
        let mut table = CharTable::<i64>::new();
        let labelled = table.labelled_table(3);
        let standard = Partition::from([2, 1]);
        assert_eq!(labelled.value(&standard, &Partition::from([3])), Some(&-1));
        assert_eq!(labelled.value(&standard, &Partition::from([2, 1])), Some(&0));
        assert_eq!(labelled.value(&standard, &Partition::from([1, 1, 1])), Some(&2));
    }

    #[test]
    fn test_sorted_partitions_of() {
        let mut table = CharTable::<i64>::new();
        assert_eq!(
            table.sorted_partitions_of(4),
            vec![
                Partition::from([4]),
                Partition::from([3, 1]),
                Partition::from([2, 2]),
                Partition::from([2, 1, 1]),
                Partition::from([1, 1, 1, 1]),
            ]
        );
    }

    #[test]
    fn test_labels_match_partitions_of() {
        let mut table = CharTable::<i64>::new();
        let labelled = table.labelled_table(5);
        assert_eq!(labelled.partitions, table.partitions_of(5));
        assert_eq!(labelled.size(), 7);
        assert!(labelled.values.iter().all(|row| row.len() == 7));
    }

    #[test]
    fn test_value_lookup_by_label() {
        let mut table = CharTable::<i64>::new();
        let labelled = table.labelled_table(4);
        let lambda = Partition::from([2, 2]);
        assert_eq!(labelled.value(&lambda, &Partition::from([1, 1, 1, 1])), Some(&2));
        assert_eq!(labelled.value(&lambda, &Partition::from([3, 1, 0])), Some(&-1));
        assert_eq!(labelled.value(&lambda, &Partition::from([5])), None);
    }

    #[test]
    fn test_reordered_canonically_keeps_cells() {
        let mut table = CharTable::<i64>::new();
        let labelled = table.labelled_table(6);
        let sorted = labelled.reordered_canonically();
        assert!(sorted.partitions.windows(2).all(|w| w[0] > w[1]));
        for lambda in &labelled.partitions {
            for rho in &labelled.partitions {
                assert_eq!(sorted.value(lambda, rho), labelled.value(lambda, rho));
            }
        }
    }
}
