//! Orthogonality relations of a finished character table.
//!
//! - Rows: Σ_ρ |C_ρ| · χ_λ(ρ) · χ_μ(ρ) = n! · δ_{λμ}
//! - Columns: Σ_λ χ_λ(ρ) · χ_λ(σ) = z_ρ · δ_{ρσ}
//!
//! The table is read-only here, so all index pairs are checked in parallel
//! with rayon. Arithmetic is done in [`BigInt`] regardless of the table's own
//! value type, since the weighted sums overflow machine integers long before
//! the character values do.

use std::time::Instant;

use num_bigint::BigInt;
use rayon::prelude::*;
use thiserror::Error;
use tracing::info;

use crate::char_table::CharacterTable;
use crate::class_functions::{centralizer_order, class_size, factorial};
use crate::types::Partition;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrthogonalityViolation {
    #[error("row relation fails for χ_{first} and χ_{second}: sum {actual}, expected {expected}")]
    Row {
        first: Partition,
        second: Partition,
        actual: BigInt,
        expected: BigInt,
    },

    #[error("column relation fails for classes {first} and {second}: sum {actual}, expected {expected}")]
    Column {
        first: Partition,
        second: Partition,
        actual: BigInt,
        expected: BigInt,
    },
}

fn to_big<V: Clone + Into<BigInt>>(table: &CharacterTable<V>) -> Vec<Vec<BigInt>> {
    table
        .values
        .iter()
        .map(|row| row.iter().cloned().map(Into::into).collect())
        .collect()
}

fn index_pairs(size: usize) -> Vec<(usize, usize)> {
    (0..size)
        .flat_map(|i| (i..size).map(move |j| (i, j)))
        .collect()
}

/// First row pair (in index order) violating the row relation, if any.
pub fn check_row_orthogonality<V>(table: &CharacterTable<V>) -> Result<(), OrthogonalityViolation>
where
    V: Clone + Into<BigInt> + Sync,
{
    let start_time = Instant::now();
    let values = to_big(table);
    let weights: Vec<BigInt> = table
        .partitions
        .iter()
        .map(|rho| BigInt::from(class_size(rho)))
        .collect();
    let group_order = BigInt::from(factorial(table.degree));
    let zero = BigInt::from(0);

    let violation = index_pairs(table.size())
        .into_par_iter()
        .find_first(|&(i, j)| {
            let sum: BigInt = (0..table.size())
                .map(|k| &weights[k] * &values[i][k] * &values[j][k])
                .sum();
            let expected = if i == j { &group_order } else { &zero };
            sum != *expected
        });

    info!(
        degree = table.degree,
        elapsed_ms = start_time.elapsed().as_secs_f64() * 1000.0,
        ok = violation.is_none(),
        "checked row orthogonality"
    );

    match violation {
        None => Ok(()),
        Some((i, j)) => {
            let actual = (0..table.size())
                .map(|k| &weights[k] * &values[i][k] * &values[j][k])
                .sum();
            Err(OrthogonalityViolation::Row {
                first: table.partitions[i].clone(),
                second: table.partitions[j].clone(),
                actual,
                expected: if i == j { group_order } else { zero },
            })
        }
    }
}

/// First column pair (in index order) violating the column relation, if any.
pub fn check_column_orthogonality<V>(
    table: &CharacterTable<V>,
) -> Result<(), OrthogonalityViolation>
where
    V: Clone + Into<BigInt> + Sync,
{
    let start_time = Instant::now();
    let values = to_big(table);
    let column_sum = |i: usize, j: usize| -> BigInt {
        (0..table.size())
            .map(|k| &values[k][i] * &values[k][j])
            .sum()
    };
    let expected = |i: usize, j: usize| -> BigInt {
        if i == j {
            BigInt::from(centralizer_order(&table.partitions[i]))
        } else {
            BigInt::from(0)
        }
    };

    let violation = index_pairs(table.size())
        .into_par_iter()
        .find_first(|&(i, j)| column_sum(i, j) != expected(i, j));

    info!(
        degree = table.degree,
        elapsed_ms = start_time.elapsed().as_secs_f64() * 1000.0,
        ok = violation.is_none(),
        "checked column orthogonality"
    );

    match violation {
        None => Ok(()),
        Some((i, j)) => Err(OrthogonalityViolation::Column {
            first: table.partitions[i].clone(),
            second: table.partitions[j].clone(),
            actual: column_sum(i, j),
            expected: expected(i, j),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CharTable;

    #[test]
    fn test_small_tables_are_orthogonal() {
        let mut chars = CharTable::<i64>::new();
        for n in 0..=7 {
            let table = chars.labelled_table(n);
            assert_eq!(check_row_orthogonality(&table), Ok(()), "rows, n={n}");
            assert_eq!(check_column_orthogonality(&table), Ok(()), "columns, n={n}");
        }
    }

    #[test]
    fn test_corrupted_cell_is_reported() {
        let mut chars = CharTable::<i64>::new();
        let mut table = chars.labelled_table(4);
        table.values[1][2] += 1;
        assert!(matches!(
            check_row_orthogonality(&table),
            Err(OrthogonalityViolation::Row { .. })
        ));
        assert!(matches!(
            check_column_orthogonality(&table),
            Err(OrthogonalityViolation::Column { .. })
        ));
    }
}
