//! Core data structures: partitions, border-strip removals, and the value trait.
//!
//! A [`Partition`] is the label of both an irreducible character χ_λ and a
//! conjugacy class ρ of S_n. A `Partition` never holds zero parts: every
//! constructor (deserialization included) drops them, so equality, ordering
//! and hashing are on the corrected sequence and `(2,1)`, `(2,1,0)` and
//! `(2,0,1)` are the same value. Raw rows with zeros only appear in
//! [`BorderStripRemoval`].

use std::collections::HashMap;
use std::fmt;
use std::ops::{AddAssign, Neg};
use std::str::FromStr;

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::partitions::PartitionCache;

/// Integer partition λ = (λ_1, λ_2, ..., λ_k).
///
/// Zero parts are dropped on construction; the order of the remaining parts
/// is kept. Callers pass non-increasing parts (or sort with
/// [`Partition::sort_non_increasing`]) for the value to be canonical.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<usize>", into = "Vec<usize>")]
pub struct Partition(Vec<usize>);

impl Partition {
    pub fn new(mut parts: Vec<usize>) -> Self {
        parts.retain(|&p| p > 0);
        Self(parts)
    }

    /// The empty partition, the only partition of 0.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn parts(&self) -> &[usize] {
        &self.0
    }

    pub fn into_parts(self) -> Vec<usize> {
        self.0
    }

    /// Number of (non-zero) rows.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// |λ|: total number of cells.
    pub fn size(&self) -> usize {
        self.0.iter().sum()
    }

    /// Largest part, or 0 for the empty partition.
    pub fn first_part(&self) -> usize {
        self.0.first().copied().unwrap_or(0)
    }

    /// Memo-key form. Zeros are already gone, so this is a copy.
    pub fn corrected(&self) -> Partition {
        self.clone()
    }

    /// True if parts are non-increasing.
    pub fn is_canonical(&self) -> bool {
        self.0.windows(2).all(|w| w[0] >= w[1])
    }

    /// Partition with the first part removed (ρ ↦ ρ[1..]).
    pub fn without_first_part(&self) -> Partition {
        Partition(self.0.iter().skip(1).copied().collect())
    }

    /// Sort the parts into non-increasing order.
    pub fn sort_non_increasing(&mut self) {
        self.0.sort_unstable_by(|a, b| b.cmp(a));
    }
}

impl From<Vec<usize>> for Partition {
    fn from(parts: Vec<usize>) -> Self {
        Self::new(parts)
    }
}

impl From<&[usize]> for Partition {
    fn from(parts: &[usize]) -> Self {
        Self::new(parts.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for Partition {
    fn from(parts: [usize; N]) -> Self {
        Self::new(parts.to_vec())
    }
}

impl From<Partition> for Vec<usize> {
    fn from(partition: Partition) -> Self {
        partition.0
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", part)?;
        }
        write!(f, ")")
    }
}

/// Parses comma-separated parts such as `"3,2,1"`; `""` is the empty partition.
///
/// Parts are sorted into non-increasing order and zeros are dropped, so the
/// result is always canonical.
impl FromStr for Partition {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().trim_start_matches('(').trim_end_matches(')');
        if trimmed.trim().is_empty() {
            return Ok(Partition::empty());
        }
        let mut parts = Vec::new();
        for token in trimmed.split(',') {
            let part = token.trim().parse::<usize>().map_err(|e| Error::InvalidPartition {
                input: input.to_string(),
                reason: format!("{:?}: {}", token.trim(), e),
            })?;
            parts.push(part);
        }
        let mut partition = Partition::new(parts);
        partition.sort_non_increasing();
        Ok(partition)
    }
}

/// One way of removing a border strip ξ from λ: `partition + border_strip == λ`.
///
/// Both vectors have the row count of the λ they came from. `partition` is
/// the residual λ* (uncorrected); `border_strip` counts the cells taken from
/// each row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BorderStripRemoval {
    pub partition: Vec<usize>,
    pub border_strip: Vec<usize>,
}

impl BorderStripRemoval {
    /// Number of rows the strip touches.
    pub fn height(&self) -> usize {
        self.border_strip.iter().filter(|&&cells| cells > 0).count()
    }

    /// (−1)^(height − 1).
    pub fn sign(&self) -> i32 {
        if self.height() % 2 == 1 {
            1
        } else {
            -1
        }
    }

    /// Cells in the strip.
    pub fn length(&self) -> usize {
        self.border_strip.iter().sum()
    }

    /// λ* with its zero rows dropped.
    pub fn residual(&self) -> Partition {
        Partition::from(self.partition.as_slice())
    }
}

/// Integer type a character value can be accumulated in.
///
/// Blanket-implemented for every signed type with the ring operations the
/// recursion needs, so `i32`, `i64`, `i128` and `num_bigint::BigInt` all work.
/// The caller sizes the type: the recursion does not check for overflow.
pub trait CharacterValue: Clone + Zero + One + Neg<Output = Self> + AddAssign {}

impl<T> CharacterValue for T where T: Clone + Zero + One + Neg<Output = T> + AddAssign {}

/// Memo key: corrected (λ, ρ).
pub type CharacterKey = (Partition, Partition);

/// Core context: the two append-only caches behind the recursion.
///
/// - `partitions` → all partitions of k for every k generated so far
/// - `character_values` → χ_λ(ρ) for every corrected pair evaluated so far
///
/// Neither cache is ever evicted; memory grows with the largest degree
/// queried. Both are crate-private so entries only go in through
/// [`CharTable::char_value`] and [`CharTable::partitions_of`]. All operations
/// take `&mut self`, so one `CharTable` has exactly one writer. Independent
/// tables do not share state.
pub struct CharTable<V = i64> {
    pub(crate) partitions: PartitionCache,
    pub(crate) character_values: HashMap<CharacterKey, V>,
}

impl<V> Default for CharTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> CharTable<V> {
    pub fn new() -> Self {
        Self {
            partitions: PartitionCache::new(),
            character_values: HashMap::new(),
        }
    }

    /// Number of memoized χ_λ(ρ) entries.
    pub fn cached_values(&self) -> usize {
        self.character_values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_strip_zeros() {
        let p = Partition::from([3, 0, 2, 0, 0]);
        assert_eq!(p.parts(), &[3, 2]);
        assert_eq!(p.len(), 2);
        assert_eq!(p.size(), 5);
        assert!(p.is_canonical());
        assert!(!Partition::from([2, 0, 3]).is_canonical());
        assert_eq!(Partition::new(vec![0, 0]), Partition::empty());
    }

    #[test]
    fn test_equality_and_hash_ignore_zero_parts() {
        use std::collections::HashSet;

        let a = Partition::from([2, 1]);
        let b = Partition::from([2, 1, 0, 0]);
        let c = Partition::new(vec![2, 0, 1]);
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.cmp(&c), std::cmp::Ordering::Equal);

        let keys: HashSet<Partition> = [a, b, c].into_iter().collect();
        assert_eq!(keys.len(), 1);
    }

    #[test]
    fn test_deserialize_strips_zeros() {
        let p: Partition = serde_json::from_str("[2, 1, 0]").unwrap();
        assert_eq!(p, Partition::from([2, 1]));
        assert_eq!(serde_json::to_string(&p).unwrap(), "[2,1]");
    }

    #[test]
    fn test_without_first_part() {
        assert_eq!(
            Partition::from([3, 1, 1]).without_first_part(),
            Partition::from([1, 1])
        );
        assert_eq!(Partition::empty().without_first_part(), Partition::empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Partition::from([4, 2, 1]).to_string(), "(4,2,1)");
        assert_eq!(Partition::empty().to_string(), "()");
    }

    #[test]
    fn test_parse() {
        assert_eq!("3,2,1".parse::<Partition>().unwrap(), Partition::from([3, 2, 1]));
        assert_eq!(" 1, 3 ,0".parse::<Partition>().unwrap(), Partition::from([3, 1]));
        assert_eq!("(4,4)".parse::<Partition>().unwrap(), Partition::from([4, 4]));
        assert_eq!("".parse::<Partition>().unwrap(), Partition::empty());
        assert!(matches!(
            "3,x".parse::<Partition>(),
            Err(Error::InvalidPartition { .. })
        ));
        assert!("2,-1".parse::<Partition>().is_err());
    }

    #[test]
    fn test_strip_sign() {
        let vertical = BorderStripRemoval {
            partition: vec![1, 0, 0],
            border_strip: vec![0, 1, 1],
        };
        assert_eq!(vertical.height(), 2);
        assert_eq!(vertical.sign(), -1);
        assert_eq!(vertical.residual(), Partition::from([1]));

        let horizontal = BorderStripRemoval {
            partition: vec![1, 1],
            border_strip: vec![2, 0],
        };
        assert_eq!(horizontal.sign(), 1);
        assert_eq!(horizontal.length(), 2);
    }
}
