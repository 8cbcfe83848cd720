//! # symchar — Character tables of the symmetric groups
//!
//! Computes χ_λ(ρ), the value of the irreducible character of S_n indexed by
//! the partition λ on the conjugacy class of cycle type ρ, with the
//! **Murnaghan–Nakayama rule**:
//!
//! χ_λ(ρ) = Σ_ξ (−1)^(ht(ξ) − 1) · χ_{λ∖ξ}(ρ_2, ρ_3, ...)
//!
//! summing over border strips ξ of λ with |ξ| = ρ_1.
//!
//! ## Pipeline
//!
//! | Step | Rust module | Description |
//! |------|-------------|-------------|
//! | 1 | [`partitions`] | Generate and cache every partition of k ≤ n (row/column labels) |
//! | 2 | [`border_strips`] | Enumerate the border strips of λ of a given length (iterative state machine) |
//! | 3 | [`char_value`] | Memoized recursion over (λ, ρ) |
//! | 4 | [`char_table`] | Fill the p(n) × p(n) table |
//!
//! Everything is owned by one [`types::CharTable`]: the partition cache and
//! the χ memo. Both grow monotonically and are never evicted. Independent
//! tables share nothing.
//!
//! ## Around the core
//!
//! - [`class_functions`]: n!, z_ρ, class sizes, hook-length dimensions, conjugates
//! - [`orthogonality`]: row/column orthogonality checks (rayon, `BigInt`)
//! - [`storage`]: JSON table files (serde_json)
//! - [`env_config`]: `SYMCHAR_BASE_PATH`, `RAYON_NUM_THREADS`
//!
//! ## Value type
//!
//! [`types::CharTable`] is generic over the integer type the values are
//! accumulated in. `i64` holds every value up to n = 30; use `i128` or
//! `num_bigint::BigInt` beyond that. Overflow is not checked.
//!
//! ```
//! use symchar::types::{CharTable, Partition};
//!
//! let mut table = CharTable::<i64>::new();
//! assert_eq!(
//!     table.character_table(3),
//!     vec![vec![1, 1, 1], vec![-1, 0, 2], vec![1, -1, 1]]
//! );
//! let chi = table.char_value(&Partition::from([3, 1]), &Partition::from([2, 2]));
//! assert_eq!(chi, -1);
//! ```

pub mod border_strips;
pub mod char_table;
pub mod char_value;
pub mod class_functions;
pub mod constants;
pub mod env_config;
pub mod error;
pub mod orthogonality;
pub mod partitions;
pub mod storage;
pub mod types;
