//! Closed-form quantities attached to partitions of n.
//!
//! | Function | Formula |
//! |----------|---------|
//! | [`factorial`] | n! |
//! | [`centralizer_order`] | z_ρ = Π_i i^{m_i} · m_i! (m_i = multiplicity of part i) |
//! | [`class_size`] | \|C_ρ\| = n! / z_ρ |
//! | [`hook_length_dimension`] | f^λ = n! / Π hooks |
//! | [`conjugate`] | λ' (transpose of the Young diagram) |
//! | [`class_sign`] | sgn(ρ) = (−1)^(n − len ρ) |
//!
//! These serve as independent oracles for the recursion: χ_λ(1^n) = f^λ and
//! χ_{λ'}(ρ) = sgn(ρ) · χ_λ(ρ). All big quantities use [`BigUint`].

use std::collections::BTreeMap;

use num_bigint::BigUint;
use num_traits::One;

use crate::types::Partition;

pub fn factorial(n: usize) -> BigUint {
    (2..=n).fold(BigUint::one(), |acc, k| acc * BigUint::from(k))
}

/// z_ρ, the order of the centralizer of any permutation of cycle type ρ.
pub fn centralizer_order(rho: &Partition) -> BigUint {
    let mut multiplicities: BTreeMap<usize, usize> = BTreeMap::new();
    for &part in rho.corrected().parts() {
        *multiplicities.entry(part).or_insert(0) += 1;
    }
    multiplicities
        .into_iter()
        .fold(BigUint::one(), |acc, (part, count)| {
            acc * BigUint::from(part).pow(count as u32) * factorial(count)
        })
}

/// Number of permutations with cycle type ρ.
pub fn class_size(rho: &Partition) -> BigUint {
    factorial(rho.size()) / centralizer_order(rho)
}

/// Transpose: λ'_j = #{i : λ_i > j}.
pub fn conjugate(lambda: &Partition) -> Partition {
    let lambda = lambda.corrected();
    let columns = lambda.first_part();
    let parts = (0..columns)
        .map(|j| lambda.parts().iter().filter(|&&row| row > j).count())
        .collect();
    Partition::new(parts)
}

/// f^λ, the number of standard Young tableaux of shape λ.
pub fn hook_length_dimension(lambda: &Partition) -> BigUint {
    let lambda = lambda.corrected();
    let columns = conjugate(&lambda);
    let mut hooks = BigUint::one();
    for (i, &row) in lambda.parts().iter().enumerate() {
        for j in 0..row {
            let arm = row - j - 1;
            let leg = columns.parts()[j] - i - 1;
            hooks *= BigUint::from(arm + leg + 1);
        }
    }
    factorial(lambda.size()) / hooks
}

/// Sign of any permutation with cycle type ρ.
pub fn class_sign(rho: &Partition) -> i32 {
    let rho = rho.corrected();
    if (rho.size() - rho.len()) % 2 == 0 {
        1
    } else {
        -1
    }
}
