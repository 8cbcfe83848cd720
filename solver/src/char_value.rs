//! Murnaghan–Nakayama recursion for a single character value χ_λ(ρ).
//!
//! χ_λ(ρ) = Σ_ξ (−1)^(ht(ξ) − 1) · χ_{λ∖ξ}(ρ ∖ ρ_1)
//!
//! where ξ ranges over the border strips of λ of length ρ_1. The recursion
//! bottoms out at |λ| < 2, whose only character is the trivial one. Every
//! other result is memoized in the table's value cache under the corrected
//! (λ, ρ) pair.
//!
//! Recursion depth is at most len(ρ).

use crate::border_strips::border_strips;
use crate::error::{Error, Result};
use crate::types::{CharTable, CharacterValue, Partition};

impl<V: CharacterValue> CharTable<V> {
    /// χ_λ(ρ): value of the irreducible character λ on the conjugacy class ρ.
    ///
    /// Both arguments are corrected before use, so zero padding is ignored.
    /// `lambda` and `rho` should be partitions of the same n and `rho` should be
    /// non-increasing (its first part is taken as the strip length). These
    /// preconditions are only checked in debug builds.
    pub fn char_value(&mut self, lambda: &Partition, rho: &Partition) -> V {
        let lambda = lambda.corrected();
        let rho = rho.corrected();

        if lambda.size() < 2 {
            return V::one();
        }

        debug_assert_eq!(
            lambda.size(),
            rho.size(),
            "λ={lambda} and ρ={rho} partition different integers"
        );

        let key = (lambda, rho);
        if let Some(value) = self.character_values.get(&key) {
            return value.clone();
        }

        let (lambda, rho) = key;
        let rest = rho.without_first_part();
        let mut result = V::zero();
        for removal in border_strips(lambda.parts(), rho.first_part()) {
            let value = self.char_value(&removal.residual(), &rest);
            if removal.sign() > 0 {
                result += value;
            } else {
                result += -value;
            }
        }

        self.character_values.insert((lambda, rho), result.clone());
        result
    }

    /// [`Self::char_value`] for untrusted input: `rho` is put in
    /// non-increasing order and |λ| ≠ |ρ| is an [`Error::DegreeMismatch`].
    pub fn checked_char_value(&mut self, lambda: &Partition, rho: &Partition) -> Result<V> {
        if lambda.size() != rho.size() {
            return Err(Error::DegreeMismatch {
                lambda: lambda.size(),
                rho: rho.size(),
            });
        }
        let mut rho = rho.clone();
        rho.sort_non_increasing();
        Ok(self.char_value(lambda, &rho))
    }
}
