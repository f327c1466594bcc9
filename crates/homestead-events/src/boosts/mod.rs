//! Yield boost composition.
//!
//! A yield is a baseline plus independent, non-negative contributions from
//! placed collectibles, equipped wearables, and placed buds. Contributions
//! are plain additions over exact decimals, so the order in which they are
//! applied never changes the total. No ceiling is applied here.
//!
//! # Submodules
//!
//! - [`buds`] -- Trait-based bonuses from placed companion buds.
//! - [`fruit_yield`] -- Per-harvest fruit yield.

pub mod buds;
pub mod fruit_yield;

use rust_decimal::Decimal;

use crate::error::EventError;

/// A decimal with two fractional digits, `n / 100`.
pub(crate) const fn hundredths(n: u32) -> Decimal {
    Decimal::from_parts(n, 0, 0, false, 2)
}

/// Sum `base` and every contribution with checked arithmetic.
pub fn sum_contributions(base: Decimal, contributions: &[Decimal]) -> Result<Decimal, EventError> {
    contributions.iter().try_fold(base, |total, bonus| {
        total
            .checked_add(*bonus)
            .ok_or_else(|| EventError::overflow("yield overflow while summing boosts"))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn hundredths_are_exact() {
        assert_eq!(hundredths(25), dec!(0.25));
        assert_eq!(hundredths(105), dec!(1.05));
    }

    #[test]
    fn sum_is_exact_for_fractional_boosts() {
        let total = sum_contributions(Decimal::ONE, &[dec!(0.1), dec!(0.2)]).unwrap();
        assert_eq!(total, dec!(1.3));
    }

    #[test]
    fn sum_of_nothing_is_base() {
        assert_eq!(sum_contributions(Decimal::ONE, &[]).unwrap(), Decimal::ONE);
    }

    #[test]
    fn sum_overflow_is_an_error() {
        assert!(sum_contributions(Decimal::MAX, &[Decimal::ONE]).is_err());
    }
}
