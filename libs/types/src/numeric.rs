//! Numeric abstraction used for prices, quantities and balances
//!
//! The engine never inspects the representation of the numbers it moves
//! around; it only needs ordering, the three ring operations and a zero.
//! `rust_decimal` provides the reference implementation with deterministic
//! fixed-point arithmetic (no floating-point errors).

use rust_decimal::Decimal;
use std::fmt;

/// Arithmetic capability required from every price, quantity and balance.
///
/// Ordering comes from `Ord`, so comparisons stay consistent with the key
/// order of the book's price index. All operations return fresh values;
/// implementations must not mutate in place.
pub trait Value: Clone + Ord + fmt::Debug + Send + Sync + 'static {
    /// The additive identity. Absent wallet balances read as this value.
    fn zero() -> Self;

    fn add(&self, rhs: &Self) -> Self;

    fn sub(&self, rhs: &Self) -> Self;

    fn mul(&self, rhs: &Self) -> Self;

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    fn is_positive(&self) -> bool {
        *self > Self::zero()
    }

    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }
}

impl Value for Decimal {
    fn zero() -> Self {
        Decimal::ZERO
    }

    fn add(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn sub(&self, rhs: &Self) -> Self {
        self - rhs
    }

    fn mul(&self, rhs: &Self) -> Self {
        self * rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_decimal_ring_operations() {
        let a = Decimal::from(10);
        let b = Decimal::from_str("2.5").unwrap();

        assert_eq!(a.add(&b), Decimal::from_str("12.5").unwrap());
        assert_eq!(a.sub(&b), Decimal::from_str("7.5").unwrap());
        assert_eq!(a.mul(&b), Decimal::from(25));
    }

    #[test]
    fn test_decimal_signs() {
        assert!(Decimal::from(1).is_positive());
        assert!(Decimal::from(-1).is_negative());
        assert!(<Decimal as Value>::zero().is_zero());
        assert!(!Decimal::from(-1).is_positive());
    }

    #[test]
    fn test_deterministic_calculation() {
        // Same inputs always produce the same output
        let q = Decimal::from_str("0.123456789").unwrap();
        let p = Decimal::from_str("50000.987654321").unwrap();
        assert_eq!(q.mul(&p), q.mul(&p));
    }
}
