//! Crossing detection logic
//!
//! Determines when an incoming order can execute against a resting price
//! level.

use types::numeric::Value;
use types::order::Side;

/// Check whether an incoming order at `taker_price` crosses a resting level
/// at `level_price`.
///
/// - an incoming buy crosses levels priced at or below its limit;
/// - an incoming sell crosses levels priced at or above its limit;
/// - a zero taker price marks a market order and crosses every level.
pub fn crosses<V: Value>(taker_side: Side, taker_price: &V, level_price: &V) -> bool {
    if taker_price.is_zero() {
        return true;
    }

    match taker_side {
        Side::BUY => taker_price >= level_price,
        Side::SELL => taker_price <= level_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_buy_crosses_cheaper_level() {
        assert!(crosses(Side::BUY, &Decimal::from(50_000), &Decimal::from(49_000)));
    }

    #[test]
    fn test_equal_prices_cross() {
        let price = Decimal::from(50_000);
        assert!(crosses(Side::BUY, &price, &price));
        assert!(crosses(Side::SELL, &price, &price));
    }

    #[test]
    fn test_buy_below_level_does_not_cross() {
        assert!(!crosses(Side::BUY, &Decimal::from(49_000), &Decimal::from(50_000)));
    }

    #[test]
    fn test_sell_crosses_higher_level() {
        assert!(crosses(Side::SELL, &Decimal::from(49_000), &Decimal::from(50_000)));
        assert!(!crosses(Side::SELL, &Decimal::from(51_000), &Decimal::from(50_000)));
    }

    #[test]
    fn test_market_order_crosses_everything() {
        let zero = Decimal::ZERO;
        assert!(crosses(Side::BUY, &zero, &Decimal::from(1)));
        assert!(crosses(Side::SELL, &zero, &Decimal::from(1_000_000)));
    }
}
