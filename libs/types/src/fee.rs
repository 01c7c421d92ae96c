//! Fee schedule types
//!
//! Fee policy lives in the host; the engine only asks a fee handler to net
//! the credited amount of each fill. These types describe the common
//! volume-tiered maker/taker schedule a host policy is built from.

use crate::numeric::Value;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One tier of a maker/taker fee schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeTier<V: Value> {
    /// 30-day volume from which this tier applies.
    pub volume_threshold: V,
    /// Can be negative (rebate).
    pub maker_rate: V,
    pub taker_rate: V,
}

impl<V: Value> FeeTier<V> {
    /// Fee charged on the credited amount for the resting side of a fill.
    pub fn maker_fee(&self, gross: &V) -> V {
        gross.mul(&self.maker_rate)
    }

    /// Fee charged on the credited amount for the aggressing side of a fill.
    pub fn taker_fee(&self, gross: &V) -> V {
        gross.mul(&self.taker_rate)
    }
}

/// Standard volume-tiered schedule.
pub fn default_fee_tiers() -> Vec<FeeTier<Decimal>> {
    vec![
        // Tier 0: < $1M volume
        FeeTier {
            volume_threshold: Decimal::ZERO,
            maker_rate: Decimal::from_str_exact("0.0002").unwrap(), // 0.02% maker
            taker_rate: Decimal::from_str_exact("0.0005").unwrap(), // 0.05% taker
        },
        // Tier 1: $1M - $10M
        FeeTier {
            volume_threshold: Decimal::from(1_000_000),
            maker_rate: Decimal::from_str_exact("0.00015").unwrap(),
            taker_rate: Decimal::from_str_exact("0.00045").unwrap(),
        },
        // Tier 2: $10M - $50M
        FeeTier {
            volume_threshold: Decimal::from(10_000_000),
            maker_rate: Decimal::from_str_exact("0.0001").unwrap(),
            taker_rate: Decimal::from_str_exact("0.0004").unwrap(),
        },
        // Tier 3: > $50M (maker rebate)
        FeeTier {
            volume_threshold: Decimal::from(50_000_000),
            maker_rate: Decimal::from_str_exact("-0.00005").unwrap(),
            taker_rate: Decimal::from_str_exact("0.00035").unwrap(),
        },
    ]
}
