//! Fee application
//!
//! On every fill the engine passes the gross credited amount through the
//! installed fee handler before moving it into the owner's wallet. The
//! handler sees which order earned the amount and on which asset, and is
//! free to settle the difference into a fee wallet of its own. The engine
//! does not clamp the returned value.

use std::sync::Arc;
use types::fee::FeeTier;
use types::ids::Asset;
use types::numeric::Value;
use types::order::Order;

/// Fee policy collaborator. `gross` is the amount about to be credited for
/// one fill; the return value is what actually reaches the wallet.
pub trait FeeHandler<V: Value>: Send + Sync {
    /// Net the credited amount for the resting side of a fill.
    fn handle_fee_maker(&self, order: &Arc<dyn Order<V>>, asset: &Asset, gross: V) -> V;

    /// Net the credited amount for the aggressing side of a fill.
    fn handle_fee_taker(&self, order: &Arc<dyn Order<V>>, asset: &Asset, gross: V) -> V;
}

/// Identity handler, substituted when the caller installs none.
pub struct NoopFeeHandler;

impl<V: Value> FeeHandler<V> for NoopFeeHandler {
    fn handle_fee_maker(&self, _order: &Arc<dyn Order<V>>, _asset: &Asset, gross: V) -> V {
        gross
    }

    fn handle_fee_taker(&self, _order: &Arc<dyn Order<V>>, _asset: &Asset, gross: V) -> V {
        gross
    }
}

/// Handler applying the maker/taker rates of a single fee tier to every
/// fill. Tier selection per account is host policy.
pub struct TieredFeeHandler<V: Value> {
    tier: FeeTier<V>,
}

impl<V: Value> TieredFeeHandler<V> {
    pub fn new(tier: FeeTier<V>) -> Self {
        Self { tier }
    }
}

impl<V: Value> FeeHandler<V> for TieredFeeHandler<V> {
    fn handle_fee_maker(&self, _order: &Arc<dyn Order<V>>, _asset: &Asset, gross: V) -> V {
        gross.sub(&self.tier.maker_fee(&gross))
    }

    fn handle_fee_taker(&self, _order: &Arc<dyn Order<V>>, _asset: &Asset, gross: V) -> V {
        gross.sub(&self.tier.taker_fee(&gross))
    }
}
