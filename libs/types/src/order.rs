//! Order capability and a ready-made limit order
//!
//! The engine works against the `Order` trait so hosts can carry their own
//! payloads (client ids, timestamps, audit fields) on resting orders.
//! `LimitOrder` is the plain implementation used by tests and simple hosts.

use crate::account::Wallet;
use crate::ids::OrderId;
use crate::numeric::Value;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    BUY,
    /// Sell order (ask)
    SELL,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::BUY => Side::SELL,
            Side::SELL => Side::BUY,
        }
    }
}

/// Capability the engine needs from an order.
///
/// Id, owner, side and price are immutable for the order's lifetime; only
/// the remaining quantity changes, and only through `update_quantity`, which
/// the engine calls while matching. A zero price marks a market order that
/// executes at any level. Implementations provide interior mutability for
/// the quantity because the engine holds orders behind shared references.
pub trait Order<V: Value>: Send + Sync {
    fn id(&self) -> &OrderId;

    /// Wallet debited and credited when this order trades.
    fn owner(&self) -> Arc<dyn Wallet<V>>;

    fn side(&self) -> Side;

    /// Limit price; zero means market.
    fn price(&self) -> V;

    /// Remaining (unfilled) quantity.
    fn quantity(&self) -> V;

    /// Called by the engine to set the remaining quantity after a fill.
    fn update_quantity(&self, quantity: V);
}

/// Plain limit order carrying exactly the fields the engine reads.
pub struct LimitOrder<V: Value> {
    id: OrderId,
    owner: Arc<dyn Wallet<V>>,
    side: Side,
    price: V,
    quantity: Mutex<V>,
}

impl<V: Value> LimitOrder<V> {
    pub fn new(
        id: impl Into<OrderId>,
        owner: Arc<dyn Wallet<V>>,
        side: Side,
        quantity: V,
        price: V,
    ) -> Self {
        Self {
            id: id.into(),
            owner,
            side,
            price,
            quantity: Mutex::new(quantity),
        }
    }

    /// Market order: a limit order with zero price.
    pub fn market(id: impl Into<OrderId>, owner: Arc<dyn Wallet<V>>, side: Side, quantity: V) -> Self {
        Self::new(id, owner, side, quantity, V::zero())
    }
}

impl<V: Value> Order<V> for LimitOrder<V> {
    fn id(&self) -> &OrderId {
        &self.id
    }

    fn owner(&self) -> Arc<dyn Wallet<V>> {
        self.owner.clone()
    }

    fn side(&self) -> Side {
        self.side
    }

    fn price(&self) -> V {
        self.price.clone()
    }

    fn quantity(&self) -> V {
        self.quantity.lock().unwrap().clone()
    }

    fn update_quantity(&self, quantity: V) {
        *self.quantity.lock().unwrap() = quantity;
    }
}
