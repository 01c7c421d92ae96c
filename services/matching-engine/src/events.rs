//! Matching lifecycle notifications
//!
//! The engine reports every state change through a listener: the three
//! outcomes of an incoming order (partial fill, full fill, rested), the
//! three fates of a resting order (partial fill, full fill, canceled) and
//! the two wallet movements (free balance, in-order amount).
//!
//! Callbacks run while the engine lock is held. They must not call back
//! into the same engine instance and should return quickly.

use std::sync::Arc;
use types::account::Wallet;
use types::ids::Asset;
use types::numeric::Value;
use types::order::Order;
use types::trade::Volume;

/// Subscriber to matching changes. Every method has an empty default body,
/// so implementations override only the notifications they care about.
pub trait EventListener<V: Value> {
    /// The incoming order traded but still has remaining quantity.
    fn on_incoming_order_partial(&self, _order: &Arc<dyn Order<V>>, _volume: &Volume<V>) {}

    /// The incoming order is fully filled.
    fn on_incoming_order_done(&self, _order: &Arc<dyn Order<V>>, _volume: &Volume<V>) {}

    /// The incoming order's remainder was added to the book.
    fn on_incoming_order_placed(&self, _order: &Arc<dyn Order<V>>) {}

    /// A resting order traded but still has remaining quantity.
    fn on_existing_order_partial(&self, _order: &Arc<dyn Order<V>>, _volume: &Volume<V>) {}

    /// A resting order is fully filled and left the book.
    fn on_existing_order_done(&self, _order: &Arc<dyn Order<V>>, _volume: &Volume<V>) {}

    /// A resting order was canceled and left the book.
    fn on_existing_order_canceled(&self, _order: &Arc<dyn Order<V>>) {}

    /// A wallet's free balance changed to `balance`.
    fn on_balance_changed(&self, _wallet: &dyn Wallet<V>, _asset: &Asset, _balance: &V) {}

    /// A wallet's frozen amount changed to `in_order`.
    fn on_in_order_changed(&self, _wallet: &dyn Wallet<V>, _asset: &Asset, _in_order: &V) {}
}

/// Listener that ignores every notification, substituted when the caller
/// passes none.
pub struct NoopListener;

impl<V: Value> EventListener<V> for NoopListener {}

pub(crate) static NOOP_LISTENER: NoopListener = NoopListener;
