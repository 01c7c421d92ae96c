//! Matching engine core
//!
//! One engine instance matches one trading pair. Incoming orders are
//! validated against the owner's wallet, crossed against the opposite side
//! under price-time priority, and any remainder rests on the book with its
//! collateral frozen in-order. Every fill settles immediately: the engine
//! moves balances through the wallet capability, nets credits through the
//! fee handler and reports each step to the listener.
//!
//! All public methods serialize on a single engine-wide lock. Listener and
//! wallet callbacks run while that lock is held and must not re-enter the
//! engine.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
use types::account::Wallet;
use types::errors::EngineError;
use types::ids::{Asset, OrderId};
use types::numeric::Value;
use types::order::{Order, Side};
use types::trade::Volume;

use crate::book::BookSide;
use crate::events::{EventListener, NOOP_LISTENER};
use crate::fees::{FeeHandler, NoopFeeHandler};
use crate::matching::crossing;

/// Matching engine for a single base/quote pair.
pub struct Engine<V: Value> {
    base: Asset,
    quote: Asset,
    book: Mutex<Book<V>>,
}

/// Book state guarded by the engine lock.
struct Book<V: Value> {
    asks: BookSide<V>,
    bids: BookSide<V>,
    /// Order id -> position of the resting order, kept in lockstep with the
    /// two sides.
    orders: HashMap<OrderId, Handle>,
    fees: Arc<dyn FeeHandler<V>>,
}

/// Position of a resting order: which side and which slot in its slab.
#[derive(Debug, Clone, Copy)]
struct Handle {
    side: Side,
    slot: usize,
}

/// Aggregated book view: `(price, level volume)` pairs, best price first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSnapshot<V: Value> {
    pub asks: Vec<(V, V)>,
    pub bids: Vec<(V, V)>,
}

impl<V: Value> Book<V> {
    fn side(&self, side: Side) -> &BookSide<V> {
        match side {
            Side::SELL => &self.asks,
            Side::BUY => &self.bids,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut BookSide<V> {
        match side {
            Side::SELL => &mut self.asks,
            Side::BUY => &mut self.bids,
        }
    }

    /// Rest `order` on its side and index it by id.
    fn push(&mut self, order: Arc<dyn Order<V>>) {
        let side = order.side();
        let id = order.id().clone();
        let slot = self.side_mut(side).append(order);
        self.orders.insert(id, Handle { side, slot });
    }

    /// Take the resting order with `id` off its side, if present.
    fn pull(&mut self, id: &OrderId) -> Option<Arc<dyn Order<V>>> {
        let handle = self.orders.remove(id)?;
        Some(self.side_mut(handle.side).remove(handle.slot))
    }
}

impl<V: Value> Engine<V> {
    /// Create an engine for the pair `base`/`quote` with the identity fee
    /// handler.
    pub fn new(base: Asset, quote: Asset) -> Self {
        Self {
            base,
            quote,
            book: Mutex::new(Book {
                asks: BookSide::new(),
                bids: BookSide::new(),
                orders: HashMap::new(),
                fees: Arc::new(NoopFeeHandler),
            }),
        }
    }

    pub fn with_fee_handler(base: Asset, quote: Asset, handler: Arc<dyn FeeHandler<V>>) -> Self {
        let engine = Self::new(base, quote);
        engine.set_fee_handler(handler);
        engine
    }

    pub fn set_fee_handler(&self, handler: Arc<dyn FeeHandler<V>>) {
        self.book.lock().unwrap().fees = handler;
    }

    /// Check that an order with the given parameters could be funded right
    /// now. For a market order (zero price) the required quote amount is
    /// probed from the current book.
    pub fn can_place(
        &self,
        wallet: &dyn Wallet<V>,
        side: Side,
        quantity: &V,
        price: &V,
    ) -> Result<(), EngineError> {
        let book = self.book.lock().unwrap();
        self.validate(&book, wallet, side, quantity, price)
    }

    /// Match `order` against the book and rest any remainder.
    ///
    /// Fills execute at the resting order's price. Per fill the listener
    /// sees the existing-order event, the incoming-order event, then the
    /// balance movements for maker and taker; if a remainder rests it sees
    /// the placed event followed by the freeze movements.
    pub fn place_order(
        &self,
        listener: Option<&dyn EventListener<V>>,
        order: Arc<dyn Order<V>>,
    ) -> Result<(), EngineError> {
        let mut book = self.book.lock().unwrap();
        let listener = listener.unwrap_or(&NOOP_LISTENER);

        if book.orders.contains_key(order.id()) {
            return Err(EngineError::OrderExists);
        }

        self.validate(
            &book,
            order.owner().as_ref(),
            order.side(),
            &order.quantity(),
            &order.price(),
        )?;

        let taker_side = order.side();
        let maker_side = taker_side.opposite();
        let fees = book.fees.clone();

        // Side walk: take the best opposing level while the incoming order
        // still crosses it and has quantity left.
        loop {
            let best = match taker_side {
                Side::SELL => book.bids.max_price().cloned(),
                Side::BUY => book.asks.min_price().cloned(),
            };
            let Some(level_price) = best else { break };

            if !order.quantity().is_positive()
                || !crossing::crosses(taker_side, &order.price(), &level_price)
            {
                break;
            }

            // Queue walk: consume the level front to back.
            while order.quantity().is_positive() {
                let Some(slot) = book.side(maker_side).front_of(&level_price) else {
                    break;
                };
                let maker = book.side(maker_side).order(slot).clone();
                let maker_qty = maker.quantity();
                let taker_qty = order.quantity();

                let volume = match taker_qty.cmp(&maker_qty) {
                    Ordering::Equal => {
                        book.pull(maker.id());
                        let volume = Volume::new(maker_qty.mul(&maker.price()), maker_qty.clone());
                        maker.update_quantity(maker_qty.sub(&maker_qty));
                        order.update_quantity(taker_qty.sub(&taker_qty));
                        listener.on_existing_order_done(&maker, &volume);
                        listener.on_incoming_order_done(&order, &volume);
                        volume
                    }
                    Ordering::Greater => {
                        book.pull(maker.id());
                        let volume = Volume::new(maker_qty.mul(&maker.price()), maker_qty.clone());
                        maker.update_quantity(maker_qty.sub(&maker_qty));
                        order.update_quantity(taker_qty.sub(&maker_qty));
                        listener.on_existing_order_done(&maker, &volume);
                        listener.on_incoming_order_partial(&order, &volume);
                        volume
                    }
                    Ordering::Less => {
                        let volume = Volume::new(taker_qty.mul(&maker.price()), taker_qty.clone());
                        book.side_mut(maker_side)
                            .update_quantity(slot, maker_qty.sub(&taker_qty));
                        order.update_quantity(taker_qty.sub(&taker_qty));
                        listener.on_existing_order_partial(&maker, &volume);
                        listener.on_incoming_order_done(&order, &volume);
                        volume
                    }
                };

                trace!(
                    "matched {} against {} for {:?} at {:?}",
                    order.id(),
                    maker.id(),
                    volume.quantity,
                    maker.price()
                );

                self.exchanged(fees.as_ref(), listener, &maker, &volume, true);
                self.exchanged(fees.as_ref(), listener, &order, &volume, false);
            }
        }

        if order.quantity().is_positive() {
            book.push(order.clone());
            listener.on_incoming_order_placed(&order);
            self.placed(listener, &order);
            debug!(
                "order {} resting with quantity {:?} at {:?}",
                order.id(),
                order.quantity(),
                order.price()
            );
        }

        Ok(())
    }

    /// Swap a resting order for `new` in place, keeping its position in the
    /// price queue. Owner, side and price must match the resting order; the
    /// owner's wallet must afford the collateral difference.
    pub fn replace_order(
        &self,
        listener: Option<&dyn EventListener<V>>,
        old: &dyn Order<V>,
        new: Arc<dyn Order<V>>,
    ) -> Result<(), EngineError> {
        let mut book = self.book.lock().unwrap();
        let listener = listener.unwrap_or(&NOOP_LISTENER);

        let Some(&handle) = book.orders.get(old.id()) else {
            return Err(EngineError::OrderNotFound);
        };
        let stored = book.side(handle.side).order(handle.slot).clone();

        if !Arc::ptr_eq(&stored.owner(), &new.owner()) {
            return Err(EngineError::InvalidOrder);
        }
        if stored.side() != new.side() {
            return Err(EngineError::InvalidOrder);
        }
        if stored.price() != new.price() {
            return Err(EngineError::InvalidOrder);
        }
        if !new.quantity().is_positive() {
            return Err(EngineError::InvalidQuantity);
        }

        let wallet = stored.owner();
        let (asset, old_value, new_value) = match stored.side() {
            Side::SELL => (&self.base, stored.quantity(), new.quantity()),
            Side::BUY => (
                &self.quote,
                stored.price().mul(&stored.quantity()),
                new.price().mul(&new.quantity()),
            ),
        };

        let new_balance = old_value.sub(&new_value).add(&wallet.balance(asset));
        if new_balance.is_negative() {
            return Err(EngineError::InsufficientFunds);
        }

        if book.side(handle.side).level(&new.price()).is_none() {
            return Err(EngineError::InvalidPrice);
        }

        let new_in_order = new_value.sub(&old_value).add(&wallet.in_order(asset));

        book.side_mut(handle.side).replace(handle.slot, new.clone());
        book.orders.remove(stored.id());
        book.orders.insert(new.id().clone(), handle);

        wallet.update_balance(asset, new_balance.clone());
        listener.on_balance_changed(wallet.as_ref(), asset, &new_balance);

        wallet.update_in_order(asset, new_in_order.clone());
        listener.on_in_order_changed(wallet.as_ref(), asset, &new_in_order);

        debug!("order {} replaced by {}", stored.id(), new.id());
        Ok(())
    }

    /// Remove a resting order and thaw its collateral back to the owner's
    /// free balance. The refund is computed from the stored order's current
    /// remaining quantity.
    pub fn cancel_order(
        &self,
        listener: Option<&dyn EventListener<V>>,
        order: &dyn Order<V>,
    ) -> Result<(), EngineError> {
        let mut book = self.book.lock().unwrap();
        let listener = listener.unwrap_or(&NOOP_LISTENER);

        let Some(stored) = book.pull(order.id()) else {
            return Err(EngineError::OrderNotFound);
        };

        let wallet = stored.owner();
        let (asset, value) = match stored.side() {
            Side::SELL => (&self.base, stored.quantity()),
            Side::BUY => (&self.quote, stored.quantity().mul(&stored.price())),
        };

        let new_balance = value.add(&wallet.balance(asset));
        wallet.update_balance(asset, new_balance.clone());
        listener.on_balance_changed(wallet.as_ref(), asset, &new_balance);

        let new_in_order = wallet.in_order(asset).sub(&value);
        wallet.update_in_order(asset, new_in_order.clone());
        listener.on_in_order_changed(wallet.as_ref(), asset, &new_in_order);

        listener.on_existing_order_canceled(&stored);
        debug!("order {} canceled", stored.id());
        Ok(())
    }

    /// Rest `order` directly, with no matching, validation or balance
    /// movement. Intended for warming the book up from a snapshot.
    pub fn push_order(&self, order: Arc<dyn Order<V>>) {
        self.book.lock().unwrap().push(order);
    }

    /// Cumulative opposing depth executable for an order on `side`, up to
    /// `price_lim`. `None` means no limit: the whole opposing side.
    pub fn quantity(&self, side: Side, price_lim: Option<&V>) -> V {
        let book = self.book.lock().unwrap();
        Self::cumulative_quantity(&book, side, price_lim)
    }

    /// Quote amount a market order of `quantity` on `side` would exchange
    /// right now. Fails with `InsufficientQuantity` when the opposing side
    /// is too shallow.
    pub fn price(&self, side: Side, quantity: &V) -> Result<V, EngineError> {
        let book = self.book.lock().unwrap();
        Self::market_price(&book, side, quantity)
    }

    /// Best ask and best bid. Either side may be empty.
    pub fn spread(&self) -> (Option<V>, Option<V>) {
        let book = self.book.lock().unwrap();
        (
            book.asks.min_price().cloned(),
            book.bids.max_price().cloned(),
        )
    }

    /// Look up a resting order by id.
    pub fn find_order(&self, id: &OrderId) -> Result<Arc<dyn Order<V>>, EngineError> {
        let book = self.book.lock().unwrap();
        let handle = book.orders.get(id).ok_or(EngineError::OrderNotFound)?;
        Ok(book.side(handle.side).order(handle.slot).clone())
    }

    /// All resting orders, in no particular order.
    pub fn orders(&self) -> Vec<Arc<dyn Order<V>>> {
        let book = self.book.lock().unwrap();
        book.orders
            .values()
            .map(|handle| book.side(handle.side).order(handle.slot).clone())
            .collect()
    }

    /// Walk every price level, asks from worst to best then bids from best
    /// to worst. The callback receives `(is_ask, price, volume, len)`.
    pub fn order_book(&self, mut iter: impl FnMut(bool, &V, &V, usize)) {
        let book = self.book.lock().unwrap();
        for (price, level) in book.asks.levels().rev() {
            iter(true, price, level.volume(), level.len());
        }
        for (price, level) in book.bids.levels().rev() {
            iter(false, price, level.volume(), level.len());
        }
    }

    /// Top `depth` levels per side, best price first.
    pub fn depth_snapshot(&self, depth: usize) -> BookSnapshot<V> {
        let book = self.book.lock().unwrap();
        BookSnapshot {
            asks: book
                .asks
                .levels()
                .take(depth)
                .map(|(price, level)| (price.clone(), level.volume().clone()))
                .collect(),
            bids: book
                .bids
                .levels()
                .rev()
                .take(depth)
                .map(|(price, level)| (price.clone(), level.volume().clone()))
                .collect(),
        }
    }

    fn validate(
        &self,
        book: &Book<V>,
        wallet: &dyn Wallet<V>,
        side: Side,
        quantity: &V,
        price: &V,
    ) -> Result<(), EngineError> {
        if !quantity.is_positive() {
            return Err(EngineError::InvalidQuantity);
        }
        if price.is_negative() {
            return Err(EngineError::InvalidPrice);
        }

        let market_price = if price.is_zero() {
            Self::market_price(book, side, quantity)?
        } else {
            price.mul(quantity)
        };

        match side {
            Side::SELL => {
                if wallet.balance(&self.base) < *quantity {
                    return Err(EngineError::InsufficientFunds);
                }
            }
            Side::BUY => {
                if wallet.balance(&self.quote) < market_price {
                    return Err(EngineError::InsufficientFunds);
                }
            }
        }

        Ok(())
    }

    /// Walk the opposing side best-to-worst pricing `quantity` at each
    /// level until it is covered.
    fn market_price(book: &Book<V>, side: Side, quantity: &V) -> Result<V, EngineError> {
        let opposite = match side {
            Side::SELL => &book.bids,
            Side::BUY => &book.asks,
        };
        let mut level = match side {
            Side::SELL => opposite.max_level(),
            Side::BUY => opposite.min_level(),
        };

        let mut remaining = quantity.clone();
        let mut total = V::zero();

        while remaining.is_positive() {
            let Some(current) = level else {
                return Err(EngineError::InsufficientQuantity);
            };

            if remaining < *current.volume() {
                return Ok(current.price().mul(&remaining).add(&total));
            }

            total = current.price().mul(current.volume()).add(&total);
            remaining = remaining.sub(current.volume());
            level = match side {
                Side::SELL => opposite.less_than(current.price()),
                Side::BUY => opposite.greater_than(current.price()),
            };
        }

        Ok(total)
    }

    /// Sum opposing level volumes while they stay executable at `price_lim`.
    fn cumulative_quantity(book: &Book<V>, side: Side, price_lim: Option<&V>) -> V {
        let opposite = match side {
            Side::SELL => &book.bids,
            Side::BUY => &book.asks,
        };
        let mut level = match side {
            Side::SELL => opposite.max_level(),
            Side::BUY => opposite.min_level(),
        };

        let mut total = V::zero();

        while let Some(current) = level {
            if let Some(lim) = price_lim {
                let beyond = match side {
                    Side::SELL => current.price() < lim,
                    Side::BUY => current.price() > lim,
                };
                if beyond {
                    break;
                }
            }

            total = current.volume().add(&total);
            level = match side {
                Side::SELL => opposite.less_than(current.price()),
                Side::BUY => opposite.greater_than(current.price()),
            };
        }

        total
    }

    /// Settle one fill for one of its two parties.
    ///
    /// The credited amount passes through the fee handler. The debited
    /// amount comes out of in-order for the maker, whose collateral was
    /// frozen at placement, and out of free balance for the taker, who
    /// never reserved funds.
    fn exchanged(
        &self,
        fees: &dyn FeeHandler<V>,
        listener: &dyn EventListener<V>,
        order: &Arc<dyn Order<V>>,
        volume: &Volume<V>,
        is_maker: bool,
    ) {
        let wallet = order.owner();
        let (asset_inc, asset_dec, value_inc, value_dec) = match order.side() {
            Side::SELL => (
                &self.quote,
                &self.base,
                volume.price.clone(),
                volume.quantity.clone(),
            ),
            Side::BUY => (
                &self.base,
                &self.quote,
                volume.quantity.clone(),
                volume.price.clone(),
            ),
        };

        let value_inc = if is_maker {
            fees.handle_fee_maker(order, asset_inc, value_inc)
        } else {
            fees.handle_fee_taker(order, asset_inc, value_inc)
        };

        let new_balance = value_inc.add(&wallet.balance(asset_inc));
        wallet.update_balance(asset_inc, new_balance.clone());
        listener.on_balance_changed(wallet.as_ref(), asset_inc, &new_balance);

        if is_maker {
            let new_in_order = wallet.in_order(asset_dec).sub(&value_dec);
            wallet.update_in_order(asset_dec, new_in_order.clone());
            listener.on_in_order_changed(wallet.as_ref(), asset_dec, &new_in_order);
        } else {
            let new_balance = wallet.balance(asset_dec).sub(&value_dec);
            wallet.update_balance(asset_dec, new_balance.clone());
            listener.on_balance_changed(wallet.as_ref(), asset_dec, &new_balance);
        }
    }

    /// Freeze the collateral of a newly rested order: its quantity for a
    /// sell, price times quantity for a buy.
    fn placed(&self, listener: &dyn EventListener<V>, order: &Arc<dyn Order<V>>) {
        if order.price().is_zero() {
            // A market-order remainder has no limit price to value its
            // collateral; leave it unreserved rather than freeze a zero
            // amount against a zero-priced level.
            warn!(
                "market order {} rested unfilled; leaving remainder unreserved",
                order.id()
            );
            return;
        }

        let wallet = order.owner();
        let (asset, value) = match order.side() {
            Side::SELL => (&self.base, order.quantity()),
            Side::BUY => (&self.quote, order.price().mul(&order.quantity())),
        };

        let new_balance = wallet.balance(asset).sub(&value);
        wallet.update_balance(asset, new_balance.clone());
        listener.on_balance_changed(wallet.as_ref(), asset, &new_balance);

        let new_in_order = value.add(&wallet.in_order(asset));
        wallet.update_in_order(asset, new_in_order.clone());
        listener.on_in_order_changed(wallet.as_ref(), asset, &new_in_order);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use types::account::MemoryWallet;
    use types::order::LimitOrder;

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    fn engine() -> Engine<Decimal> {
        Engine::new(Asset::new("BTC"), Asset::new("USDT"))
    }

    fn wallet() -> Arc<MemoryWallet<Decimal>> {
        Arc::new(MemoryWallet::new())
    }

    fn order(
        id: &str,
        owner: &Arc<MemoryWallet<Decimal>>,
        side: Side,
        qty: i64,
        price: i64,
    ) -> Arc<dyn Order<Decimal>> {
        let owner: Arc<dyn Wallet<Decimal>> = owner.clone();
        Arc::new(LimitOrder::new(id, owner, side, dec(qty), dec(price)))
    }

    #[test]
    fn test_engine_resting_order() {
        let engine = engine();
        let buyer = wallet();
        buyer.deposit(&Asset::new("USDT"), dec(100_000));

        engine
            .place_order(None, order("1", &buyer, Side::BUY, 1, 50_000))
            .unwrap();

        assert_eq!(engine.orders().len(), 1);
        assert_eq!(engine.spread(), (None, Some(dec(50_000))));
    }

    #[test]
    fn test_engine_full_match() {
        let engine = engine();
        let seller = wallet();
        let buyer = wallet();
        seller.deposit(&Asset::new("BTC"), dec(1));
        buyer.deposit(&Asset::new("USDT"), dec(50_000));

        engine
            .place_order(None, order("1", &seller, Side::SELL, 1, 50_000))
            .unwrap();
        engine
            .place_order(None, order("2", &buyer, Side::BUY, 1, 50_000))
            .unwrap();

        assert!(engine.orders().is_empty());
        assert_eq!(buyer.balance(&Asset::new("BTC")), dec(1));
        assert_eq!(seller.balance(&Asset::new("USDT")), dec(50_000));
    }

    #[test]
    fn test_engine_partial_match_leaves_remainder() {
        let engine = engine();
        let seller = wallet();
        let buyer = wallet();
        seller.deposit(&Asset::new("BTC"), dec(1));
        buyer.deposit(&Asset::new("USDT"), dec(100_000));

        engine
            .place_order(None, order("1", &seller, Side::SELL, 1, 50_000))
            .unwrap();
        engine
            .place_order(None, order("2", &buyer, Side::BUY, 2, 50_000))
            .unwrap();

        let remaining = engine.find_order(&OrderId::from("2")).unwrap();
        assert_eq!(remaining.quantity(), dec(1));
        assert_eq!(engine.spread(), (None, Some(dec(50_000))));
    }

    #[test]
    fn test_engine_no_cross() {
        let engine = engine();
        let seller = wallet();
        let buyer = wallet();
        seller.deposit(&Asset::new("BTC"), dec(1));
        buyer.deposit(&Asset::new("USDT"), dec(50_000));

        engine
            .place_order(None, order("1", &seller, Side::SELL, 1, 51_000))
            .unwrap();
        engine
            .place_order(None, order("2", &buyer, Side::BUY, 1, 50_000))
            .unwrap();

        assert_eq!(engine.orders().len(), 2);
        assert_eq!(engine.spread(), (Some(dec(51_000)), Some(dec(50_000))));
    }

    #[test]
    fn test_market_price_probe() {
        let engine = engine();
        let buyer = wallet();
        buyer.deposit(&Asset::new("USDT"), dec(120_000));

        engine
            .place_order(None, order("1", &buyer, Side::BUY, 1, 50_000))
            .unwrap();
        engine
            .place_order(None, order("2", &buyer, Side::BUY, 1, 70_000))
            .unwrap();

        // A market sell of 2 walks bids best-first: 70000 + 50000
        assert_eq!(engine.price(Side::SELL, &dec(2)), Ok(dec(120_000)));
        // Partial level consumption prices at the level reached
        assert_eq!(engine.price(Side::SELL, &dec(1)), Ok(dec(70_000)));
        assert_eq!(
            engine.price(Side::SELL, &dec(3)),
            Err(EngineError::InsufficientQuantity)
        );
    }

    #[test]
    fn test_cumulative_quantity_probe() {
        let engine = engine();
        let buyer = wallet();
        buyer.deposit(&Asset::new("USDT"), dec(120_000));

        engine
            .place_order(None, order("1", &buyer, Side::BUY, 1, 50_000))
            .unwrap();
        engine
            .place_order(None, order("2", &buyer, Side::BUY, 1, 70_000))
            .unwrap();

        assert_eq!(engine.quantity(Side::SELL, None), dec(2));
        // Only levels still executable at the limit are counted
        assert_eq!(engine.quantity(Side::SELL, Some(&dec(60_000))), dec(1));
        assert_eq!(engine.quantity(Side::SELL, Some(&dec(80_000))), dec(0));
    }

    #[test]
    fn test_depth_snapshot_orders_best_first() {
        let engine = engine();
        let buyer = wallet();
        let seller = wallet();
        buyer.deposit(&Asset::new("USDT"), dec(200_000));
        seller.deposit(&Asset::new("BTC"), dec(5));

        engine
            .place_order(None, order("b1", &buyer, Side::BUY, 1, 49_000))
            .unwrap();
        engine
            .place_order(None, order("b2", &buyer, Side::BUY, 1, 50_000))
            .unwrap();
        engine
            .place_order(None, order("a1", &seller, Side::SELL, 2, 51_000))
            .unwrap();
        engine
            .place_order(None, order("a2", &seller, Side::SELL, 1, 52_000))
            .unwrap();

        let snapshot = engine.depth_snapshot(1);
        assert_eq!(snapshot.asks, vec![(dec(51_000), dec(2))]);
        assert_eq!(snapshot.bids, vec![(dec(50_000), dec(1))]);
    }

    #[test]
    fn test_depth_snapshot_serialization() {
        let engine = engine();
        let buyer = wallet();
        buyer.deposit(&Asset::new("USDT"), dec(50_000));

        engine
            .place_order(None, order("1", &buyer, Side::BUY, 1, 50_000))
            .unwrap();

        let snapshot = engine.depth_snapshot(10);
        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: BookSnapshot<Decimal> = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }
}
