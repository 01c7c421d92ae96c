//! One side of the book
//!
//! Price levels keyed by price in a BTreeMap, giving best-price lookup and
//! strict ceiling/floor traversal to the next level while a match walks the
//! book. Order nodes live in a slab owned by the side; the returned slot
//! index is the stable handle the engine's order lookup points at.

use slab::Slab;
use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;
use types::numeric::Value;
use types::order::Order;

use super::price_level::{OrderNode, PriceLevel};

/// Bid or ask side: ordered price index plus the arena of resting orders.
///
/// Invariants: a price level is indexed iff its queue is non-empty;
/// `num_orders` equals the total number of queued orders across levels.
pub struct BookSide<V: Value> {
    levels: BTreeMap<V, PriceLevel<V>>,
    nodes: Slab<OrderNode<V>>,
    num_orders: usize,
}

impl<V: Value> BookSide<V> {
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
            nodes: Slab::new(),
            num_orders: 0,
        }
    }

    /// Queue `order` at the back of its price level, creating the level if
    /// this is the first order at that price. Returns the order's handle.
    pub(crate) fn append(&mut self, order: Arc<dyn Order<V>>) -> usize {
        let price = order.price();
        let idx = self.nodes.insert(OrderNode::new(order));

        let level = self
            .levels
            .entry(price.clone())
            .or_insert_with(|| PriceLevel::new(price));
        level.push(&mut self.nodes, idx);

        self.num_orders += 1;
        idx
    }

    /// Unqueue the order at `idx` and return it, dropping its price level
    /// when it empties.
    pub(crate) fn remove(&mut self, idx: usize) -> Arc<dyn Order<V>> {
        let price = self.nodes[idx].order.price();

        let level = self.levels.get_mut(&price).unwrap();
        level.remove(&mut self.nodes, idx);
        if level.is_empty() {
            self.levels.remove(&price);
        }

        self.num_orders -= 1;
        self.nodes.remove(idx).order
    }

    pub(crate) fn order(&self, idx: usize) -> &Arc<dyn Order<V>> {
        &self.nodes[idx].order
    }

    /// Set a new remaining quantity on the order at `idx`, keeping its
    /// level volume consistent.
    pub(crate) fn update_quantity(&mut self, idx: usize, quantity: V) {
        let price = self.nodes[idx].order.price();
        let level = self.levels.get_mut(&price).unwrap();
        level.update_quantity(&self.nodes, idx, quantity);
    }

    /// Swap the order payload at `idx` without moving it in its queue.
    pub(crate) fn replace(&mut self, idx: usize, order: Arc<dyn Order<V>>) {
        let price = self.nodes[idx].order.price();
        let level = self.levels.get_mut(&price).unwrap();
        level.replace(&mut self.nodes, idx, order);
    }

    /// Handle of the oldest order at `price`, if the level exists.
    pub(crate) fn front_of(&self, price: &V) -> Option<usize> {
        self.levels.get(price).and_then(|level| level.front())
    }

    pub fn min_price(&self) -> Option<&V> {
        self.levels.keys().next()
    }

    pub fn max_price(&self) -> Option<&V> {
        self.levels.keys().next_back()
    }

    pub fn min_level(&self) -> Option<&PriceLevel<V>> {
        self.levels.values().next()
    }

    pub fn max_level(&self) -> Option<&PriceLevel<V>> {
        self.levels.values().next_back()
    }

    /// Cheapest level strictly above `price`.
    pub fn greater_than(&self, price: &V) -> Option<&PriceLevel<V>> {
        self.levels
            .range((Bound::Excluded(price), Bound::Unbounded))
            .next()
            .map(|(_, level)| level)
    }

    /// Dearest level strictly below `price`.
    pub fn less_than(&self, price: &V) -> Option<&PriceLevel<V>> {
        self.levels
            .range((Bound::Unbounded, Bound::Excluded(price)))
            .next_back()
            .map(|(_, level)| level)
    }

    pub fn level(&self, price: &V) -> Option<&PriceLevel<V>> {
        self.levels.get(price)
    }

    /// Price levels in ascending price order.
    pub fn levels(&self) -> std::collections::btree_map::Iter<'_, V, PriceLevel<V>> {
        self.levels.iter()
    }

    /// Number of non-empty price levels.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Total resting orders across all levels.
    pub fn num_orders(&self) -> usize {
        self.num_orders
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl<V: Value> Default for BookSide<V> {
    fn default() -> Self {
        Self::new()
    }
}
