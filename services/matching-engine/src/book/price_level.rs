//! Price level with an intrusive FIFO queue
//!
//! A price level holds every resting order at one price, in arrival order
//! to enforce time priority. The queue is a doubly-linked list threaded
//! through the side's slab of order nodes, so a slab index works as a
//! stable handle: append, removal and quantity updates are O(1) and handles
//! survive unrelated inserts and removals on the same level.

use slab::Slab;
use std::sync::Arc;
use types::numeric::Value;
use types::order::Order;

/// Order entry stored in the side's slab and linked into its level's queue.
pub(crate) struct OrderNode<V: Value> {
    pub(crate) order: Arc<dyn Order<V>>,
    prev: Option<usize>,
    next: Option<usize>,
}

impl<V: Value> OrderNode<V> {
    pub(crate) fn new(order: Arc<dyn Order<V>>) -> Self {
        Self {
            order,
            prev: None,
            next: None,
        }
    }
}

/// All orders resting at a single price on one side of the book.
///
/// Invariants: the level exists in its side's index only while non-empty,
/// and `volume` equals the sum of the remaining quantities of the queued
/// orders.
pub struct PriceLevel<V: Value> {
    price: V,
    volume: V,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<V: Value> PriceLevel<V> {
    pub(crate) fn new(price: V) -> Self {
        Self {
            price,
            volume: V::zero(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn price(&self) -> &V {
        &self.price
    }

    /// Total remaining quantity across the queued orders.
    pub fn volume(&self) -> &V {
        &self.volume
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Handle of the oldest order at this price.
    pub(crate) fn front(&self) -> Option<usize> {
        self.head
    }

    /// Link `idx` at the back of the queue. The node must already be in
    /// `nodes` and unlinked.
    pub(crate) fn push(&mut self, nodes: &mut Slab<OrderNode<V>>, idx: usize) {
        match self.tail {
            Some(tail) => {
                nodes[tail].next = Some(idx);
                nodes[idx].prev = Some(tail);
            }
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);

        self.volume = self.volume.add(&nodes[idx].order.quantity());
        self.len += 1;
    }

    /// Unlink `idx` from the queue, wherever it sits, and deduct its
    /// remaining quantity from the level volume.
    pub(crate) fn remove(&mut self, nodes: &mut Slab<OrderNode<V>>, idx: usize) {
        let prev = nodes[idx].prev;
        let next = nodes[idx].next;

        match prev {
            Some(p) => nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => nodes[n].prev = prev,
            None => self.tail = prev,
        }
        nodes[idx].prev = None;
        nodes[idx].next = None;

        self.volume = self.volume.sub(&nodes[idx].order.quantity());
        self.len -= 1;
    }

    /// Set a new remaining quantity on the order at `idx`, adjusting the
    /// level volume by the difference.
    pub(crate) fn update_quantity(&mut self, nodes: &Slab<OrderNode<V>>, idx: usize, quantity: V) {
        let order = &nodes[idx].order;
        self.volume = self.volume.sub(&order.quantity()).add(&quantity);
        order.update_quantity(quantity);
    }

    /// Swap the payload at `idx` for `order`, keeping the queue position.
    pub(crate) fn replace(&mut self, nodes: &mut Slab<OrderNode<V>>, idx: usize, order: Arc<dyn Order<V>>) {
        self.volume = self
            .volume
            .sub(&nodes[idx].order.quantity())
            .add(&order.quantity());
        nodes[idx].order = order;
    }
}
