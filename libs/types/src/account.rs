//! Wallet capability and an in-memory implementation
//!
//! The engine settles every fill against the owning wallets, but wallet
//! storage belongs to the host. A wallet tracks two figures per asset: the
//! free balance and the in-order amount frozen as collateral for resting
//! orders. Invariant maintained by the engine: the in-order amount of an
//! asset equals the sum of the collateral of the owner's resting orders.

use crate::ids::Asset;
use crate::numeric::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// Asset store for a single account.
///
/// Methods take `&self`: the engine calls wallets through shared references
/// while holding its own lock, so implementations provide interior
/// mutability and must be thread-safe when shared across engines. A read of
/// an absent asset returns `V::zero()`.
pub trait Wallet<V: Value>: Send + Sync {
    /// Current free balance for the asset.
    fn balance(&self, asset: &Asset) -> V;

    /// Called by the engine to set a new free balance.
    fn update_balance(&self, asset: &Asset, value: V);

    /// Amount of the asset currently frozen in resting orders.
    fn in_order(&self, asset: &Asset) -> V;

    /// Called by the engine to set a new frozen amount.
    fn update_in_order(&self, asset: &Asset, value: V);
}

/// Hash-map backed wallet, sufficient for tests, simulations and
/// single-process hosts.
#[derive(Debug, Default)]
pub struct MemoryWallet<V: Value> {
    funds: Mutex<Funds<V>>,
}

#[derive(Debug)]
struct Funds<V: Value> {
    balance: HashMap<Asset, V>,
    in_order: HashMap<Asset, V>,
}

impl<V: Value> Default for Funds<V> {
    fn default() -> Self {
        Self {
            balance: HashMap::new(),
            in_order: HashMap::new(),
        }
    }
}

impl<V: Value> MemoryWallet<V> {
    pub fn new() -> Self {
        Self {
            funds: Mutex::new(Funds::default()),
        }
    }

    /// Credit the free balance, a deposit in host terms.
    pub fn deposit(&self, asset: &Asset, value: V) {
        let mut funds = self.funds.lock().unwrap();
        let balance = funds
            .balance
            .remove(asset)
            .unwrap_or_else(V::zero)
            .add(&value);
        funds.balance.insert(asset.clone(), balance);
    }
}

impl<V: Value> Wallet<V> for MemoryWallet<V> {
    fn balance(&self, asset: &Asset) -> V {
        let funds = self.funds.lock().unwrap();
        funds.balance.get(asset).cloned().unwrap_or_else(V::zero)
    }

    fn update_balance(&self, asset: &Asset, value: V) {
        let mut funds = self.funds.lock().unwrap();
        if value.is_zero() {
            funds.balance.remove(asset);
        } else {
            funds.balance.insert(asset.clone(), value);
        }
    }

    fn in_order(&self, asset: &Asset) -> V {
        let funds = self.funds.lock().unwrap();
        funds.in_order.get(asset).cloned().unwrap_or_else(V::zero)
    }

    fn update_in_order(&self, asset: &Asset, value: V) {
        let mut funds = self.funds.lock().unwrap();
        if value.is_zero() {
            funds.in_order.remove(asset);
        } else {
            funds.in_order.insert(asset.clone(), value);
        }
    }
}
