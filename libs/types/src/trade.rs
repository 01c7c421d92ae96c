//! Fill reporting types

use crate::numeric::Value;
use serde::{Deserialize, Serialize};

/// One fill, reported to listeners and used by the settlement protocol.
///
/// `quantity` is the executed base amount; `price` is the quote amount
/// exchanged for it (executed quantity times the maker's price), so average
/// fill prices can be computed by summing volumes across fills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume<V: Value> {
    pub price: V,
    pub quantity: V,
}

impl<V: Value> Volume<V> {
    pub fn new(price: V, quantity: V) -> Self {
        Self { price, quantity }
    }
}
