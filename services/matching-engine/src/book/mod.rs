//! Order book infrastructure module
//!
//! Contains the price-level FIFO queue and the per-side book structure.

pub mod price_level;
pub mod side;

pub use price_level::PriceLevel;
pub use side::BookSide;
