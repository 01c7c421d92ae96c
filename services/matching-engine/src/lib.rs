//! Matching Engine
//!
//! Central-limit-order-book matching engine for a single trading pair,
//! implementing price-time priority matching with immediate settlement
//! against the owners' wallets.
//!
//! **Key Invariants:**
//! - Price-time priority strictly enforced
//! - Deterministic matching (same inputs → same outputs)
//! - Fills execute at the resting order's price
//! - The book is never crossed at rest
//! - Book, wallet ledger and event stream stay mutually consistent: every
//!   error is raised before the first state mutation

pub mod book;
pub mod engine;
pub mod events;
pub mod fees;
pub mod matching;

pub use engine::{BookSnapshot, Engine};
pub use events::{EventListener, NoopListener};
pub use fees::{FeeHandler, NoopFeeHandler, TieredFeeHandler};
