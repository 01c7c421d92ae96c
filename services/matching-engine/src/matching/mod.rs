//! Matching logic module
//!
//! Price comparison rules used by the engine's match loop.

pub mod crossing;

pub use crossing::crosses;
