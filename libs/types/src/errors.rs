//! Error taxonomy for the matching engine
//!
//! A closed set of sentinel kinds using thiserror. Every error is raised
//! before the first state mutation of an operation; once a match begins no
//! error is possible, so a failed call leaves engine, wallets and listeners
//! untouched.

use thiserror::Error;

/// Engine operation errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid order quantity")]
    InvalidQuantity,

    #[error("invalid order price")]
    InvalidPrice,

    #[error("invalid order format")]
    InvalidOrder,

    #[error("insufficient quantity to calculate market price")]
    InsufficientQuantity,

    #[error("insufficient funds to process order")]
    InsufficientFunds,

    #[error("order with given id already exists")]
    OrderExists,

    #[error("order with given id not found")]
    OrderNotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            EngineError::InsufficientFunds.to_string(),
            "insufficient funds to process order"
        );
        assert_eq!(
            EngineError::OrderNotFound.to_string(),
            "order with given id not found"
        );
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(EngineError::OrderExists, EngineError::OrderExists);
        assert_ne!(EngineError::InvalidPrice, EngineError::InvalidQuantity);
    }
}
