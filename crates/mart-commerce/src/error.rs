//! Commerce error types.

use thiserror::Error;

/// Errors raised by client-side validation of commerce data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Quantity must be a positive integer.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Order state integer outside the known set.
    #[error("Unknown order state: {0}")]
    UnknownOrderState(i64),

    /// An operation needs at least one item.
    #[error("Empty selection: {0}")]
    EmptySelection(String),

    /// Other validation failure.
    #[error("Validation error: {0}")]
    ValidationError(String),
}
