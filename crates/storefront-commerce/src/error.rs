//! Commerce error types.

use thiserror::Error;

/// Errors raised at the fallible edges of the storefront.
///
/// Cart, wishlist and filter operations are total and never produce one of
/// these; only loading, lookups that must succeed and checkout do.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// Checkout incomplete.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// Order placed with nothing in the cart.
    #[error("Cannot place an order for an empty cart")]
    EmptyCart,

    /// Catalog document failed validation.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error while reading a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::Config(e.to_string())
    }
}
