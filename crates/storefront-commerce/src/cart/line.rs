//! Cart line items.

use std::sync::Arc;

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One cart entry: a product, a chosen variant and a quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product being purchased (shared with the catalog).
    pub product: Arc<Product>,
    /// Quantity, always at least 1.
    pub quantity: i64,
    /// Chosen size, if any.
    pub selected_size: Option<String>,
    /// Chosen color, if any.
    pub selected_color: Option<String>,
}

/// Variant identity of a line: two additions with equal identities merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineIdentity<'a> {
    pub product_id: &'a ProductId,
    pub size: Option<&'a str>,
    pub color: Option<&'a str>,
}

impl CartLine {
    /// Create a line. Selections are stored exactly as given.
    pub fn new(
        product: Arc<Product>,
        quantity: i64,
        selected_size: Option<&str>,
        selected_color: Option<&str>,
    ) -> Self {
        Self {
            product,
            quantity,
            selected_size: selected_size.map(str::to_string),
            selected_color: selected_color.map(str::to_string),
        }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    pub fn identity(&self) -> LineIdentity<'_> {
        LineIdentity {
            product_id: &self.product.id,
            size: self.selected_size.as_deref(),
            color: self.selected_color.as_deref(),
        }
    }

    /// Price x quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply(self.quantity)
    }

    /// Human label for the variant, e.g. "M / Black".
    pub fn variant_label(&self) -> Option<String> {
        match (&self.selected_size, &self.selected_color) {
            (Some(size), Some(color)) => Some(format!("{} / {}", size, color)),
            (Some(size), None) => Some(size.clone()),
            (None, Some(color)) => Some(color.clone()),
            (None, None) => None,
        }
    }
}
