//! Order confirmation types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::{CartLine, CartTotals};
use crate::checkout::ShippingInfo;
use crate::ids::{OrderId, ProductId};
use crate::money::Money;

/// A placed (mock) order, as shown on the confirmation screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderConfirmation {
    /// Generated order identifier.
    pub order_id: OrderId,
    /// Snapshot of the cart lines at the time of placing.
    pub lines: Vec<OrderLine>,
    /// Cart totals at the time of placing.
    pub totals: CartTotals,
    /// Where the order ships.
    pub shipping_info: ShippingInfo,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
}

impl OrderConfirmation {
    /// Snapshot `lines` and `totals` into a new confirmation.
    pub fn from_cart(lines: &[CartLine], totals: &CartTotals, shipping_info: ShippingInfo) -> Self {
        Self {
            order_id: OrderId::generate(),
            lines: lines.iter().map(OrderLine::from).collect(),
            totals: *totals,
            shipping_info,
            placed_at: Utc::now(),
        }
    }

    /// Get total item count.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

/// A line of a placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    pub product_id: ProductId,
    /// Product name at time of order.
    pub name: String,
    /// Variant label (e.g., "M / Black").
    pub variant: Option<String>,
    pub quantity: i64,
    /// Price x quantity at time of order.
    pub line_total: Money,
}

impl OrderLine {
    /// "Name × 2", as listed in the order summary.
    pub fn label(&self) -> String {
        format!("{} × {}", self.name, self.quantity)
    }
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id().clone(),
            name: line.product.name.clone(),
            variant: line.variant_label(),
            quantity: line.quantity,
            line_total: line.line_total(),
        }
    }
}
