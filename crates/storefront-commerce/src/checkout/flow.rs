//! Checkout flow state machine.

use crate::cart::CartStore;
use crate::checkout::{OrderConfirmation, ShippingInfo};
use crate::CommerceError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStep {
    /// Contact and shipping address.
    #[default]
    Shipping,
    /// Payment details (demo only, nothing is captured).
    Payment,
    /// Order review before placing.
    Review,
}

impl CheckoutStep {
    pub const ALL: [CheckoutStep; 3] = [
        CheckoutStep::Shipping,
        CheckoutStep::Payment,
        CheckoutStep::Review,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "shipping",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Review => "review",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "Shipping",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Review => "Review",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Shipping => 1,
            CheckoutStep::Payment => 2,
            CheckoutStep::Review => 3,
        }
    }

    pub fn next(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Shipping => Some(CheckoutStep::Payment),
            CheckoutStep::Payment => Some(CheckoutStep::Review),
            CheckoutStep::Review => None,
        }
    }

    pub fn previous(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Shipping => None,
            CheckoutStep::Payment => Some(CheckoutStep::Shipping),
            CheckoutStep::Review => Some(CheckoutStep::Payment),
        }
    }
}

/// Checkout flow state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckoutFlow {
    step: CheckoutStep,
    completed_steps: Vec<CheckoutStep>,
    shipping_info: ShippingInfo,
}

impl CheckoutFlow {
    /// Create a new checkout flow at the shipping step.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn completed_steps(&self) -> &[CheckoutStep] {
        &self.completed_steps
    }

    pub fn shipping_info(&self) -> &ShippingInfo {
        &self.shipping_info
    }

    /// Replace the captured shipping details.
    pub fn set_shipping_info(&mut self, info: ShippingInfo) {
        self.shipping_info = info;
    }

    /// Check if checkout can advance to a step.
    pub fn can_advance_to(&self, step: CheckoutStep) -> bool {
        match step {
            CheckoutStep::Shipping => true,
            CheckoutStep::Payment | CheckoutStep::Review => self.shipping_info.is_complete(),
        }
    }

    /// Advance to the next step.
    pub fn advance(&mut self) -> Result<CheckoutStep, CommerceError> {
        let next = self.step.next().ok_or_else(|| CommerceError::InvalidCheckoutTransition {
            from: self.step.as_str().to_string(),
            to: "none".to_string(),
        })?;

        if !self.can_advance_to(next) {
            return Err(CommerceError::CheckoutIncomplete(
                self.shipping_info.missing_fields().join(", "),
            ));
        }

        if !self.completed_steps.contains(&self.step) {
            self.completed_steps.push(self.step);
        }
        debug!(from = self.step.as_str(), to = next.as_str(), "checkout advanced");
        self.step = next;

        Ok(next)
    }

    /// Go back to the previous step.
    pub fn go_back(&mut self) -> Result<CheckoutStep, CommerceError> {
        let prev = self.step.previous().ok_or_else(|| CommerceError::InvalidCheckoutTransition {
            from: self.step.as_str().to_string(),
            to: "none".to_string(),
        })?;

        debug!(from = self.step.as_str(), to = prev.as_str(), "checkout went back");
        self.step = prev;

        Ok(prev)
    }

    /// Place the order for everything in `cart`.
    ///
    /// Only allowed from the review step. On success the cart is cleared and
    /// the flow starts over with blank shipping details.
    pub fn place_order(&mut self, cart: &mut CartStore) -> Result<OrderConfirmation, CommerceError> {
        if self.step != CheckoutStep::Review {
            return Err(CommerceError::InvalidCheckoutTransition {
                from: self.step.as_str().to_string(),
                to: "placed".to_string(),
            });
        }
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let order = OrderConfirmation::from_cart(
            cart.lines(),
            cart.totals(),
            std::mem::take(&mut self.shipping_info),
        );
        cart.clear_cart();
        *self = Self::new();

        info!(
            order_id = %order.order_id,
            items = order.item_count(),
            total = %order.totals.total,
            "order placed"
        );

        Ok(order)
    }

    /// Get progress percentage.
    pub fn progress_percent(&self) -> u8 {
        (u32::from(self.step.number()) * 100 / CheckoutStep::ALL.len() as u32) as u8
    }
}
