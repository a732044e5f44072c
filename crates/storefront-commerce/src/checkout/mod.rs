//! Checkout module.
//!
//! Contains the mock three-step checkout flow and order confirmations.

mod flow;
mod order;
mod shipping_info;

pub use flow::{CheckoutFlow, CheckoutStep};
pub use order::{OrderConfirmation, OrderLine};
pub use shipping_info::{state_name, ShippingInfo, SUPPORTED_STATES};
