//! Shopping cart module.
//!
//! Contains cart lines, the pricing policy and the reducer-style cart store.

mod line;
mod pricing;
mod store;

pub use line::{CartLine, LineIdentity};
pub use pricing::{CartTotals, PricingPolicy};
pub use store::{CartAction, CartState, CartStore};
