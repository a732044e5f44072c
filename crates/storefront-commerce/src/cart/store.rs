//! Cart state, actions and the store that owns them.
//!
//! Every mutation is a [`CartAction`] applied by the pure
//! [`CartState::reduce`]. [`CartStore`] wraps that in named methods and swaps
//! in the new state, so totals are always recomputed from the lines.

use std::sync::Arc;

use crate::cart::{CartLine, CartTotals, LineIdentity, PricingPolicy};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// A cart mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add a quantity of a product variant. Non-positive quantities count as 1.
    Add {
        product: Arc<Product>,
        quantity: i64,
        selected_size: Option<String>,
        selected_color: Option<String>,
    },
    /// Remove every line of a product, whatever the variant.
    Remove { product_id: ProductId },
    /// Set the quantity of the first line of a product; `<= 0` removes.
    UpdateQuantity { product_id: ProductId, quantity: i64 },
    /// Empty the cart.
    Clear,
}

impl CartAction {
    pub fn name(&self) -> &'static str {
        match self {
            CartAction::Add { .. } => "add",
            CartAction::Remove { .. } => "remove",
            CartAction::UpdateQuantity { .. } => "update_quantity",
            CartAction::Clear => "clear",
        }
    }
}

/// Cart lines in insertion order, plus the totals derived from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartState {
    lines: Vec<CartLine>,
    totals: CartTotals,
}

impl CartState {
    /// An empty cart; every total is zero.
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            totals: CartTotals::zero(),
        }
    }

    fn from_lines(lines: Vec<CartLine>, policy: &PricingPolicy) -> Self {
        let totals = policy.totals_for(&lines);
        Self { lines, totals }
    }

    /// Compute the state that results from applying `action`.
    pub fn reduce(&self, action: CartAction, policy: &PricingPolicy) -> CartState {
        match action {
            CartAction::Add {
                product,
                quantity,
                selected_size,
                selected_color,
            } => {
                let quantity = normalize_add_quantity(quantity);
                let mut lines = self.lines.clone();

                let identity = LineIdentity {
                    product_id: &product.id,
                    size: selected_size.as_deref(),
                    color: selected_color.as_deref(),
                };
                let existing = lines.iter().position(|line| line.identity() == identity);

                match existing {
                    Some(index) => {
                        let line = &mut lines[index];
                        line.quantity = line.quantity.saturating_add(quantity);
                    }
                    None => lines.push(CartLine {
                        product,
                        quantity,
                        selected_size,
                        selected_color,
                    }),
                }

                Self::from_lines(lines, policy)
            }

            CartAction::Remove { product_id } => {
                let lines = self
                    .lines
                    .iter()
                    .filter(|line| line.product.id != product_id)
                    .cloned()
                    .collect();
                Self::from_lines(lines, policy)
            }

            CartAction::UpdateQuantity {
                product_id,
                quantity,
            } => {
                if quantity <= 0 {
                    return self.reduce(CartAction::Remove { product_id }, policy);
                }

                // Matches by product id only: with several variant lines of one
                // product, only the first is updated.
                let mut lines = self.lines.clone();
                if let Some(line) = lines.iter_mut().find(|line| line.product.id == product_id) {
                    line.quantity = quantity;
                }
                Self::from_lines(lines, policy)
            }

            CartAction::Clear => Self::empty(),
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn totals(&self) -> &CartTotals {
        &self.totals
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn normalize_add_quantity(quantity: i64) -> i64 {
    if quantity <= 0 {
        tracing::warn!(quantity, "non-positive add quantity clamped to 1");
        1
    } else {
        quantity
    }
}

/// The session's shopping cart.
#[derive(Debug, Clone)]
pub struct CartStore {
    state: CartState,
    policy: PricingPolicy,
}

impl CartStore {
    /// Create an empty cart priced with `policy`.
    pub fn new(policy: PricingPolicy) -> Self {
        Self {
            state: CartState::empty(),
            policy,
        }
    }

    /// Apply an action and replace the state.
    pub fn dispatch(&mut self, action: CartAction) {
        let name = action.name();
        self.state = self.state.reduce(action, &self.policy);
        tracing::debug!(
            action = name,
            lines = self.state.lines.len(),
            items = self.state.item_count(),
            total = %self.state.totals.total,
            "cart updated"
        );
    }

    /// Add `quantity` of a product variant, merging with an identical line.
    pub fn add_to_cart(
        &mut self,
        product: &Arc<Product>,
        quantity: i64,
        selected_size: Option<&str>,
        selected_color: Option<&str>,
    ) {
        self.dispatch(CartAction::Add {
            product: Arc::clone(product),
            quantity,
            selected_size: selected_size.map(str::to_string),
            selected_color: selected_color.map(str::to_string),
        });
    }

    /// Add a single unit with no variant chosen.
    pub fn add_product(&mut self, product: &Arc<Product>) {
        self.add_to_cart(product, 1, None, None);
    }

    /// Set the quantity of the first line for `product_id`. `<= 0` removes
    /// the product. Unknown ids are ignored.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        self.dispatch(CartAction::UpdateQuantity {
            product_id: product_id.clone(),
            quantity,
        });
    }

    /// Remove every line for `product_id`. Unknown ids are ignored.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) {
        self.dispatch(CartAction::Remove {
            product_id: product_id.clone(),
        });
    }

    pub fn clear_cart(&mut self) {
        self.dispatch(CartAction::Clear);
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.state.item_count()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.state.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn lines(&self) -> &[CartLine] {
        self.state.lines()
    }

    pub fn totals(&self) -> &CartTotals {
        self.state.totals()
    }

    pub fn subtotal(&self) -> Money {
        self.state.totals.subtotal
    }

    pub fn shipping(&self) -> Money {
        self.state.totals.shipping
    }

    pub fn tax(&self) -> Money {
        self.state.totals.tax
    }

    pub fn total(&self) -> Money {
        self.state.totals.total
    }

    /// First line for a product, if any.
    pub fn find_line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.state.lines.iter().find(|line| &line.product.id == product_id)
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(PricingPolicy::default())
    }
}
