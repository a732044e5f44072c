//! Wishlist of favorited products.
//!
//! Same shape as the cart: a pure [`WishlistState::reduce`] behind a store
//! with named methods. Entries are unique by product id and keep insertion
//! order.

use std::sync::Arc;

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::Serialize;

/// A wishlist mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum WishlistAction {
    /// Add a product unless already present.
    Add(Arc<Product>),
    /// Remove a product if present.
    Remove(ProductId),
}

/// Favorited products in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WishlistState {
    items: Vec<Arc<Product>>,
}

impl WishlistState {
    /// Compute the state that results from applying `action`.
    pub fn reduce(&self, action: WishlistAction) -> WishlistState {
        match action {
            WishlistAction::Add(product) => {
                if self.contains(&product.id) {
                    return self.clone();
                }
                let mut items = self.items.clone();
                items.push(product);
                WishlistState { items }
            }
            WishlistAction::Remove(product_id) => WishlistState {
                items: self
                    .items
                    .iter()
                    .filter(|p| p.id != product_id)
                    .cloned()
                    .collect(),
            },
        }
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|p| &p.id == product_id)
    }

    pub fn items(&self) -> &[Arc<Product>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The session's wishlist.
#[derive(Debug, Clone, Default)]
pub struct WishlistStore {
    state: WishlistState,
}

impl WishlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn dispatch(&mut self, action: WishlistAction) {
        let kind = match &action {
            WishlistAction::Add(_) => "add",
            WishlistAction::Remove(_) => "remove",
        };
        self.state = self.state.reduce(action);
        tracing::debug!(action = kind, items = self.state.len(), "wishlist updated");
    }

    /// Add a product; a no-op if it is already on the list.
    pub fn add_to_wishlist(&mut self, product: &Arc<Product>) {
        self.dispatch(WishlistAction::Add(Arc::clone(product)));
    }

    /// Remove a product; a no-op if it is not on the list.
    pub fn remove_from_wishlist(&mut self, product_id: &ProductId) {
        self.dispatch(WishlistAction::Remove(product_id.clone()));
    }

    /// Remove if present, add otherwise. Returns whether the product is on
    /// the list afterwards.
    pub fn toggle(&mut self, product: &Arc<Product>) -> bool {
        if self.is_in_wishlist(&product.id) {
            self.remove_from_wishlist(&product.id);
            false
        } else {
            self.add_to_wishlist(product);
            true
        }
    }

    pub fn is_in_wishlist(&self, product_id: &ProductId) -> bool {
        self.state.contains(product_id)
    }

    /// Number of favorited products.
    pub fn item_count(&self) -> usize {
        self.state.len()
    }

    pub fn items(&self) -> &[Arc<Product>] {
        self.state.items()
    }

    pub fn state(&self) -> &WishlistState {
        &self.state
    }
}
