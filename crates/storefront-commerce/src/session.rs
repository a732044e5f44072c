//! A shopper's session: the catalog plus the stores the UI reads from.

use std::sync::Arc;

use crate::cart::CartStore;
use crate::catalog::{Product, ProductSource, StaticCatalog};
use crate::checkout::{CheckoutFlow, OrderConfirmation};
use crate::config::StoreConfig;
use crate::ids::ProductId;
use crate::search::{self, FilterCriteria};
use crate::wishlist::WishlistStore;
use crate::CommerceError;

/// Owns the cart, wishlist and checkout for one shopper.
///
/// Built once at startup and passed by reference to whatever renders it.
#[derive(Debug)]
pub struct Session<C = StaticCatalog> {
    config: StoreConfig,
    catalog: C,
    cart: CartStore,
    wishlist: WishlistStore,
    checkout: CheckoutFlow,
}

impl<C: ProductSource> Session<C> {
    pub fn new(config: StoreConfig, catalog: C) -> Self {
        let cart = CartStore::new(config.pricing);
        tracing::debug!(
            products = catalog.list_products().len(),
            tax_rate_bps = config.pricing.tax_rate_bps,
            "session started"
        );
        Self {
            config,
            catalog,
            cart,
            wishlist: WishlistStore::new(),
            checkout: CheckoutFlow::new(),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    pub fn wishlist(&self) -> &WishlistStore {
        &self.wishlist
    }

    pub fn wishlist_mut(&mut self) -> &mut WishlistStore {
        &mut self.wishlist
    }

    pub fn checkout(&self) -> &CheckoutFlow {
        &self.checkout
    }

    pub fn checkout_mut(&mut self) -> &mut CheckoutFlow {
        &mut self.checkout
    }

    /// Run the filter pipeline over the catalog.
    pub fn browse(&self, criteria: &FilterCriteria) -> Vec<Arc<Product>> {
        search::apply(self.catalog.list_products(), criteria)
    }

    /// Look up a product. `None` means not found.
    pub fn product(&self, id: &str) -> Option<Arc<Product>> {
        self.catalog.find_product(id)
    }

    /// Add a catalog product to the cart by id.
    pub fn add_to_cart_by_id(
        &mut self,
        id: &ProductId,
        quantity: i64,
        selected_size: Option<&str>,
        selected_color: Option<&str>,
    ) -> Result<(), CommerceError> {
        let product = self.catalog.get_product(id)?;
        self.cart.add_to_cart(&product, quantity, selected_size, selected_color);
        Ok(())
    }

    /// Criteria seeded from the configured price bounds.
    pub fn default_criteria(&self) -> FilterCriteria {
        self.config.filters.criteria()
    }

    /// Place the order for the current cart.
    pub fn place_order(&mut self) -> Result<OrderConfirmation, CommerceError> {
        self.checkout.place_order(&mut self.cart)
    }
}

impl Session<StaticCatalog> {
    /// Default config over the demo catalog.
    pub fn demo() -> Self {
        Self::new(StoreConfig::default(), StaticCatalog::demo())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::checkout::{CheckoutStep, ShippingInfo};
    use crate::money::Money;

    fn shipping() -> ShippingInfo {
        ShippingInfo {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            phone: "555-0199".to_string(),
            address: "1 Compiler Ct".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            zip_code: "73301".to_string(),
        }
    }

    #[test]
    fn test_demo_session_starts_empty() {
        let session = Session::demo();
        assert_eq!(session.catalog().len(), 12);
        assert!(session.cart().is_empty());
        assert_eq!(session.wishlist().item_count(), 0);
        assert_eq!(session.checkout().step(), CheckoutStep::Shipping);
    }

    #[test]
    fn test_product_lookup() {
        let session = Session::demo();
        assert_eq!(session.product("4").map(|p| p.category), Some(Category::Electronics));
        assert!(session.product("404").is_none());
    }

    #[test]
    fn test_add_to_cart_by_id() {
        let mut session = Session::demo();
        session
            .add_to_cart_by_id(&ProductId::new("1"), 2, Some("M"), None)
            .unwrap();
        assert_eq!(session.cart().item_count(), 2);

        let err = session
            .add_to_cart_by_id(&ProductId::new("404"), 1, None, None)
            .unwrap_err();
        assert!(matches!(err, CommerceError::ProductNotFound(id) if id == "404"));
        assert_eq!(session.cart().line_count(), 1);
    }

    #[test]
    fn test_browse_with_default_criteria() {
        let session = Session::demo();
        let results = session.browse(&session.default_criteria());
        assert_eq!(results.len(), 11);
    }

    #[test]
    fn test_configured_price_bounds() {
        let mut config = StoreConfig::default();
        config.filters.max_price_cents = 10_000;
        let session = Session::new(config, StaticCatalog::demo());

        let criteria = session.default_criteria();
        assert_eq!(criteria.price_range.max, Money::usd(10_000));
        assert!(session
            .browse(&criteria)
            .iter()
            .all(|p| p.price <= Money::usd(10_000)));
    }

    #[test]
    fn test_configured_pricing_reaches_cart() {
        let mut config = StoreConfig::default();
        config.pricing.tax_rate_bps = 1000;
        let mut session = Session::new(config, StaticCatalog::demo());

        let product = session.product("2").unwrap();
        session.cart_mut().add_to_cart(&product, 1, None, None);
        // 45.99 at 10%
        assert_eq!(session.cart().tax(), Money::usd(460));
    }

    #[test]
    fn test_place_order_through_session() {
        let mut session = Session::demo();
        let product = session.product("1").unwrap();
        session.cart_mut().add_to_cart(&product, 1, Some("M"), Some("Black"));

        assert!(matches!(
            session.place_order(),
            Err(CommerceError::InvalidCheckoutTransition { .. })
        ));

        session.checkout_mut().set_shipping_info(shipping());
        session.checkout_mut().advance().unwrap();
        session.checkout_mut().advance().unwrap();

        let order = session.place_order().unwrap();
        assert_eq!(order.lines.len(), 1);
        assert!(session.cart().is_empty());
        assert_eq!(session.checkout().step(), CheckoutStep::Shipping);
    }
}
