//! End-to-end shopping sessions over the demo catalog.

use std::sync::Arc;

use storefront_commerce::prelude::*;

fn session() -> Session {
    storefront_observability::init_for_tests();
    Session::demo()
}

fn product(session: &Session, id: &str) -> Arc<Product> {
    session.product(id).expect("demo product")
}

fn shipping_info() -> ShippingInfo {
    ShippingInfo {
        first_name: "Alan".to_string(),
        last_name: "Turing".to_string(),
        email: "alan@example.com".to_string(),
        phone: "555-0142".to_string(),
        address: "7 Enigma Rd".to_string(),
        city: "New York".to_string(),
        state: "NY".to_string(),
        zip_code: "10001".to_string(),
    }
}

#[test]
fn browse_add_wishlist_and_checkout() {
    let mut session = session();

    let electronics = session.browse(&FilterCriteria::new().with_category(Category::Electronics));
    let ids: Vec<&str> = electronics.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["4", "5", "12"]);

    let headphones = product(&session, "4");
    let jacket = product(&session, "1");
    session.cart_mut().add_to_cart(&headphones, 1, None, Some("Black"));
    session.cart_mut().add_to_cart(&jacket, 2, Some("M"), Some("Black"));
    session.wishlist_mut().add_to_wishlist(&jacket);
    session.wishlist_mut().add_to_wishlist(&jacket);

    assert_eq!(session.cart().item_count(), 3);
    assert_eq!(session.wishlist().item_count(), 1);

    // 199.99 + 2 * 89.99
    let subtotal = Money::usd(37_997);
    assert_eq!(session.cart().subtotal(), subtotal);
    assert!(session.cart().shipping().is_zero());
    assert_eq!(session.cart().tax(), Money::usd(3040));
    assert_eq!(session.cart().total(), Money::usd(41_037));

    let checkout = session.checkout_mut();
    assert!(matches!(checkout.advance(), Err(CommerceError::CheckoutIncomplete(_))));
    checkout.set_shipping_info(shipping_info());
    assert_eq!(checkout.advance().unwrap(), CheckoutStep::Payment);
    assert_eq!(checkout.advance().unwrap(), CheckoutStep::Review);

    let order = session.place_order().unwrap();
    assert_eq!(order.item_count(), 3);
    assert_eq!(order.totals.total, Money::usd(41_037));
    assert_eq!(order.lines[1].label(), format!("{} × 2", jacket.name));
    assert_eq!(order.shipping_info.city_line(), "New York, NY 10001");

    assert!(session.cart().is_empty());
    assert!(session.cart().totals().is_zero());
    assert_eq!(session.checkout().step(), CheckoutStep::Shipping);
    assert!(!session.checkout().shipping_info().is_complete());
    // The wishlist outlives the order.
    assert_eq!(session.wishlist().item_count(), 1);
}

#[test]
fn second_order_on_empty_cart_fails() {
    let mut session = session();
    let product = product(&session, "2");
    session.cart_mut().add_product(&product);

    let reach_review = |session: &mut Session| {
        session.checkout_mut().set_shipping_info(shipping_info());
        session.checkout_mut().advance().unwrap();
        session.checkout_mut().advance().unwrap();
    };

    reach_review(&mut session);
    assert!(session.place_order().is_ok());

    reach_review(&mut session);
    assert!(matches!(session.place_order(), Err(CommerceError::EmptyCart)));
    assert_eq!(session.checkout().step(), CheckoutStep::Review);
}

#[test]
fn item_count_is_sum_of_distinct_additions() {
    let mut session = session();
    let additions = [("1", 2, "S"), ("1", 3, "M"), ("3", 1, "S"), ("6", 4, "")];

    for (id, qty, size) in additions {
        let p = product(&session, id);
        session.cart_mut().add_to_cart(&p, qty, Some(size), None);
    }

    assert_eq!(session.cart().line_count(), 4);
    assert_eq!(session.cart().item_count(), 10);
}

#[test]
fn subtotal_tracks_lines_through_mutations() {
    let mut session = session();
    let jacket = product(&session, "1");
    let lamp = product(&session, "6");
    let speaker = product(&session, "12");

    let subtotal_of = |session: &Session| {
        session
            .cart()
            .lines()
            .iter()
            .map(|l| l.product.price.amount_cents * l.quantity)
            .sum::<i64>()
    };

    session.cart_mut().add_to_cart(&jacket, 1, Some("L"), None);
    assert_eq!(session.cart().subtotal().amount_cents, subtotal_of(&session));
    session.cart_mut().add_to_cart(&lamp, 3, None, None);
    assert_eq!(session.cart().subtotal().amount_cents, subtotal_of(&session));
    session.cart_mut().update_quantity(&lamp.id, 1);
    assert_eq!(session.cart().subtotal().amount_cents, subtotal_of(&session));
    session.cart_mut().add_to_cart(&speaker, 2, None, None);
    session.cart_mut().remove_from_cart(&jacket.id);
    assert_eq!(session.cart().subtotal().amount_cents, subtotal_of(&session));
    session.cart_mut().update_quantity(&speaker.id, 0);
    assert_eq!(session.cart().subtotal().amount_cents, subtotal_of(&session));
    assert_eq!(session.cart().line_count(), 1);
}

#[test]
fn wishlist_toggle_from_listing() {
    let mut session = session();
    let results = session.browse(&FilterCriteria::new().with_min_rating(5));

    for p in &results {
        assert!(session.wishlist_mut().toggle(p));
    }
    assert_eq!(session.wishlist().item_count(), results.len());

    let first = results[0].clone();
    assert!(!session.wishlist_mut().toggle(&first));
    assert!(!session.wishlist().is_in_wishlist(&first.id));
    assert_eq!(session.wishlist().item_count(), results.len() - 1);
}

#[test]
fn sorted_listing_orders_by_price() {
    let session = session();

    let low = session.browse(&session.default_criteria().with_sort(SortOption::PriceLow));
    assert!(low.windows(2).all(|w| w[0].price <= w[1].price));

    let high = session.browse(&session.default_criteria().with_sort(SortOption::PriceHigh));
    assert!(high.windows(2).all(|w| w[0].price >= w[1].price));
    assert_eq!(low.len(), high.len());
}

#[test]
fn session_from_config_and_catalog_files() {
    storefront_observability::init_for_tests();
    let dir = tempfile::tempdir().unwrap();

    let config_path = dir.path().join("store.toml");
    std::fs::write(
        &config_path,
        "[pricing]\nfree_shipping_threshold_cents = 5000\n\n[filters]\nmax_price_cents = 20000\n",
    )
    .unwrap();

    let catalog_path = dir.path().join("catalog.json");
    std::fs::write(
        &catalog_path,
        r#"[
            {"id": "a", "name": "Mug", "description": "Stoneware", "price": 19.5,
             "image": "https://cdn.example.com/mug.jpg", "category": "home", "rating": 4, "reviewCount": 3},
            {"id": "b", "name": "Scarf", "description": "Wool", "price": 49.99,
             "originalPrice": 59.99, "image": "https://cdn.example.com/scarf.jpg", "category": "fashion", "rating": 5}
        ]"#,
    )
    .unwrap();

    let config = StoreConfig::load(&config_path).unwrap();
    let catalog = StaticCatalog::load(&catalog_path).unwrap();
    let mut session = Session::new(config, catalog);

    assert_eq!(session.browse(&session.default_criteria()).len(), 2);

    let scarf = session.product("b").unwrap();
    assert_eq!(scarf.discount_percent(), Some(17));
    session.cart_mut().add_to_cart(&scarf, 1, None, None);
    // 49.99 is under the configured 50.00 threshold.
    assert_eq!(session.cart().shipping(), Money::usd(999));

    let mug = session.product("a").unwrap();
    session.cart_mut().add_to_cart(&mug, 1, None, None);
    assert!(session.cart().shipping().is_zero());
}
