//! The filter/sort pipeline behind the product listing.

use std::sync::Arc;

use crate::catalog::Product;
use crate::search::{FilterCriteria, SortOption};

/// Narrow `catalog` by `criteria`, then order the survivors.
///
/// Filters run in order: category, price, rating, text. None of them
/// reorders. Sorting is stable, so ties keep catalog order. An empty result
/// is a normal outcome.
pub fn apply(catalog: &[Arc<Product>], criteria: &FilterCriteria) -> Vec<Arc<Product>> {
    let query = criteria.normalized_query();

    let mut results: Vec<Arc<Product>> = catalog
        .iter()
        .filter(|p| criteria.matches_category(p))
        .filter(|p| criteria.matches_price(p))
        .filter(|p| criteria.matches_rating(p))
        .filter(|p| query.as_deref().map_or(true, |q| p.matches_text(q)))
        .cloned()
        .collect();

    sort_products(&mut results, criteria.sort);

    tracing::trace!(
        candidates = catalog.len(),
        matched = results.len(),
        sort = criteria.sort.as_str(),
        "filter pipeline applied"
    );

    results
}

/// Stable in-place sort by `sort`.
pub fn sort_products(products: &mut [Arc<Product>], sort: SortOption) {
    match sort {
        SortOption::Featured => {}
        SortOption::PriceLow => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOption::PriceHigh => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOption::Rating => products.sort_by(|a, b| b.rating.cmp(&a.rating)),
        SortOption::Newest => products.reverse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, ProductSource, StaticCatalog};
    use crate::money::Money;

    fn demo() -> StaticCatalog {
        StaticCatalog::demo()
    }

    fn ids(products: &[Arc<Product>]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_default_criteria_keeps_everything_under_1000() {
        let catalog = demo();
        let results = apply(catalog.list_products(), &FilterCriteria::default());
        // The $1299.99 laptop is above the default slider maximum.
        assert_eq!(ids(&results), vec!["1", "2", "3", "4", "5", "6", "7", "8", "10", "11", "12"]);
    }

    #[test]
    fn test_category_filter_keeps_catalog_order() {
        let catalog = demo();
        let criteria = FilterCriteria::new()
            .with_category(Category::Electronics)
            .with_max_price(Money::usd(200_000));
        let results = apply(catalog.list_products(), &criteria);

        assert_eq!(ids(&results), vec!["4", "5", "9", "12"]);
        assert!(results.iter().all(|p| p.category == Category::Electronics));
    }

    #[test]
    fn test_multiple_categories() {
        let catalog = demo();
        let criteria = FilterCriteria::new().with_categories([Category::Home, Category::Electronics]);
        let results = apply(catalog.list_products(), &criteria);
        assert_eq!(ids(&results), vec!["4", "5", "6", "10", "11", "12"]);
    }

    #[test]
    fn test_price_filter_inclusive() {
        let catalog = demo();
        let criteria = FilterCriteria::new().with_price_range(Money::usd(4999), Money::usd(6599));
        let results = apply(catalog.list_products(), &criteria);
        assert_eq!(ids(&results), vec!["3", "10"]);
    }

    #[test]
    fn test_rating_filter() {
        let catalog = demo();
        let criteria = FilterCriteria::new()
            .with_min_rating(5)
            .with_max_price(Money::usd(200_000));
        let results = apply(catalog.list_products(), &criteria);
        assert!(results.iter().all(|p| p.rating >= 5));
        assert_eq!(ids(&results), vec!["1", "3", "4", "6", "8", "9", "11"]);
    }

    #[test]
    fn test_text_filter_is_case_insensitive() {
        let catalog = demo();
        let criteria = FilterCriteria::new().with_query("PREMIUM");
        let results = apply(catalog.list_products(), &criteria);
        assert_eq!(ids(&results), vec!["1", "4", "7", "8", "12"]);
    }

    #[test]
    fn test_text_filter_matches_category_code() {
        let catalog = demo();
        let results = apply(catalog.list_products(), &FilterCriteria::new().with_query("home"));
        assert_eq!(ids(&results), vec!["6", "10", "11"]);
    }

    #[test]
    fn test_blank_query_is_ignored() {
        let catalog = demo();
        let all = apply(catalog.list_products(), &FilterCriteria::new());
        let blank = apply(catalog.list_products(), &FilterCriteria::new().with_query("   "));
        assert_eq!(all, blank);
    }

    #[test]
    fn test_query_whitespace_is_part_of_the_match() {
        let lamp = Arc::new(Product::new("1", "Lamp", Category::Home, Money::usd(2000)));
        let catalog = vec![lamp];

        let exact = apply(&catalog, &FilterCriteria::new().with_query("lamp"));
        assert_eq!(ids(&exact), vec!["1"]);

        let padded = apply(&catalog, &FilterCriteria::new().with_query("lamp "));
        assert!(padded.is_empty());
    }

    #[test]
    fn test_no_matches_is_empty() {
        let catalog = demo();
        let results = apply(catalog.list_products(), &FilterCriteria::new().with_query("submarine"));
        assert!(results.is_empty());
    }

    #[test]
    fn test_sort_price_low() {
        let catalog = demo();
        let criteria = FilterCriteria::new().with_sort(SortOption::PriceLow);
        let results = apply(catalog.list_products(), &criteria);
        assert!(results.windows(2).all(|w| w[0].price <= w[1].price));
        assert_eq!(results[0].id.as_str(), "2");
    }

    #[test]
    fn test_sort_price_high() {
        let catalog = demo();
        let criteria = FilterCriteria::new().with_sort(SortOption::PriceHigh);
        let results = apply(catalog.list_products(), &criteria);
        assert!(results.windows(2).all(|w| w[0].price >= w[1].price));
        assert_eq!(results[0].id.as_str(), "5");
    }

    #[test]
    fn test_sort_rating_is_stable() {
        let catalog = demo();
        let criteria = FilterCriteria::new()
            .with_sort(SortOption::Rating)
            .with_max_price(Money::usd(200_000));
        let results = apply(catalog.list_products(), &criteria);
        assert_eq!(
            ids(&results),
            vec!["1", "3", "4", "6", "8", "9", "11", "2", "5", "7", "10", "12"]
        );
    }

    #[test]
    fn test_sort_price_ties_keep_catalog_order() {
        let a = Arc::new(Product::new("a", "A", Category::Home, Money::usd(500)));
        let b = Arc::new(Product::new("b", "B", Category::Home, Money::usd(100)));
        let c = Arc::new(Product::new("c", "C", Category::Home, Money::usd(500)));
        let catalog = vec![a, b, c];

        let low = apply(&catalog, &FilterCriteria::new().with_sort(SortOption::PriceLow));
        assert_eq!(ids(&low), vec!["b", "a", "c"]);

        let high = apply(&catalog, &FilterCriteria::new().with_sort(SortOption::PriceHigh));
        assert_eq!(ids(&high), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_sort_newest_reverses_filtered_order() {
        let catalog = demo();
        let criteria = FilterCriteria::new()
            .with_category(Category::Home)
            .with_sort(SortOption::Newest);
        let results = apply(catalog.list_products(), &criteria);
        assert_eq!(ids(&results), vec!["11", "10", "6"]);
    }

    #[test]
    fn test_apply_is_deterministic() {
        let catalog = demo();
        let criteria = FilterCriteria::new()
            .with_query("e")
            .with_sort(SortOption::PriceHigh);
        let first = apply(catalog.list_products(), &criteria);
        let second = apply(catalog.list_products(), &criteria);
        assert_eq!(first, second);
        assert_eq!(catalog.len(), 12);
    }
}
