//! Catalog-wide listing helpers: department counts and the featured strip.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::catalog::{Category, Product};

/// Number of products per department, over the whole catalog.
///
/// Every category is present, with zero when it has no products.
pub fn category_counts(catalog: &[Arc<Product>]) -> BTreeMap<Category, usize> {
    let mut counts: BTreeMap<Category, usize> = Category::ALL.iter().map(|c| (*c, 0)).collect();
    for product in catalog {
        *counts.entry(product.category).or_default() += 1;
    }
    counts
}

/// Number of products the home page features.
pub const FEATURED_COUNT: usize = 6;

/// The first `count` products in catalog order.
pub fn featured(catalog: &[Arc<Product>], count: usize) -> Vec<Arc<Product>> {
    catalog.iter().take(count).cloned().collect()
}
