//! Filter criteria and sort options.

use std::collections::BTreeSet;

use crate::catalog::{Category, Product};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Sort options for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Featured,
    /// Sort by price, low to high.
    PriceLow,
    /// Sort by price, high to low.
    PriceHigh,
    /// Reverse catalog order. The catalog has no timestamps, so this only
    /// approximates recency.
    Newest,
    /// Sort by highest rated.
    Rating,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::Featured,
        SortOption::PriceLow,
        SortOption::PriceHigh,
        SortOption::Newest,
        SortOption::Rating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceLow => "price-low",
            SortOption::PriceHigh => "price-high",
            SortOption::Newest => "newest",
            SortOption::Rating => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceLow => "Price: Low to High",
            SortOption::PriceHigh => "Price: High to Low",
            SortOption::Newest => "Newest",
            SortOption::Rating => "Highest Rated",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let code = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|option| option.as_str() == code)
    }
}

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

/// Default upper bound of the price slider: $1000.
pub const DEFAULT_MAX_PRICE: Money = Money::usd(100_000);

impl PriceRange {
    pub fn new(min: Money, max: Money) -> Self {
        Self { min, max }
    }

    /// Check if `price` lies within both bounds, inclusive.
    pub fn contains(&self, price: Money) -> bool {
        self.min.amount_cents <= price.amount_cents && price.amount_cents <= self.max.amount_cents
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(Money::usd(0), DEFAULT_MAX_PRICE)
    }
}

/// What the shopper has selected in the filter sidebar and search bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterCriteria {
    /// Selected departments; empty means all.
    #[serde(default)]
    pub categories: BTreeSet<Category>,
    /// Price bounds.
    #[serde(default)]
    pub price_range: PriceRange,
    /// Minimum star rating; 0 disables the filter.
    #[serde(default)]
    pub min_rating: u8,
    /// Free-text query.
    #[serde(default)]
    pub search_query: String,
    /// Result ordering.
    #[serde(default)]
    pub sort: SortOption,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.insert(category);
        self
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    pub fn with_price_range(mut self, min: Money, max: Money) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    /// Move only the upper bound, as the price slider does.
    pub fn with_max_price(mut self, max: Money) -> Self {
        self.price_range.max = max;
        self
    }

    pub fn with_min_rating(mut self, rating: u8) -> Self {
        self.min_rating = rating;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Check or uncheck a department box.
    pub fn toggle_category(&mut self, category: Category, checked: bool) {
        if checked {
            self.categories.insert(category);
        } else {
            self.categories.remove(&category);
        }
    }

    /// "Clear All Filters": back to the sidebar defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check if any narrowing filter is active (sorting doesn't count).
    pub fn has_active_filters(&self) -> bool {
        !self.categories.is_empty()
            || self.price_range != PriceRange::default()
            || self.min_rating > 0
            || !self.search_query.trim().is_empty()
    }

    /// Lowercased query, surrounding whitespace included; `None` when blank.
    pub fn normalized_query(&self) -> Option<String> {
        (!self.search_query.trim().is_empty()).then(|| self.search_query.to_lowercase())
    }

    pub fn matches_category(&self, product: &Product) -> bool {
        self.categories.is_empty() || self.categories.contains(&product.category)
    }

    pub fn matches_price(&self, product: &Product) -> bool {
        self.price_range.contains(product.price)
    }

    pub fn matches_rating(&self, product: &Product) -> bool {
        self.min_rating == 0 || product.rating >= self.min_rating
    }
}
