//! Product and category types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storefront department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fashion,
    Electronics,
    Home,
}

impl Category {
    /// All categories in sidebar order.
    pub const ALL: [Category; 3] = [Category::Fashion, Category::Electronics, Category::Home];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fashion => "fashion",
            Category::Electronics => "electronics",
            Category::Home => "home",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Fashion => "Fashion",
            Category::Electronics => "Electronics",
            Category::Home => "Home & Decor",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fashion" => Some(Category::Fashion),
            "electronics" => Some(Category::Electronics),
            "home" => Some(Category::Home),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A product in the catalog.
///
/// Products are created once by the catalog and shared read-only (behind
/// `Arc`) with cart lines and the wishlist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Short marketing description.
    pub description: String,
    /// Current selling price.
    #[serde(with = "crate::money::decimal")]
    pub price: Money,
    /// Price before markdown, if the product is on sale.
    #[serde(
        default,
        with = "crate::money::decimal::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_price: Option<Money>,
    /// Listing image URL.
    pub image: String,
    /// Gallery image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Department.
    pub category: Category,
    /// Star rating, 0-5.
    pub rating: u8,
    /// Number of reviews behind the rating.
    #[serde(default)]
    pub review_count: u32,
    /// Whether the product can be bought.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// Size choices, if the product comes in sizes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
    /// Color choices, if the product comes in colors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
}

fn default_in_stock() -> bool {
    true
}

/// Highest allowed star rating.
pub const MAX_RATING: u8 = 5;

impl Product {
    /// Create an in-stock product with no images, rating or variants.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: Category,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            original_price: None,
            image: String::new(),
            images: Vec::new(),
            category,
            rating: 0,
            review_count: 0,
            in_stock: true,
            sizes: None,
            colors: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_original_price(mut self, original: Money) -> Self {
        self.original_price = Some(original);
        self
    }

    /// Set the listing image; it also becomes the first gallery image.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.images.insert(0, url.clone());
        self.image = url;
        self
    }

    /// Set rating (clamped to 0-5) and review count.
    pub fn with_rating(mut self, rating: u8, review_count: u32) -> Self {
        self.rating = rating.min(MAX_RATING);
        self.review_count = review_count;
        self
    }

    pub fn with_sizes(mut self, sizes: &[&str]) -> Self {
        self.sizes = Some(sizes.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn with_colors(mut self, colors: &[&str]) -> Self {
        self.colors = Some(colors.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }

    /// Markdown as a whole percentage of the original price.
    ///
    /// `None` unless the original price is above the current one.
    pub fn discount_percent(&self) -> Option<u8> {
        let original = self.original_price?;
        if original.amount_cents <= self.price.amount_cents || original.amount_cents <= 0 {
            return None;
        }
        let off = original.amount_cents - self.price.amount_cents;
        let percent = (off as f64 / original.amount_cents as f64 * 100.0).round();
        Some(percent as u8)
    }

    /// Check if the product is marked down.
    pub fn is_on_sale(&self) -> bool {
        self.discount_percent().is_some()
    }

    /// First gallery image, falling back to the listing image.
    pub fn primary_image(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or(&self.image)
    }

    pub fn has_sizes(&self) -> bool {
        self.sizes.as_ref().is_some_and(|s| !s.is_empty())
    }

    pub fn has_colors(&self) -> bool {
        self.colors.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Case-insensitive match of an already lowercased needle against name,
    /// description and category code.
    pub(crate) fn matches_text(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
            || self.category.as_str().contains(needle_lower)
    }
}
