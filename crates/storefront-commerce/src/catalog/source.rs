//! Catalog collaborator and its in-memory implementation.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use crate::catalog::product::MAX_RATING;
use crate::catalog::{demo, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Source of the immutable, ordered product list.
///
/// The order returned by `list_products` is the "featured" order used by the
/// filter pipeline.
pub trait ProductSource {
    /// All products, in catalog order.
    fn list_products(&self) -> &[Arc<Product>];

    /// Look up a product by id. `None` means not found.
    fn find_product(&self, id: &str) -> Option<Arc<Product>> {
        self.list_products().iter().find(|p| p.id == id).cloned()
    }

    /// Look up a product that must exist.
    fn get_product(&self, id: &ProductId) -> Result<Arc<Product>, CommerceError> {
        self.find_product(id.as_str())
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }
}

/// Catalog held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Arc<Product>>,
}

impl StaticCatalog {
    /// Build a catalog, validating every product.
    ///
    /// Rejects empty or duplicate ids, ratings above 5, negative prices and
    /// products without any image. A product with only a listing image gets it
    /// as its single gallery image.
    pub fn new(mut products: Vec<Product>) -> Result<Self, CommerceError> {
        for product in &mut products {
            if product.images.is_empty() && !product.image.trim().is_empty() {
                product.images.push(product.image.clone());
            }
        }
        validate(&products)?;
        tracing::info!(products = products.len(), "catalog loaded");
        Ok(Self {
            products: products.into_iter().map(Arc::new).collect(),
        })
    }

    /// The twelve storefront demo products.
    pub fn demo() -> Self {
        Self {
            products: demo::demo_products().into_iter().map(Arc::new).collect(),
        }
    }

    /// Parse a JSON array of products (camelCase keys, decimal prices).
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Read a JSON catalog document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading catalog");
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductSource for StaticCatalog {
    fn list_products(&self) -> &[Arc<Product>] {
        &self.products
    }
}

fn validate(products: &[Product]) -> Result<(), CommerceError> {
    let mut seen = HashSet::new();

    for product in products {
        let id = product.id.as_str();
        if id.trim().is_empty() {
            return Err(CommerceError::InvalidCatalog(format!(
                "product '{}' has an empty id",
                product.name
            )));
        }
        if !seen.insert(id) {
            return Err(CommerceError::InvalidCatalog(format!("duplicate id {}", id)));
        }
        if product.rating > MAX_RATING {
            return Err(CommerceError::InvalidCatalog(format!(
                "product {} has rating {} (max {})",
                id, product.rating, MAX_RATING
            )));
        }
        if product.price.is_negative() || product.original_price.is_some_and(|p| p.is_negative()) {
            return Err(CommerceError::InvalidCatalog(format!(
                "product {} has a negative price",
                id
            )));
        }
        if product.images.is_empty() {
            return Err(CommerceError::InvalidCatalog(format!("product {} has no images", id)));
        }
    }
    Ok(())
}
