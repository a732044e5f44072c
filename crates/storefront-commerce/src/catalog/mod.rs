//! Product catalog module.
//!
//! Contains the product model, the catalog collaborator seam and the demo
//! product set.

mod demo;
mod product;
mod source;

pub use demo::demo_products;
pub use product::{Category, Product, MAX_RATING};
pub use source::{ProductSource, StaticCatalog};
