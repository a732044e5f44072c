//! Search module.
//!
//! Contains filter criteria, the filter/sort pipeline and listing facets.

mod criteria;
mod facets;
mod pipeline;

pub use criteria::{FilterCriteria, PriceRange, SortOption, DEFAULT_MAX_PRICE};
pub use facets::{category_counts, featured, FEATURED_COUNT};
pub use pipeline::{apply, sort_products};
