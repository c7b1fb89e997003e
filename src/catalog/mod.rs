//! Product data model and catalog organization

mod category;
mod organizer;
mod product;

pub use category::{canonical_display_name, CategoryGroup, MaterialGroup};
pub use organizer::{
    organize, price_ranges, CatalogSummary, CategoryPriceRange, CategoryStats, OrganizedCatalog,
};
pub use product::{
    filter_active, parse_products, sort_products, Product, ProductImage, SortKey,
    DEFAULT_CATEGORY, DEFAULT_MATERIAL,
};
