//! Linesheet: a wholesale catalog ("line sheet") pagination core
//!
//! This crate turns a flat list of product records into a fully paginated
//! catalog document:
//! - Organizing products into categories and materials, with aggregate
//!   summaries
//! - Planning page numbers for the cover, the table of contents, and the
//!   category sections (two-pass, so TOC entries can reference pages that
//!   are laid out after them)
//! - Assembling render-ready page descriptors and emitting document markup
//!
//! The pipeline is pure and synchronous. Derived structures are rebuilt
//! from the product list on every generation; a changed product list
//! invalidates everything.

pub mod catalog;
pub mod error;
pub mod layout;
pub mod render;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::WasmLinesheet;

// Re-export primary types
pub use catalog::{
    filter_active, organize, parse_products, price_ranges, sort_products, CatalogSummary,
    CategoryGroup, CategoryPriceRange, CategoryStats, MaterialGroup, OrganizedCatalog, Product,
    ProductImage, SortKey,
};
pub use error::Error;
pub use layout::{plan, CategoryPlacement, PageMap, PlannerOptions, TocItem};
pub use render::{assemble, render_document, render_page, DocumentOptions, PageDescriptor};

/// The main builder state combining all pipeline stages.
///
/// Owns the authoritative product list and the generation options, and
/// caches the organized catalog derived from them. Any change to the
/// products or the active-product filter invalidates the cache; the next
/// read rebuilds from scratch.
pub struct Linesheet {
    products: Vec<Product>,
    planner_options: PlannerOptions,
    document_options: DocumentOptions,
    include_inactive: bool,
    catalog: OrganizedCatalog,
    catalog_dirty: bool,
}

impl Default for Linesheet {
    fn default() -> Self {
        Self::new()
    }
}

impl Linesheet {
    /// Create an empty builder with default options.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            planner_options: PlannerOptions::default(),
            document_options: DocumentOptions::default(),
            include_inactive: false,
            catalog: organize(&[]),
            catalog_dirty: false,
        }
    }

    /// Create a builder over an initial product list.
    pub fn with_products(products: Vec<Product>) -> Self {
        let mut linesheet = Self::new();
        linesheet.set_products(products);
        linesheet
    }

    /// Replace the product list, invalidating all derived data.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.catalog_dirty = true;
    }

    /// The authoritative product list, unfiltered.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Set the page densities used by the planner.
    pub fn set_planner_options(&mut self, options: PlannerOptions) -> Result<(), Error> {
        options.validate()?;
        self.planner_options = options;
        Ok(())
    }

    /// Set the document title shown on the cover.
    pub fn set_title(&mut self, title: &str) {
        self.document_options.title = title.to_string();
    }

    /// Include inactive products instead of the default active-only
    /// filtering.
    pub fn set_include_inactive(&mut self, include_inactive: bool) {
        if self.include_inactive != include_inactive {
            self.include_inactive = include_inactive;
            self.catalog_dirty = true;
        }
    }

    /// The organized catalog, rebuilt if products or filtering changed.
    pub fn catalog(&mut self) -> &OrganizedCatalog {
        if self.catalog_dirty {
            let source = if self.include_inactive {
                self.products.clone()
            } else {
                filter_active(&self.products)
            };
            self.catalog = organize(&source);
            self.catalog_dirty = false;
        }
        &self.catalog
    }

    /// Aggregate statistics over the organized catalog.
    pub fn summary(&mut self) -> &CatalogSummary {
        &self.catalog().summary
    }

    /// Run the full pipeline and return the ordered page descriptors.
    pub fn generate(&mut self) -> Result<Vec<PageDescriptor>, Error> {
        let options = self.planner_options;
        let catalog = self.catalog();
        let map = plan(&catalog.categories, &options)?;
        assemble(&catalog.categories, &map)
    }

    /// Run the full pipeline and render the document markup.
    pub fn generate_html(&mut self) -> Result<String, Error> {
        let document_options = self.document_options.clone();
        let pages = self.generate()?;
        Ok(render_document(&pages, &document_options))
    }

    /// Total page count the current products produce.
    pub fn page_count(&mut self) -> Result<usize, Error> {
        let options = self.planner_options;
        let catalog = self.catalog();
        Ok(plan(&catalog.categories, &options)?.total_pages())
    }
}
