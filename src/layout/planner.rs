//! Deterministic page assignment for the catalog document
//!
//! The table of contents references pages that are laid out after it, so
//! planning runs in a fixed order: size the TOC from its item count alone,
//! then walk categories with a page cursor offset by the TOC size, then
//! fill in the TOC items with the category starting pages now known.

use crate::catalog::CategoryGroup;
use crate::error::Error;
use crate::layout::toc::{self, TocItem};
use log::debug;

/// Page densities for the planner.
///
/// Presentation parameters, not invariants: the defaults match a letter
/// page but hosts may override both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerOptions {
    /// Products per category page
    pub products_per_page: usize,
    /// TOC items per table-of-contents page
    pub toc_items_per_page: usize,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            products_per_page: 4,
            toc_items_per_page: 25,
        }
    }
}

impl PlannerOptions {
    /// Reject densities that cannot fill any page.
    pub fn validate(&self) -> Result<(), Error> {
        if self.products_per_page == 0 {
            return Err(Error::InvalidOptions(
                "products_per_page must be at least 1".to_string(),
            ));
        }
        if self.toc_items_per_page == 0 {
            return Err(Error::InvalidOptions(
                "toc_items_per_page must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Pages needed for a category of `product_count` products.
    pub fn category_page_count(&self, product_count: usize) -> usize {
        product_count.div_ceil(self.products_per_page)
    }

    /// Pages needed for `item_count` TOC items (0 when there are none).
    pub fn toc_page_count(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.toc_items_per_page)
    }
}

/// Absolute page counter threaded through the planning walk.
#[derive(Debug, Clone, Copy)]
struct PageCursor {
    next: usize,
}

impl PageCursor {
    fn starting_at(first: usize) -> Self {
        Self { next: first }
    }

    /// Claim `pages` consecutive pages, returning the first.
    fn take(&mut self, pages: usize) -> usize {
        let start = self.next;
        self.next += pages;
        start
    }
}

/// Where one category's pages land in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPlacement {
    /// Raw category name (grouping key)
    pub name: String,
    /// Absolute page number of the category's first page
    pub start_page: usize,
    pub page_count: usize,
}

/// The planner's output: TOC page slices, category placements, and the
/// densities they were computed with.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMap {
    options: PlannerOptions,
    toc_pages: Vec<Vec<TocItem>>,
    placements: Vec<CategoryPlacement>,
    total_pages: usize,
}

impl PageMap {
    /// The densities this map was planned with.
    pub fn options(&self) -> &PlannerOptions {
        &self.options
    }

    pub fn toc_page_count(&self) -> usize {
        self.toc_pages.len()
    }

    /// Per-page TOC item slices, in document order.
    pub fn toc_pages(&self) -> &[Vec<TocItem>] {
        &self.toc_pages
    }

    /// Category placements in document order.
    pub fn placements(&self) -> &[CategoryPlacement] {
        &self.placements
    }

    /// Look up a category's placement by its raw name.
    pub fn placement(&self, name: &str) -> Option<&CategoryPlacement> {
        self.placements.iter().find(|p| p.name == name)
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }
}

/// Assign page numbers to the cover, TOC pages, and category pages.
///
/// Page 1 is the cover; TOC pages follow from page 2; category pages run
/// after the TOC in category order. Categories with zero products are
/// skipped entirely: no pages, no TOC heading.
pub fn plan(categories: &[CategoryGroup], options: &PlannerOptions) -> Result<PageMap, Error> {
    options.validate()?;

    // TOC size depends only on the item count, never on page numbers, so
    // it is computed before any page is assigned.
    let item_count = toc::item_count(categories);
    let toc_page_count = options.toc_page_count(item_count);

    // First category page comes after the cover and the whole TOC.
    let mut cursor = PageCursor::starting_at(1 + toc_page_count + 1);
    let mut placements = Vec::new();
    let mut items = Vec::with_capacity(item_count);

    for group in categories.iter().filter(|c| !c.is_empty()) {
        let page_count = options.category_page_count(group.product_count());
        let start_page = cursor.take(page_count);
        placements.push(CategoryPlacement {
            name: group.name.clone(),
            start_page,
            page_count,
        });
        items.extend(toc::items_for_category(group, start_page));
    }

    let toc_pages = toc::paginate(items, options.toc_items_per_page);
    debug_assert_eq!(toc_pages.len(), toc_page_count);

    let category_pages: usize = placements.iter().map(|p| p.page_count).sum();
    let total_pages = 1 + toc_page_count + category_pages;
    debug!(
        "planned {item_count} TOC items across {toc_page_count} pages, \
         {category_pages} category pages, {total_pages} pages total"
    );

    Ok(PageMap {
        options: *options,
        toc_pages,
        placements,
        total_pages,
    })
}
