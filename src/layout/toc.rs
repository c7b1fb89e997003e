//! Table-of-contents items

use crate::catalog::CategoryGroup;
use serde::Serialize;

/// One entry of the table of contents.
///
/// Rebuilt on every plan; never persisted. All product rows of a category
/// carry the category's starting page; rows do not track the category's
/// internal sub-pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TocItem {
    /// Category heading with its starting page
    #[serde(rename_all = "camelCase")]
    Category {
        name: String,
        page: usize,
        product_count: usize,
    },
    /// One product row under its category heading
    #[serde(rename_all = "camelCase")]
    Product {
        category: String,
        code: String,
        name: String,
        material: String,
        wholesale_price: f64,
        page: usize,
    },
}

impl TocItem {
    /// The page this item points at.
    pub fn page(&self) -> usize {
        match self {
            TocItem::Category { page, .. } => *page,
            TocItem::Product { page, .. } => *page,
        }
    }

    pub fn is_category(&self) -> bool {
        matches!(self, TocItem::Category { .. })
    }
}

/// Number of TOC items the given categories produce: one heading plus one
/// row per product, skipping empty categories. Independent of any page
/// numbering, which is what lets the planner size the TOC first.
pub fn item_count(categories: &[CategoryGroup]) -> usize {
    categories
        .iter()
        .filter(|c| !c.is_empty())
        .map(|c| 1 + c.product_count())
        .sum()
}

/// The heading and product rows for one category, all referencing its
/// starting page.
pub fn items_for_category(group: &CategoryGroup, start_page: usize) -> Vec<TocItem> {
    let mut items = Vec::with_capacity(1 + group.product_count());
    items.push(TocItem::Category {
        name: group.display_name.clone(),
        page: start_page,
        product_count: group.product_count(),
    });
    for product in &group.products {
        items.push(TocItem::Product {
            category: group.display_name.clone(),
            code: product.code.clone(),
            name: product.name.clone(),
            material: product.material_key().to_string(),
            wholesale_price: product.wholesale_price,
            page: start_page,
        });
    }
    items
}

/// Split the flat item list into pages of at most `per_page` items.
pub fn paginate(items: Vec<TocItem>, per_page: usize) -> Vec<Vec<TocItem>> {
    let mut pages = Vec::with_capacity(items.len().div_ceil(per_page.max(1)));
    let mut items = items.into_iter().peekable();
    while items.peek().is_some() {
        pages.push(items.by_ref().take(per_page).collect());
    }
    pages
}
