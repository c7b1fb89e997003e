//! Renderable page descriptors

use crate::catalog::Product;
use crate::layout::TocItem;
use serde::Serialize;

/// One page of the assembled document, in render-ready form.
///
/// Descriptors own their content (category pages carry copies of their
/// products, never views into the catalog) and are produced fresh on
/// every assembly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PageDescriptor {
    /// The cover, always page 1
    #[serde(rename_all = "camelCase")]
    Cover { page_number: usize },
    /// One table-of-contents page; `index` is its 1-based ordinal within
    /// the TOC run
    #[serde(rename_all = "camelCase")]
    Toc {
        index: usize,
        items: Vec<TocItem>,
        page_number: usize,
    },
    /// One category page with up to the configured number of products
    #[serde(rename_all = "camelCase")]
    Category {
        /// Category display name
        name: String,
        /// 1-based ordinal within this category's run of pages
        section_page: usize,
        products: Vec<Product>,
        page_number: usize,
    },
}

impl PageDescriptor {
    /// Absolute page number of this page.
    pub fn page_number(&self) -> usize {
        match self {
            PageDescriptor::Cover { page_number } => *page_number,
            PageDescriptor::Toc { page_number, .. } => *page_number,
            PageDescriptor::Category { page_number, .. } => *page_number,
        }
    }

    /// Whether this is a TOC page after the first.
    pub fn is_toc_continuation(&self) -> bool {
        matches!(self, PageDescriptor::Toc { index, .. } if *index > 1)
    }
}
