//! Markup output for assembled pages
//!
//! Emits the document structure only; styling ships separately with the
//! host application.

use crate::catalog::Product;
use crate::layout::TocItem;
use crate::render::page::PageDescriptor;
use std::fmt::Write;

/// Document-level rendering options.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentOptions {
    /// Title shown on the cover and in the document head
    pub title: String,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            title: "Line Sheet".to_string(),
        }
    }
}

fn escape(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

fn escape_attr(text: &str) -> String {
    html_escape::encode_double_quoted_attribute(text).into_owned()
}

/// Format a wholesale price the way the catalog displays it: whole
/// amounts without decimals, fractional amounts with two.
pub(crate) fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{}", price as i64)
    } else {
        format!("{price:.2}")
    }
}

/// Render the full document around the assembled pages.
pub fn render_document(pages: &[PageDescriptor], options: &DocumentOptions) -> String {
    let mut html = String::new();
    let title = escape(&options.title);
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{title}</title>\n</head>\n<body class=\"linesheet-document\">\n\
         <div class=\"linesheet-preview-content\">\n"
    );
    for page in pages {
        html.push_str(&render_page(page, options));
    }
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

/// Render a single page descriptor.
pub fn render_page(page: &PageDescriptor, options: &DocumentOptions) -> String {
    match page {
        PageDescriptor::Cover { .. } => render_cover(options),
        PageDescriptor::Toc {
            index,
            items,
            page_number,
        } => render_toc_page(*index, items, *page_number),
        PageDescriptor::Category {
            name,
            section_page,
            products,
            page_number,
        } => render_category_page(name, *section_page, products, *page_number),
    }
}

fn render_cover(options: &DocumentOptions) -> String {
    format!(
        "<div class=\"cover-page\">\n<div class=\"cover-content\">\n\
         <h1 class=\"brand-name\">{}</h1>\n</div>\n</div>\n",
        escape(&options.title)
    )
}

fn render_toc_page(index: usize, items: &[TocItem], page_number: usize) -> String {
    let heading = if index == 1 {
        "Table of Contents".to_string()
    } else {
        "Table of Contents (continued)".to_string()
    };

    format!(
        "<div class=\"category-section\" data-category=\"table-of-contents\" \
         data-section-page=\"{index}\">\n\
         <div class=\"catalog-header\">\n<h2 class=\"category-title\">{heading}, page {index}</h2>\n</div>\n\
         <div class=\"toc-body\">\n<div class=\"toc-content\">\n{}\
         </div>\n</div>\n\
         <div class=\"catalog-footer\">\n<p class=\"page-number\">{page_number}</p>\n</div>\n\
         </div>\n",
        render_toc_items(items)
    )
}

/// Render one TOC page's items.
///
/// A page whose first item is a product row is a continuation of the
/// previous page's category: the row wrapper opens immediately, without
/// re-emitting the heading.
fn render_toc_items(items: &[TocItem]) -> String {
    let mut html = String::new();
    let mut wrapper_open = false;

    if items.first().is_some_and(|item| !item.is_category()) {
        html.push_str("<div class=\"toc-products\">\n");
        wrapper_open = true;
    }

    for item in items {
        match item {
            TocItem::Category {
                name,
                page,
                product_count: _,
            } => {
                if wrapper_open {
                    html.push_str("</div>\n");
                }
                let _ = write!(
                    html,
                    "<div class=\"toc-category\">\n\
                     <h3 class=\"category-name\">{}</h3>\n\
                     <span class=\"category-page\">Page {page}</span>\n</div>\n\
                     <div class=\"toc-products\">\n",
                    escape(name)
                );
                wrapper_open = true;
            }
            TocItem::Product {
                code,
                name,
                material,
                wholesale_price,
                ..
            } => {
                let _ = write!(
                    html,
                    "<div class=\"toc-product-row\">\n\
                     <span class=\"product-sku\">{}</span>\n\
                     <span class=\"product-name\">{}</span>\n\
                     <span class=\"product-material\">{}</span>\n\
                     <span class=\"product-price\">${}</span>\n</div>\n",
                    escape(code),
                    escape(name),
                    escape(material),
                    format_price(*wholesale_price)
                );
            }
        }
    }

    if wrapper_open {
        html.push_str("</div>\n");
    }
    html
}

fn render_category_page(
    name: &str,
    section_page: usize,
    products: &[Product],
    page_number: usize,
) -> String {
    let mut cards = String::new();
    for product in products {
        cards.push_str(&render_product_card(product));
    }

    format!(
        "<div class=\"category-section\" data-category=\"{}\" data-section-page=\"{section_page}\">\n\
         <div class=\"catalog-header\">\n\
         <h2 class=\"category-title\">{}, page {section_page}</h2>\n</div>\n\
         <div class=\"catalog-body\">\n<div class=\"product-grid\">\n{cards}</div>\n</div>\n\
         <div class=\"catalog-footer\">\n<p class=\"page-number\">{page_number}</p>\n</div>\n\
         </div>\n",
        escape_attr(name),
        escape(name)
    )
}

fn render_product_card(product: &Product) -> String {
    let mut html = format!(
        "<div class=\"linesheet-product-card\" data-sku=\"{}\">\n",
        escape_attr(&product.code)
    );

    if let Some(image) = product.primary_image() {
        let _ = write!(
            html,
            "<div class=\"product-image-container\">\n\
             <img src=\"{}\" alt=\"{} product image\" class=\"product-image\" loading=\"lazy\" />\n\
             </div>\n",
            escape_attr(&image.url),
            escape_attr(&product.name)
        );
    }

    let _ = write!(
        html,
        "<div class=\"product-info\">\n<div class=\"product-details\">\n\
         <p class=\"product-code\">{}</p>\n\
         <h4 class=\"product-name\">{}</h4>\n",
        escape(&product.code),
        escape(&product.name)
    );
    if let Some(material) = product.material.as_deref().filter(|m| !m.is_empty()) {
        let _ = write!(html, "<p class=\"product-material\">{}</p>\n", escape(material));
    }
    let _ = write!(
        html,
        "</div>\n<div class=\"product-price\">${}</div>\n</div>\n</div>\n",
        format_price(product.wholesale_price)
    );
    html
}
