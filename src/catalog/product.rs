//! Product records as supplied by the upstream data provider

use crate::error::Error;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Grouping key used when a product has no category set.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Grouping key used when a product has no material set.
pub const DEFAULT_MATERIAL: &str = "Other";

/// An image attached to a product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// A single product record.
///
/// Field aliases match the names the upstream field mapper emits, so both
/// `{"sku": ..}` and `{"productCode": ..}` shaped records deserialize.
/// Codes are unique per catalog run by convention only; duplicates are
/// accepted and simply produce duplicate rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// SKU / product code
    #[serde(alias = "sku", alias = "productCode")]
    pub code: String,
    /// Display name
    #[serde(alias = "productName")]
    pub name: String,
    /// Material, if set
    #[serde(default)]
    pub material: Option<String>,
    /// Category, if set
    #[serde(default)]
    pub category: Option<String>,
    /// Wholesale price, non-negative
    #[serde(default)]
    pub wholesale_price: f64,
    /// Only active products enter the catalog
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub images: SmallVec<[ProductImage; 1]>,
}

impl Product {
    /// The category grouping key, defaulting when absent or empty.
    pub fn category_key(&self) -> &str {
        match self.category.as_deref() {
            Some(category) if !category.is_empty() => category,
            _ => DEFAULT_CATEGORY,
        }
    }

    /// The material grouping key, defaulting when absent or empty.
    pub fn material_key(&self) -> &str {
        match self.material.as_deref() {
            Some(material) if !material.is_empty() => material,
            _ => DEFAULT_MATERIAL,
        }
    }

    /// First attached image, if any.
    pub fn primary_image(&self) -> Option<&ProductImage> {
        self.images.first()
    }
}

/// Sort order for product lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Lexicographic by product code (the catalog default)
    #[default]
    Sku,
    /// Lexicographic by display name
    Name,
    /// Ascending by wholesale price
    Price,
    /// Descending by wholesale price
    PriceDesc,
}

/// Return a sorted copy of `products`. The sort is stable: equal keys keep
/// their input order.
pub fn sort_products(products: &[Product], key: SortKey) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match key {
        SortKey::Sku => sorted.sort_by(|a, b| a.code.cmp(&b.code)),
        SortKey::Name => sorted.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Price => {
            sorted.sort_by(|a, b| a.wholesale_price.total_cmp(&b.wholesale_price))
        }
        SortKey::PriceDesc => {
            sorted.sort_by(|a, b| b.wholesale_price.total_cmp(&a.wholesale_price))
        }
    }
    sorted
}

/// Keep only active products.
///
/// Filtering is a mandatory explicit step before organizing: the organizer
/// itself never inspects the `active` flag.
pub fn filter_active(products: &[Product]) -> Vec<Product> {
    products.iter().filter(|p| p.active).cloned().collect()
}

/// Parse a JSON array of product records.
///
/// This is the boundary where host input is validated: malformed JSON or a
/// JSON value that is not an array fails with [`Error::InvalidInput`].
pub fn parse_products(json: &str) -> Result<Vec<Product>, Error> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| Error::InvalidInput(e.to_string()))?;
    if !value.is_array() {
        return Err(Error::InvalidInput(
            "expected a JSON array of products".to_string(),
        ));
    }
    serde_json::from_value(value).map_err(|e| Error::InvalidInput(e.to_string()))
}
