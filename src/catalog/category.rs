//! Category and material groupings

use crate::catalog::product::Product;
use serde::Serialize;

/// Canonical display form of a category name.
///
/// Known singular/plural jewelry categories map to a fixed uppercase
/// plural; anything else is uppercased as-is. Display only: grouping
/// always uses the raw category string.
pub fn canonical_display_name(raw: &str) -> String {
    match raw {
        "Ring" | "Rings" => "RINGS".to_string(),
        "Necklace" | "Necklaces" => "NECKLACES".to_string(),
        "Earring" | "Earrings" => "EARRINGS".to_string(),
        "Bracelet" | "Bracelets" => "BRACELETS".to_string(),
        other => other.to_uppercase(),
    }
}

/// Products of one material within a category, ordered by code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialGroup {
    pub name: String,
    pub products: Vec<Product>,
}

impl MaterialGroup {
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Total wholesale value, recomputed from the membership.
    pub fn total_wholesale_value(&self) -> f64 {
        self.products.iter().map(|p| p.wholesale_price).sum()
    }
}

/// One category of the organized catalog.
///
/// `products` is ordered by code; `materials` partitions the same
/// products by material key, in first-seen order. Count and value are
/// derived accessors so they can never drift from the membership.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup {
    /// Raw grouping key
    pub name: String,
    /// Canonical display form, see [`canonical_display_name`]
    pub display_name: String,
    pub products: Vec<Product>,
    pub materials: Vec<MaterialGroup>,
}

impl CategoryGroup {
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Total wholesale value, recomputed from the membership.
    pub fn total_wholesale_value(&self) -> f64 {
        self.products.iter().map(|p| p.wholesale_price).sum()
    }

    /// Look up a material sub-list by name.
    pub fn material(&self, name: &str) -> Option<&MaterialGroup> {
        self.materials.iter().find(|m| m.name == name)
    }

    /// Material names in first-seen order.
    pub fn material_names(&self) -> Vec<String> {
        self.materials.iter().map(|m| m.name.clone()).collect()
    }
}
