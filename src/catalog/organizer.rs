//! Grouping a flat product list into the organized catalog structure

use crate::catalog::category::{canonical_display_name, CategoryGroup, MaterialGroup};
use crate::catalog::product::Product;
use log::debug;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Summary of one category, derived alongside the full summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub name: String,
    pub count: usize,
    pub value: f64,
    pub materials: Vec<String>,
}

/// Aggregate statistics over the whole organized catalog.
///
/// Always derived from the category groups; never stored independently of
/// them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogSummary {
    pub total_categories: usize,
    pub total_products: usize,
    pub total_wholesale_value: f64,
    /// 0 when the catalog has no products
    pub average_wholesale_price: f64,
    pub categories: Vec<CategoryStats>,
}

impl CatalogSummary {
    /// Summary of an empty catalog.
    pub fn empty() -> Self {
        Self {
            total_categories: 0,
            total_products: 0,
            total_wholesale_value: 0.0,
            average_wholesale_price: 0.0,
            categories: Vec::new(),
        }
    }
}

/// Wholesale price range of one category, over products with a positive
/// price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPriceRange {
    pub category: String,
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

/// The organizer's output: ordered category groups plus their summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizedCatalog {
    pub categories: Vec<CategoryGroup>,
    pub summary: CatalogSummary,
}

/// Group products by category, then by material within each category.
///
/// Pure function of its input. Categories and materials appear in
/// first-seen order; products within each group are stably sorted by
/// code. The input is taken as-is; callers filter by `active` first
/// (see [`crate::catalog::filter_active`]). An empty input yields zero
/// categories and a zero-valued summary.
pub fn organize(products: &[Product]) -> OrganizedCatalog {
    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    let mut names: Vec<String> = Vec::new();
    let mut buckets: Vec<Vec<Product>> = Vec::new();

    for product in products {
        let key = product.category_key();
        let slot = match index.get(key) {
            Some(&slot) => slot,
            None => {
                let slot = buckets.len();
                index.insert(key.to_string(), slot);
                names.push(key.to_string());
                buckets.push(Vec::new());
                slot
            }
        };
        buckets[slot].push(product.clone());
    }

    let categories: Vec<CategoryGroup> = names
        .into_iter()
        .zip(buckets)
        .map(|(name, mut bucket)| {
            // Stable: products with equal codes keep input order
            bucket.sort_by(|a, b| a.code.cmp(&b.code));
            let materials = group_by_material(&bucket);
            CategoryGroup {
                display_name: canonical_display_name(&name),
                name,
                products: bucket,
                materials,
            }
        })
        .collect();

    let summary = summarize(&categories);
    debug!(
        "organized {} products into {} categories",
        products.len(),
        categories.len()
    );

    OrganizedCatalog { categories, summary }
}

/// Partition an already code-sorted product list by material key, in
/// first-seen order. Sub-lists inherit the code ordering.
fn group_by_material(products: &[Product]) -> Vec<MaterialGroup> {
    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    let mut groups: Vec<MaterialGroup> = Vec::new();

    for product in products {
        let key = product.material_key();
        let slot = match index.get(key) {
            Some(&slot) => slot,
            None => {
                let slot = groups.len();
                index.insert(key.to_string(), slot);
                groups.push(MaterialGroup {
                    name: key.to_string(),
                    products: Vec::new(),
                });
                slot
            }
        };
        groups[slot].products.push(product.clone());
    }

    groups
}

/// Compute the catalog summary from the category groups.
fn summarize(categories: &[CategoryGroup]) -> CatalogSummary {
    let total_products: usize = categories.iter().map(|c| c.product_count()).sum();
    let total_value: f64 = categories.iter().map(|c| c.total_wholesale_value()).sum();

    CatalogSummary {
        total_categories: categories.len(),
        total_products,
        total_wholesale_value: total_value,
        average_wholesale_price: if total_products > 0 {
            total_value / total_products as f64
        } else {
            0.0
        },
        categories: categories
            .iter()
            .map(|c| CategoryStats {
                name: c.name.clone(),
                count: c.product_count(),
                value: c.total_wholesale_value(),
                materials: c.material_names(),
            })
            .collect(),
    }
}

/// Wholesale price ranges per category, skipping categories with no
/// positively-priced products.
pub fn price_ranges(categories: &[CategoryGroup]) -> Vec<CategoryPriceRange> {
    categories
        .iter()
        .filter_map(|group| {
            let prices: Vec<f64> = group
                .products
                .iter()
                .map(|p| p.wholesale_price)
                .filter(|&p| p > 0.0)
                .collect();
            if prices.is_empty() {
                return None;
            }
            let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
            let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let average = prices.iter().sum::<f64>() / prices.len() as f64;
            Some(CategoryPriceRange {
                category: group.name.clone(),
                min,
                max,
                average,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::SmallVec;

    fn product(code: &str, category: Option<&str>, material: Option<&str>, price: f64) -> Product {
        Product {
            code: code.to_string(),
            name: format!("Product {code}"),
            material: material.map(str::to_string),
            category: category.map(str::to_string),
            wholesale_price: price,
            active: true,
            images: SmallVec::new(),
        }
    }

    #[test]
    fn test_empty_input() {
        let catalog = organize(&[]);
        assert!(catalog.categories.is_empty());
        assert_eq!(catalog.summary, CatalogSummary::empty());
    }

    #[test]
    fn test_every_product_lands_in_exactly_one_group() {
        let products = vec![
            product("N-1", Some("Necklaces"), Some("Brass"), 20.0),
            product("R-2", Some("Rings"), Some("Silver"), 30.0),
            product("R-1", Some("Rings"), None, 25.0),
            product("X-1", None, Some("Silver"), 5.0),
        ];
        let catalog = organize(&products);

        let total: usize = catalog.categories.iter().map(|c| c.product_count()).sum();
        assert_eq!(total, products.len());

        // Per-category, the material partition covers every product once
        for group in &catalog.categories {
            let by_material: usize = group.materials.iter().map(|m| m.product_count()).sum();
            assert_eq!(by_material, group.product_count());
            for material in &group.materials {
                for p in &material.products {
                    assert_eq!(p.material_key(), material.name);
                    assert_eq!(p.category_key(), group.name);
                }
            }
        }
    }

    #[test]
    fn test_first_seen_category_order() {
        let products = vec![
            product("N-1", Some("Necklaces"), None, 1.0),
            product("R-1", Some("Rings"), None, 1.0),
            product("N-2", Some("Necklaces"), None, 1.0),
        ];
        let catalog = organize(&products);
        let names: Vec<&str> = catalog.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Necklaces", "Rings"]);
    }

    #[test]
    fn test_default_keys() {
        let products = vec![
            product("A", None, None, 1.0),
            product("B", Some(""), Some(""), 1.0),
        ];
        let catalog = organize(&products);
        assert_eq!(catalog.categories.len(), 1);
        assert_eq!(catalog.categories[0].name, "Uncategorized");
        assert_eq!(catalog.categories[0].materials.len(), 1);
        assert_eq!(catalog.categories[0].materials[0].name, "Other");
    }

    #[test]
    fn test_products_sorted_by_code_within_groups() {
        let products = vec![
            product("R-9", Some("Rings"), Some("Silver"), 1.0),
            product("R-1", Some("Rings"), Some("Silver"), 1.0),
            product("R-5", Some("Rings"), Some("Silver"), 1.0),
        ];
        let catalog = organize(&products);
        let codes: Vec<&str> = catalog.categories[0]
            .products
            .iter()
            .map(|p| p.code.as_str())
            .collect();
        assert_eq!(codes, ["R-1", "R-5", "R-9"]);

        let silver = catalog.categories[0].material("Silver").unwrap();
        let material_codes: Vec<&str> = silver.products.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(material_codes, ["R-1", "R-5", "R-9"]);
    }

    #[test]
    fn test_summary() {
        let products = vec![
            product("R-1", Some("Rings"), Some("Silver"), 10.0),
            product("R-2", Some("Rings"), Some("Brass"), 30.0),
            product("N-1", Some("Necklaces"), Some("Silver"), 20.0),
        ];
        let catalog = organize(&products);
        let summary = &catalog.summary;

        assert_eq!(summary.total_categories, 2);
        assert_eq!(summary.total_products, 3);
        assert_eq!(summary.total_wholesale_value, 60.0);
        assert_eq!(summary.average_wholesale_price, 20.0);
        assert_eq!(summary.categories.len(), 2);
        assert_eq!(summary.categories[0].name, "Rings");
        assert_eq!(summary.categories[0].count, 2);
        assert_eq!(summary.categories[0].value, 40.0);
        assert_eq!(summary.categories[0].materials, vec!["Silver", "Brass"]);
    }

    #[test]
    fn test_duplicate_codes_produce_duplicate_rows() {
        let products = vec![
            product("R-1", Some("Rings"), None, 10.0),
            product("R-1", Some("Rings"), None, 12.0),
        ];
        let catalog = organize(&products);
        assert_eq!(catalog.categories[0].product_count(), 2);
        // Stable sort keeps input order for the duplicated code
        assert_eq!(catalog.categories[0].products[0].wholesale_price, 10.0);
        assert_eq!(catalog.categories[0].products[1].wholesale_price, 12.0);
    }

    #[test]
    fn test_price_ranges_skip_unpriced() {
        let products = vec![
            product("R-1", Some("Rings"), None, 10.0),
            product("R-2", Some("Rings"), None, 30.0),
            product("Z-1", Some("Samples"), None, 0.0),
        ];
        let catalog = organize(&products);
        let ranges = price_ranges(&catalog.categories);

        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].category, "Rings");
        assert_eq!(ranges[0].min, 10.0);
        assert_eq!(ranges[0].max, 30.0);
        assert_eq!(ranges[0].average, 20.0);
    }

    #[test]
    fn test_organize_is_deterministic() {
        let products = vec![
            product("R-2", Some("Rings"), Some("Silver"), 30.0),
            product("N-1", Some("Necklaces"), Some("Brass"), 20.0),
            product("R-1", Some("Rings"), None, 25.0),
        ];
        assert_eq!(organize(&products), organize(&products));
    }
}
