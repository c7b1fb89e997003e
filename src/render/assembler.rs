//! Assembling the ordered page sequence from catalog and page map

use crate::catalog::CategoryGroup;
use crate::error::Error;
use crate::layout::PageMap;
use crate::render::page::PageDescriptor;
use log::debug;

/// Zip the organized categories and the page map into the full ordered
/// page sequence: cover, TOC pages, then category pages.
///
/// Emitted page numbers are the contiguous run `1..=total`. The map must
/// have been planned from exactly these categories; any disagreement
/// (a category without a placement, a placement for a category that is
/// not present, or page counts that do not line up) fails with
/// [`Error::Inconsistent`] rather than emitting wrong page numbers.
pub fn assemble(
    categories: &[CategoryGroup],
    map: &PageMap,
) -> Result<Vec<PageDescriptor>, Error> {
    let non_empty: Vec<&CategoryGroup> = categories.iter().filter(|c| !c.is_empty()).collect();
    if map.placements().len() != non_empty.len() {
        return Err(Error::Inconsistent(format!(
            "page map covers {} categories, input has {}",
            map.placements().len(),
            non_empty.len()
        )));
    }

    let mut pages = Vec::with_capacity(map.total_pages());
    pages.push(PageDescriptor::Cover { page_number: 1 });
    let mut next_page = 2;

    for (i, items) in map.toc_pages().iter().enumerate() {
        pages.push(PageDescriptor::Toc {
            index: i + 1,
            items: items.clone(),
            page_number: next_page,
        });
        next_page += 1;
    }

    let products_per_page = map.options().products_per_page;
    for group in non_empty {
        let placement = map.placement(&group.name).ok_or_else(|| {
            Error::Inconsistent(format!("category {:?} has no placement", group.name))
        })?;
        if placement.start_page != next_page {
            return Err(Error::Inconsistent(format!(
                "category {:?} was planned to start on page {}, assembly reached page {}",
                group.name, placement.start_page, next_page
            )));
        }

        let chunks = group.products.chunks(products_per_page);
        if chunks.len() != placement.page_count {
            return Err(Error::Inconsistent(format!(
                "category {:?} fills {} pages, page map allots {}",
                group.name,
                group.products.chunks(products_per_page).len(),
                placement.page_count
            )));
        }

        for (section, chunk) in chunks.enumerate() {
            pages.push(PageDescriptor::Category {
                name: group.display_name.clone(),
                section_page: section + 1,
                products: chunk.to_vec(),
                page_number: next_page,
            });
            next_page += 1;
        }
    }

    if pages.len() != map.total_pages() {
        return Err(Error::Inconsistent(format!(
            "assembled {} pages, page map expected {}",
            pages.len(),
            map.total_pages()
        )));
    }

    debug!("assembled {} pages", pages.len());
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{organize, Product};
    use crate::layout::{plan, PlannerOptions, TocItem};
    use smallvec::SmallVec;

    fn product(code: &str, category: &str) -> Product {
        Product {
            code: code.to_string(),
            name: format!("Product {code}"),
            material: Some("Silver".to_string()),
            category: Some(category.to_string()),
            wholesale_price: 32.0,
            active: true,
            images: SmallVec::new(),
        }
    }

    fn products(count: usize, category: &str) -> Vec<Product> {
        (0..count)
            .map(|i| product(&format!("{category}-{i:03}"), category))
            .collect()
    }

    fn assemble_catalog(products: &[Product]) -> Vec<PageDescriptor> {
        let catalog = organize(products);
        let map = plan(&catalog.categories, &PlannerOptions::default()).unwrap();
        assemble(&catalog.categories, &map).unwrap()
    }

    #[test]
    fn test_page_numbers_are_contiguous() {
        let mut all = products(5, "Rings");
        all.extend(products(11, "Necklaces"));
        all.extend(products(2, "Earrings"));
        let pages = assemble_catalog(&all);

        for (i, page) in pages.iter().enumerate() {
            assert_eq!(page.page_number(), i + 1);
        }
        // 1 cover + 1 TOC (21 items) + 2 + 3 + 1 category pages
        assert_eq!(pages.len(), 8);
    }

    #[test]
    fn test_five_products_one_category() {
        // 1 cover + 1 TOC page + 2 category pages (4 + 1 products)
        let pages = assemble_catalog(&products(5, "Rings"));
        assert_eq!(pages.len(), 4);
        assert_eq!(pages[0], PageDescriptor::Cover { page_number: 1 });

        let PageDescriptor::Toc { index, items, page_number } = &pages[1] else {
            panic!("page 2 should be the TOC");
        };
        assert_eq!((*index, *page_number), (1, 2));
        assert_eq!(items.len(), 6);

        let PageDescriptor::Category { name, section_page, products, page_number } = &pages[2]
        else {
            panic!("page 3 should be a category page");
        };
        assert_eq!(name, "RINGS");
        assert_eq!((*section_page, *page_number), (1, 3));
        assert_eq!(products.len(), 4);

        let PageDescriptor::Category { section_page, products, page_number, .. } = &pages[3]
        else {
            panic!("page 4 should be a category page");
        };
        assert_eq!((*section_page, *page_number), (2, 4));
        assert_eq!(products.len(), 1);
    }

    #[test]
    fn test_empty_catalog_is_cover_only() {
        let pages = assemble_catalog(&[]);
        assert_eq!(pages, vec![PageDescriptor::Cover { page_number: 1 }]);
    }

    #[test]
    fn test_thirty_products_two_toc_pages() {
        // 31 TOC items: 25 + 6 across two TOC pages, then 8 category
        // pages; 11 pages overall
        let pages = assemble_catalog(&products(30, "Rings"));
        assert_eq!(pages.len(), 11);
        assert!(matches!(&pages[1], PageDescriptor::Toc { index: 1, .. }));
        assert!(pages[2].is_toc_continuation());

        let PageDescriptor::Category { page_number, .. } = &pages[3] else {
            panic!("page 4 should be the first category page");
        };
        assert_eq!(*page_number, 4);
    }

    #[test]
    fn test_toc_completeness_and_density() {
        let mut all = products(18, "Rings");
        all.extend(products(14, "Necklaces"));
        let catalog = organize(&all);
        let map = plan(&catalog.categories, &PlannerOptions::default()).unwrap();
        let pages = assemble(&catalog.categories, &map).unwrap();

        let toc_items: Vec<&TocItem> = pages
            .iter()
            .filter_map(|p| match p {
                PageDescriptor::Toc { items, .. } => Some(items.iter()),
                _ => None,
            })
            .flatten()
            .collect();

        // One heading per category plus one row per product
        assert_eq!(toc_items.len(), 2 + 32);
        assert_eq!(toc_items.iter().filter(|i| i.is_category()).count(), 2);

        for page in &pages {
            match page {
                PageDescriptor::Toc { items, .. } => assert!(items.len() <= 25),
                PageDescriptor::Category { products, .. } => assert!(products.len() <= 4),
                PageDescriptor::Cover { .. } => {}
            }
        }
    }

    #[test]
    fn test_mismatched_map_is_rejected() {
        let rings = organize(&products(5, "Rings"));
        let necklaces = organize(&products(5, "Necklaces"));
        let map = plan(&rings.categories, &PlannerOptions::default()).unwrap();

        // Same shape, different category: the placement lookup fails
        assert!(matches!(
            assemble(&necklaces.categories, &map),
            Err(Error::Inconsistent(_))
        ));

        // Different shape: the count check fails
        let empty: Vec<crate::catalog::CategoryGroup> = Vec::new();
        assert!(matches!(
            assemble(&empty, &map),
            Err(Error::Inconsistent(_))
        ));
    }

    #[test]
    fn test_density_mismatch_is_rejected() {
        // Plan with one density, assemble categories grown since: the
        // chunk count no longer matches the placement
        let catalog = organize(&products(4, "Rings"));
        let map = plan(&catalog.categories, &PlannerOptions::default()).unwrap();
        let grown = organize(&products(9, "Rings"));
        assert!(matches!(
            assemble(&grown.categories, &map),
            Err(Error::Inconsistent(_))
        ));
    }

    #[test]
    fn test_assembly_is_idempotent() {
        let all = products(13, "Rings");
        assert_eq!(assemble_catalog(&all), assemble_catalog(&all));
    }
}
