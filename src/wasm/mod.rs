//! WASM bindings for the catalog builder
//!
//! Product data crosses the boundary as JSON strings; bad input is
//! reported as a JS error rather than a panic.

use crate::catalog::parse_products;
use crate::{Linesheet, PlannerOptions};
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js_error(err: crate::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM-exposed catalog builder wrapper
#[wasm_bindgen]
pub struct WasmLinesheet {
    inner: Linesheet,
}

#[wasm_bindgen]
impl WasmLinesheet {
    /// Create an empty builder with default page densities
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: Linesheet::new(),
        }
    }

    /// Replace the product list from a JSON array of product records
    #[wasm_bindgen(js_name = setProductsJson)]
    pub fn set_products_json(&mut self, json: &str) -> Result<(), JsValue> {
        let products = parse_products(json).map_err(to_js_error)?;
        self.inner.set_products(products);
        Ok(())
    }

    /// Override the page densities (products per category page, TOC items
    /// per TOC page)
    #[wasm_bindgen(js_name = setPageDensities)]
    pub fn set_page_densities(
        &mut self,
        products_per_page: usize,
        toc_items_per_page: usize,
    ) -> Result<(), JsValue> {
        self.inner
            .set_planner_options(PlannerOptions {
                products_per_page,
                toc_items_per_page,
            })
            .map_err(to_js_error)
    }

    /// Include inactive products instead of the default active-only view
    #[wasm_bindgen(js_name = setIncludeInactive)]
    pub fn set_include_inactive(&mut self, include_inactive: bool) {
        self.inner.set_include_inactive(include_inactive);
    }

    /// Set the document title shown on the cover
    #[wasm_bindgen(js_name = setTitle)]
    pub fn set_title(&mut self, title: &str) {
        self.inner.set_title(title);
    }

    /// Generate the full document markup
    #[wasm_bindgen(js_name = generateHtml)]
    pub fn generate_html(&mut self) -> Result<String, JsValue> {
        self.inner.generate_html().map_err(to_js_error)
    }

    /// Get the assembled page descriptors as JSON, for hosts that render
    /// their own markup
    #[wasm_bindgen(js_name = getPagesJson)]
    pub fn get_pages_json(&mut self) -> Result<String, JsValue> {
        let pages = self.inner.generate().map_err(to_js_error)?;
        serde_json::to_string(&pages).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get total page count
    #[wasm_bindgen(js_name = getPageCount)]
    pub fn get_page_count(&mut self) -> Result<usize, JsValue> {
        self.inner.page_count().map_err(to_js_error)
    }

    /// Get the catalog summary as JSON
    #[wasm_bindgen(js_name = getSummaryJson)]
    pub fn get_summary_json(&mut self) -> Result<String, JsValue> {
        serde_json::to_string(self.inner.summary())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
