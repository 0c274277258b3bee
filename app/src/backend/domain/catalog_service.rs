//! Catalog domain logic: product lookup, search and stock status.

use std::sync::Arc;

use anyhow::Result;
use log::info;
use shared::{Language, Product, StockStatus};

use crate::backend::storage::DataSource;

/// Catalog service backed by a read-only data source
#[derive(Clone)]
pub struct CatalogService {
    source: Arc<dyn DataSource>,
}

impl CatalogService {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    pub fn list_products(&self) -> Result<Vec<Product>> {
        self.source.products()
    }

    pub fn find_product(&self, product_id: &str) -> Result<Option<Product>> {
        Ok(self
            .source
            .products()?
            .into_iter()
            .find(|product| product.id == product_id))
    }

    /// Products whose name in `language` contains `query`, ignoring case.
    /// An empty query matches everything.
    pub fn search(&self, query: &str, language: Language) -> Result<Vec<Product>> {
        let needle = query.trim().to_lowercase();
        let products = self.source.products()?;
        if needle.is_empty() {
            return Ok(products);
        }

        let matches: Vec<Product> = products
            .into_iter()
            .filter(|product| product.display_name(language).to_lowercase().contains(&needle))
            .collect();
        info!("🔍 Product search '{}' ({}) matched {}", needle, language, matches.len());
        Ok(matches)
    }

    /// Out at zero, low at or below the product's threshold
    pub fn stock_status(product: &Product) -> StockStatus {
        if product.stock == 0 {
            StockStatus::Out
        } else if product.stock <= product.low_stock_threshold {
            StockStatus::Low
        } else {
            StockStatus::Good
        }
    }

    /// Products at or below their threshold, out-of-stock included
    pub fn low_stock_products(&self) -> Result<Vec<Product>> {
        Ok(self
            .source
            .products()?
            .into_iter()
            .filter(|product| product.stock <= product.low_stock_threshold)
            .collect())
    }
}
