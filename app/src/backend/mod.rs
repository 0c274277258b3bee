//! # Backend Module
//!
//! Direct, synchronous access to the domain services for the terminal shell.
//! There is no IO layer: services read the hard-coded demo data through the
//! [`storage::DataSource`] trait and everything stays in memory.

use anyhow::Result;
use log::info;
use std::sync::Arc;

pub mod domain;
pub mod storage;

pub use storage::{DataSource, MockDataSource};

use crate::config::AppConfig;

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub catalog_service: domain::CatalogService,
    pub client_service: domain::ClientService,
    pub report_service: domain::ReportService,
    pub order_service: domain::OrderService,
    pub invoice_service: domain::InvoiceService,
    pub export_service: domain::ExportService,
    pub labels: domain::Labels,
}

impl Backend {
    /// Create a backend over the demo data
    pub fn new(config: &AppConfig) -> Result<Self> {
        Self::with_source(config, Arc::new(MockDataSource::new()))
    }

    /// Create a backend over any data source
    pub fn with_source(config: &AppConfig, source: Arc<dyn DataSource>) -> Result<Self> {
        let labels = domain::Labels::load()?;

        let order_service = domain::OrderService::with_config(config.pricing());
        let invoice_service = domain::InvoiceService::new(order_service.clone());
        let export_service = match &config.export_dir {
            Some(dir) => domain::ExportService::with_export_dir(dir),
            None => domain::ExportService::new(),
        };

        info!(
            "🚀 Backend ready (tax {}, currency {})",
            order_service.tax_rate_label(),
            config.currency_symbol
        );

        Ok(Backend {
            catalog_service: domain::CatalogService::new(source.clone()),
            client_service: domain::ClientService::new(source.clone()),
            report_service: domain::ReportService::new(source),
            order_service,
            invoice_service,
            export_service,
            labels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_new_uses_config() {
        let config = AppConfig {
            tax_rate_basis_points: 500,
            ..AppConfig::default()
        };
        let backend = Backend::new(&config).unwrap();

        assert_eq!(backend.order_service.tax_rate_label(), "5%");
        assert_eq!(backend.catalog_service.list_products().unwrap().len(), 6);
    }
}
