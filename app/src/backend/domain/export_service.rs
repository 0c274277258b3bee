//! Export service domain logic for the business manager.
//!
//! Writes the catalog and client list as CSV and the current invoice as pretty
//! JSON. Files land in the configured export directory, or the user's
//! documents folder when none is configured, and are named
//! `<kind>_<yyyymmdd>.<ext>`.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use log::{error, info};
use serde::Serialize;
use shared::{Client, Invoice, Product, StockStatus};
use thiserror::Error;

use crate::backend::domain::catalog_service::CatalogService;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Could not determine an export directory")]
    NoExportDirectory,
    #[error("Nothing to export: the invoice has no items")]
    EmptyInvoice,
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// What gets exported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Inventory,
    Clients,
    Invoice,
}

impl ExportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::Inventory => "inventory",
            ExportKind::Clients => "clients",
            ExportKind::Invoice => "invoice",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportKind::Inventory | ExportKind::Clients => "csv",
            ExportKind::Invoice => "json",
        }
    }

    /// `<kind>_<yyyymmdd>.<ext>`
    pub fn file_name(&self, on: NaiveDate) -> String {
        format!("{}_{}.{}", self.as_str(), on.format("%Y%m%d"), self.extension())
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an export ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub kind: ExportKind,
    pub file_path: PathBuf,
    pub record_count: usize,
}

#[derive(Serialize)]
struct InventoryRow<'a> {
    id: &'a str,
    name: &'a str,
    name_hi: &'a str,
    category: &'a str,
    stock: u32,
    price: u64,
    low_stock_threshold: u32,
    status: &'static str,
}

#[derive(Serialize)]
struct ClientRow<'a> {
    id: &'a str,
    name: &'a str,
    phone: &'a str,
    city: &'a str,
    outstanding: u64,
    total_orders: u32,
    last_order: &'a str,
}

/// Export service that writes shop data to files
#[derive(Debug, Clone, Default)]
pub struct ExportService {
    export_dir: Option<PathBuf>,
}

impl ExportService {
    pub fn new() -> Self {
        Self { export_dir: None }
    }

    /// Always export into `dir` instead of the documents folder
    pub fn with_export_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: Some(dir.into()),
        }
    }

    /// Configured directory, else documents, else home
    pub fn resolve_export_dir(&self) -> Result<PathBuf, ExportError> {
        if let Some(dir) = &self.export_dir {
            return Ok(PathBuf::from(sanitize_path(&dir.to_string_lossy())));
        }
        dirs::document_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| {
                error!("❌ EXPORT: Could not determine default export directory");
                ExportError::NoExportDirectory
            })
    }

    pub fn export_inventory(&self, products: &[Product]) -> Result<ExportOutcome, ExportError> {
        self.export_inventory_on(products, Local::now().date_naive())
    }

    pub fn export_inventory_on(
        &self,
        products: &[Product],
        on: NaiveDate,
    ) -> Result<ExportOutcome, ExportError> {
        info!("📄 EXPORT: Writing {} products", products.len());
        let mut writer = csv::Writer::from_writer(Vec::new());
        for product in products {
            writer.serialize(InventoryRow {
                id: &product.id,
                name: &product.name,
                name_hi: &product.name_hi,
                category: &product.category,
                stock: product.stock,
                price: product.price,
                low_stock_threshold: product.low_stock_threshold,
                status: stock_status_name(CatalogService::stock_status(product)),
            })?;
        }
        let bytes = finish_csv(writer)?;
        self.write_file(ExportKind::Inventory, on, &bytes, products.len())
    }

    pub fn export_clients(&self, clients: &[Client]) -> Result<ExportOutcome, ExportError> {
        self.export_clients_on(clients, Local::now().date_naive())
    }

    pub fn export_clients_on(
        &self,
        clients: &[Client],
        on: NaiveDate,
    ) -> Result<ExportOutcome, ExportError> {
        info!("📄 EXPORT: Writing {} clients", clients.len());
        let mut writer = csv::Writer::from_writer(Vec::new());
        for client in clients {
            writer.serialize(ClientRow {
                id: &client.id,
                name: &client.name,
                phone: &client.phone,
                city: &client.city,
                outstanding: client.outstanding,
                total_orders: client.total_orders,
                last_order: &client.last_order,
            })?;
        }
        let bytes = finish_csv(writer)?;
        self.write_file(ExportKind::Clients, on, &bytes, clients.len())
    }

    /// Write the invoice as pretty JSON, dated by its issue date
    pub fn export_invoice(&self, invoice: &Invoice) -> Result<ExportOutcome, ExportError> {
        if invoice.lines.is_empty() {
            return Err(ExportError::EmptyInvoice);
        }
        info!("📄 EXPORT: Writing invoice {}", invoice.number);
        let json = serde_json::to_vec_pretty(invoice)?;
        self.write_file(ExportKind::Invoice, invoice.issue_date, &json, invoice.lines.len())
    }

    fn write_file(
        &self,
        kind: ExportKind,
        on: NaiveDate,
        contents: &[u8],
        record_count: usize,
    ) -> Result<ExportOutcome, ExportError> {
        let dir = self.resolve_export_dir()?;
        fs::create_dir_all(&dir).map_err(|source| io_error(&dir, source))?;

        let file_path = dir.join(kind.file_name(on));
        fs::write(&file_path, contents).map_err(|source| io_error(&file_path, source))?;

        info!(
            "✅ EXPORT: Exported {} {} records to {}",
            record_count,
            kind,
            file_path.display()
        );
        Ok(ExportOutcome {
            kind,
            file_path,
            record_count,
        })
    }
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>, ExportError> {
    writer
        .into_inner()
        .map_err(|e| ExportError::Csv(csv::Error::from(e.into_error())))
}

fn io_error(path: &Path, source: std::io::Error) -> ExportError {
    error!("❌ EXPORT: Failed to write {:?}: {}", path, source);
    ExportError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn stock_status_name(status: StockStatus) -> &'static str {
    match status {
        StockStatus::Good => "good",
        StockStatus::Low => "low",
        StockStatus::Out => "out",
    }
}

/// Clean up a user-typed directory: quotes, escaped spaces, trailing slashes, `~`
pub fn sanitize_path(path: &str) -> String {
    let mut cleaned = path.trim();
    let quoted = cleaned.len() >= 2
        && ((cleaned.starts_with('"') && cleaned.ends_with('"'))
            || (cleaned.starts_with('\'') && cleaned.ends_with('\'')));
    if quoted {
        cleaned = cleaned[1..cleaned.len() - 1].trim();
    }

    let mut cleaned = cleaned.replace("\\ ", " ");
    while cleaned.len() > 1 && (cleaned.ends_with('/') || cleaned.ends_with('\\')) {
        cleaned.pop();
    }

    if cleaned == "~" || cleaned.starts_with("~/") || cleaned.starts_with("~\\") {
        if let Some(home) = dirs::home_dir() {
            return match cleaned.get(2..) {
                Some(rest) if !rest.is_empty() => home.join(rest).to_string_lossy().to_string(),
                _ => home.to_string_lossy().to_string(),
            };
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::invoice_service::InvoiceService;
    use crate::backend::domain::models::Cart;
    use crate::backend::storage::{DataSource, MockDataSource};
    use tempfile::TempDir;

    fn create_test_service() -> (ExportService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let service = ExportService::with_export_dir(temp_dir.path());
        (service, temp_dir)
    }

    fn export_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    #[test]
    fn test_file_names() {
        assert_eq!(ExportKind::Inventory.file_name(export_date()), "inventory_20240307.csv");
        assert_eq!(ExportKind::Clients.file_name(export_date()), "clients_20240307.csv");
        assert_eq!(ExportKind::Invoice.file_name(export_date()), "invoice_20240307.json");
    }

    #[test]
    fn test_export_inventory_csv() {
        let (service, temp_dir) = create_test_service();
        let products = MockDataSource::new().products().unwrap();

        let outcome = service.export_inventory_on(&products, export_date()).unwrap();

        assert_eq!(outcome.record_count, 6);
        assert_eq!(outcome.file_path, temp_dir.path().join("inventory_20240307.csv"));
        let content = fs::read_to_string(&outcome.file_path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "id,name,name_hi,category,stock,price,low_stock_threshold,status"
        );
        assert_eq!(content.lines().count(), 7);
        assert!(content.contains("3,Cooking Oil 1L,"));
        assert!(content.contains(",0,140,5,out"));
    }

    #[test]
    fn test_export_clients_csv() {
        let (service, _temp_dir) = create_test_service();
        let clients = MockDataSource::new().clients().unwrap();

        let outcome = service.export_clients_on(&clients, export_date()).unwrap();

        let content = fs::read_to_string(&outcome.file_path).unwrap();
        assert!(content.starts_with("id,name,phone,city,outstanding,total_orders,last_order"));
        assert!(content.contains("4,City Wholesale,+91 65432 10987,Pune,22000,45,1 day ago"));
    }

    #[test]
    fn test_export_invoice_json() {
        let (service, _temp_dir) = create_test_service();
        let mut cart = Cart::new();
        cart.add_item("1", 650, "Rice Bag 10kg");
        cart.set_quantity("1", 2);
        let invoice = InvoiceService::default().build_invoice(&cart, None, None);

        let outcome = service.export_invoice(&invoice).unwrap();

        let json = fs::read_to_string(&outcome.file_path).unwrap();
        let parsed: Invoice = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, invoice);
        assert_eq!(outcome.kind, ExportKind::Invoice);
    }

    #[test]
    fn test_empty_invoice_is_rejected() {
        let (service, temp_dir) = create_test_service();
        let invoice = InvoiceService::default().build_invoice(&Cart::new(), None, None);

        let result = service.export_invoice(&invoice);

        assert!(matches!(result, Err(ExportError::EmptyInvoice)));
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_directory_is_created() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("exports").join("march");
        let service = ExportService::with_export_dir(&nested);

        let outcome = service.export_clients_on(&[], export_date()).unwrap();

        assert!(outcome.file_path.starts_with(&nested));
        assert!(outcome.file_path.exists());
    }

    #[test]
    fn test_sanitize_path() {
        let home = dirs::home_dir().unwrap();
        let expected_documents = home.join("Documents").to_string_lossy().to_string();

        assert_eq!(sanitize_path("\"~/Documents\""), expected_documents);
        assert_eq!(sanitize_path("'~/Documents'"), expected_documents);
        assert_eq!(sanitize_path("  /path/to/dir  "), "/path/to/dir");
        assert_eq!(sanitize_path("/path\\ to\\ dir"), "/path to dir");
        assert_eq!(sanitize_path("/path/to/dir/"), "/path/to/dir");
        assert_eq!(sanitize_path("/"), "/");
    }
}
