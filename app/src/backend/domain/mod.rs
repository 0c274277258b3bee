//! # Domain Module
//!
//! Business logic for the shop: pricing and invoices, catalog and client
//! lookups, report figures, profile forms, label tables and exports.
//!
//! Services are synchronous and hold no session state; the UI layer owns the
//! session and passes carts and profiles in.

pub mod catalog_service;
pub mod client_service;
pub mod export_service;
pub mod invoice_service;
pub mod labels;
pub mod models;
pub mod order_service;
pub mod report_service;

pub use catalog_service::CatalogService;
pub use client_service::{ClientService, ClientStats};
pub use export_service::{ExportError, ExportKind, ExportOutcome, ExportService};
pub use invoice_service::InvoiceService;
pub use labels::{LabelError, LabelKey, Labels};
pub use order_service::{OrderService, PricingConfig};
pub use report_service::{EarningsGrowth, ReportService};
