//! # Storage Traits
//!
//! Read-only access to the shop's catalog, client list and report figures.

use anyhow::Result;
use shared::{
    BusinessMetrics, CategoryShare, Client, LowStockEntry, MonthlyEarnings, Product, Receivable,
    SalesPoint,
};

/// Trait defining the interface for business data lookups
///
/// Implementations own the data; callers receive copies and never mutate the
/// source through this interface.
pub trait DataSource: Send + Sync {
    /// All catalog products in display order
    fn products(&self) -> Result<Vec<Product>>;

    /// All clients in display order
    fn clients(&self) -> Result<Vec<Client>>;

    /// Monthly earnings, oldest month first
    fn monthly_earnings(&self) -> Result<Vec<MonthlyEarnings>>;

    /// Headline dashboard figures
    fn business_metrics(&self) -> Result<BusinessMetrics>;

    /// Items flagged on the low stock report
    fn low_stock_report(&self) -> Result<Vec<LowStockEntry>>;

    /// Outstanding client balances
    fn receivables(&self) -> Result<Vec<Receivable>>;

    /// Monthly sales against target, oldest month first
    fn sales(&self) -> Result<Vec<SalesPoint>>;

    /// Inventory value split by category
    fn inventory_value_shares(&self) -> Result<Vec<CategoryShare>>;
}
