//! Report and dashboard figures.
//!
//! The numbers themselves come from the data source; this service adds the
//! few derived values the screens need (earnings growth, receivable totals).

use std::sync::Arc;

use anyhow::Result;
use shared::{
    BusinessMetrics, CategoryShare, LowStockEntry, MonthlyEarnings, Receivable, ReceivableStatus,
    SalesPoint,
};

use crate::backend::storage::DataSource;

/// Latest month's earnings compared with the month before
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EarningsGrowth {
    pub month: String,
    pub this_month: u64,
    pub last_month: u64,
    /// Whole percent, rounded half up
    pub growth_percent: i64,
}

#[derive(Clone)]
pub struct ReportService {
    source: Arc<dyn DataSource>,
}

impl ReportService {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    pub fn business_metrics(&self) -> Result<BusinessMetrics> {
        self.source.business_metrics()
    }

    pub fn low_stock_report(&self) -> Result<Vec<LowStockEntry>> {
        self.source.low_stock_report()
    }

    pub fn receivables(&self) -> Result<Vec<Receivable>> {
        self.source.receivables()
    }

    /// Sum of receivables in the given status
    pub fn receivables_total(&self, status: ReceivableStatus) -> Result<u64> {
        Ok(self
            .source
            .receivables()?
            .iter()
            .filter(|r| r.status == status)
            .map(|r| r.amount)
            .fold(0, u64::saturating_add))
    }

    pub fn sales(&self) -> Result<Vec<SalesPoint>> {
        self.source.sales()
    }

    pub fn inventory_value_shares(&self) -> Result<Vec<CategoryShare>> {
        self.source.inventory_value_shares()
    }

    pub fn monthly_earnings(&self) -> Result<Vec<MonthlyEarnings>> {
        self.source.monthly_earnings()
    }

    /// Growth for the most recent month, `None` when there is no earnings data
    pub fn earnings_growth(&self) -> Result<Option<EarningsGrowth>> {
        let earnings = self.source.monthly_earnings()?;
        Ok(earnings.last().map(|latest| EarningsGrowth {
            month: latest.month.clone(),
            this_month: latest.this_month,
            last_month: latest.last_month,
            growth_percent: growth_percent(latest.last_month, latest.this_month),
        }))
    }
}

/// Percent change from `previous` to `current`, rounded half up; 0 without a base
pub fn growth_percent(previous: u64, current: u64) -> i64 {
    if previous == 0 {
        return 0;
    }
    let previous = previous as i128;
    let diff = current as i128 - previous;
    // floor(diff * 100 / previous + 1/2)
    (diff * 200 + previous).div_euclid(previous * 2) as i64
}
