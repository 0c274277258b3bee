//! Hard-coded demo datasets for a small grocery wholesaler.

use anyhow::Result;
use shared::{
    BusinessMetrics, CategoryShare, Client, LowStockEntry, LowStockUrgency, MonthlyEarnings,
    Product, Receivable, ReceivableStatus, SalesPoint,
};

use super::traits::DataSource;

/// In-memory data source built from fixed demo records
#[derive(Debug, Clone)]
pub struct MockDataSource {
    products: Vec<Product>,
    clients: Vec<Client>,
    earnings: Vec<MonthlyEarnings>,
}

impl MockDataSource {
    pub fn new() -> Self {
        Self {
            products: demo_products(),
            clients: demo_clients(),
            earnings: demo_earnings(),
        }
    }

    /// Build a source around a custom catalog, keeping the demo clients and figures
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Self::new()
        }
    }
}

impl Default for MockDataSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DataSource for MockDataSource {
    fn products(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn clients(&self) -> Result<Vec<Client>> {
        Ok(self.clients.clone())
    }

    fn monthly_earnings(&self) -> Result<Vec<MonthlyEarnings>> {
        Ok(self.earnings.clone())
    }

    fn business_metrics(&self) -> Result<BusinessMetrics> {
        Ok(BusinessMetrics {
            total_revenue: 245_000,
            revenue_growth: 10,
            outstanding_amount: 45_000,
            outstanding_change: -5,
            avg_invoice_value: 8_500,
            avg_invoice_growth: 15,
        })
    }

    fn low_stock_report(&self) -> Result<Vec<LowStockEntry>> {
        let entry = |id: &str, name: &str, stock, threshold, value, urgency| LowStockEntry {
            id: id.to_string(),
            name: name.to_string(),
            stock,
            threshold,
            value,
            urgency,
        };
        Ok(vec![
            entry("1", "Dal Moong 1kg", 3, 10, 360, LowStockUrgency::Critical),
            entry("2", "Tea Powder 500g", 5, 15, 900, LowStockUrgency::Low),
            entry("3", "Cooking Oil 1L", 0, 5, 0, LowStockUrgency::Out),
            entry("4", "Wheat Flour 5kg", 8, 20, 2240, LowStockUrgency::Low),
        ])
    }

    fn receivables(&self) -> Result<Vec<Receivable>> {
        let receivable = |client: &str, amount, days, status| Receivable {
            client: client.to_string(),
            amount,
            days,
            status,
        };
        Ok(vec![
            receivable("Raj Kumar Store", 15_000, 45, ReceivableStatus::Overdue),
            receivable("City Wholesale", 22_000, 15, ReceivableStatus::Pending),
            receivable("Modern Retail", 8_500, 30, ReceivableStatus::Pending),
        ])
    }

    fn sales(&self) -> Result<Vec<SalesPoint>> {
        let months = [
            ("Jan", 180_000),
            ("Feb", 220_000),
            ("Mar", 245_000),
            ("Apr", 190_000),
            ("May", 280_000),
            ("Jun", 245_000),
        ];
        Ok(months
            .iter()
            .map(|(month, sales)| SalesPoint {
                month: month.to_string(),
                sales: *sales,
                target: 200_000,
            })
            .collect())
    }

    fn inventory_value_shares(&self) -> Result<Vec<CategoryShare>> {
        let shares = [("Grains", 45), ("Pulses", 25), ("Oil", 15), ("Others", 15)];
        Ok(shares
            .iter()
            .map(|(category, percent)| CategoryShare {
                category: category.to_string(),
                percent: *percent,
            })
            .collect())
    }
}

fn demo_products() -> Vec<Product> {
    let product = |id: &str, name: &str, name_hi: &str, stock, price, category: &str, threshold, image: &str| Product {
        id: id.to_string(),
        name: name.to_string(),
        name_hi: name_hi.to_string(),
        stock,
        price,
        category: category.to_string(),
        low_stock_threshold: threshold,
        image_url: format!("https://images.unsplash.com/{}?w=400", image),
    };
    vec![
        product("1", "Rice Bag 10kg", "चावल बैग 10kg", 45, 650, "Grains", 10, "photo-1536304993881-ff6e9eefa2a6"),
        product("2", "Dal Moong 1kg", "दाल मूंग 1kg", 8, 120, "Pulses", 10, "photo-1583560091784-b0e66a9a0cfc"),
        product("3", "Cooking Oil 1L", "खाना पकाने का तेल 1L", 0, 140, "Oil", 5, "photo-1474979266404-7eaacbcd87c5"),
        product("4", "Sugar 1kg", "चीनी 1kg", 25, 55, "Sweeteners", 10, "photo-1559181567-c3190ca9959b"),
        product("5", "Tea Powder 500g", "चाय पाउडर 500g", 3, 180, "Beverages", 5, "photo-1544787219-7f47ccb76574"),
        product("6", "Wheat Flour 5kg", "गेहूं का आटा 5kg", 15, 280, "Flour", 10, "photo-1574323347407-f5e1ad6d020b"),
    ]
}

fn demo_clients() -> Vec<Client> {
    let client = |id: &str, name: &str, phone: &str, city: &str, outstanding, total_orders, last_order: &str| Client {
        id: id.to_string(),
        name: name.to_string(),
        phone: phone.to_string(),
        city: city.to_string(),
        outstanding,
        total_orders,
        last_order: last_order.to_string(),
    };
    vec![
        client("1", "Raj Kumar Store", "+91 98765 43210", "Mumbai", 15_000, 24, "2 days ago"),
        client("2", "Sita Mart", "+91 87654 32109", "Delhi", 0, 18, "1 week ago"),
        client("3", "Modern Retail", "+91 76543 21098", "Bangalore", 8_500, 31, "3 days ago"),
        client("4", "City Wholesale", "+91 65432 10987", "Pune", 22_000, 45, "1 day ago"),
        client("5", "Quick Shop", "+91 54321 09876", "Chennai", 0, 12, "2 weeks ago"),
    ]
}

fn demo_earnings() -> Vec<MonthlyEarnings> {
    let months = [
        ("Jan", 180_000, 220_000),
        ("Feb", 220_000, 245_000),
        ("Mar", 245_000, 280_000),
        ("Apr", 190_000, 245_000),
        ("May", 280_000, 310_000),
        ("Jun", 245_000, 290_000),
    ];
    months
        .iter()
        .map(|(month, last_month, this_month)| MonthlyEarnings {
            month: month.to_string(),
            last_month: *last_month,
            this_month: *this_month,
        })
        .collect()
}
