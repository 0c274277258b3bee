use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language for every label in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Hi];

    /// Short language code ("en" or "hi")
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }

    /// Name of the language written in that language
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिंदी",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "hi" | "hindi" => Ok(Language::Hi),
            other => Err(ParseLanguageError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseLanguageError(pub String);

impl fmt::Display for ParseLanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown language code: {}", self.0)
    }
}

impl std::error::Error for ParseLanguageError {}

/// One of the fixed set of views the user can be navigated to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Onboarding,
    Dashboard,
    Inventory,
    QuickAdd,
    Invoice,
    Clients,
    Reports,
    Profile,
    Settings,
}

impl Screen {
    pub const ALL: [Screen; 9] = [
        Screen::Onboarding,
        Screen::Dashboard,
        Screen::Inventory,
        Screen::QuickAdd,
        Screen::Invoice,
        Screen::Clients,
        Screen::Reports,
        Screen::Profile,
        Screen::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Onboarding => "onboarding",
            Screen::Dashboard => "dashboard",
            Screen::Inventory => "inventory",
            Screen::QuickAdd => "quick-add",
            Screen::Invoice => "invoice",
            Screen::Clients => "clients",
            Screen::Reports => "reports",
            Screen::Profile => "profile",
            Screen::Settings => "settings",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Screen {
    type Err = ParseScreenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        // "quickadd" is accepted for the older spelling
        if normalized == "quickadd" {
            return Ok(Screen::QuickAdd);
        }
        Screen::ALL
            .iter()
            .copied()
            .find(|screen| screen.as_str() == normalized)
            .ok_or(ParseScreenError(normalized))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseScreenError(pub String);

impl fmt::Display for ParseScreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown screen: {}", self.0)
    }
}

impl std::error::Error for ParseScreenError {}

/// Shop identity captured once during onboarding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub shop_name: String,
    pub owner_name: String,
    /// Also used as the WhatsApp contact
    pub whatsapp_phone: String,
    pub city: String,
    pub language: Language,
    /// GST registration number, display only
    pub gst_number: Option<String>,
}

/// One product's accumulated quantity within an in-progress order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    /// Unit price in whole currency units
    pub unit_price: u64,
    /// Always >= 1; a line is removed instead of reaching zero
    pub quantity: u32,
}

impl CartLine {
    /// Unit price multiplied by quantity, saturating at `u64::MAX`
    pub fn line_total(&self) -> u64 {
        self.unit_price.saturating_mul(u64::from(self.quantity))
    }
}

/// Totals derived from the cart; never stored on their own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InvoiceSummary {
    pub subtotal: u64,
    pub tax: u64,
    pub grand_total: u64,
    /// Sum of quantities (not the number of lines)
    pub item_count: u64,
}

/// Catalog entry for a product the shop sells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub name_hi: String,
    pub stock: u32,
    pub price: u64,
    pub category: String,
    pub low_stock_threshold: u32,
    pub image_url: String,
}

impl Product {
    /// Product name in the requested language
    pub fn display_name(&self, language: Language) -> &str {
        match language {
            Language::En => &self.name,
            Language::Hi => &self.name_hi,
        }
    }
}

/// Stock level bucket for inventory badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    Good,
    Low,
    Out,
}

/// Customer of the shop with their receivable balance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub city: String,
    /// Amount the client still owes
    pub outstanding: u64,
    pub total_orders: u32,
    /// Human-readable recency, e.g. "2 days ago"
    pub last_order: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReceivableStatus {
    Overdue,
    Pending,
}

/// Money owed by one client, as shown on the receivables report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receivable {
    pub client: String,
    pub amount: u64,
    /// Days since the invoice was raised
    pub days: u32,
    pub status: ReceivableStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LowStockUrgency {
    Out,
    Critical,
    Low,
}

/// Entry on the low stock report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowStockEntry {
    pub id: String,
    pub name: String,
    pub stock: u32,
    pub threshold: u32,
    /// Value of the remaining stock
    pub value: u64,
    pub urgency: LowStockUrgency,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub month: String,
    pub sales: u64,
    pub target: u64,
}

/// Share of inventory value held by one category, in percent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyEarnings {
    pub month: String,
    pub last_month: u64,
    pub this_month: u64,
}

/// Headline numbers on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessMetrics {
    pub total_revenue: u64,
    /// Percent change, may be negative
    pub revenue_growth: i32,
    pub outstanding_amount: u64,
    pub outstanding_change: i32,
    pub avg_invoice_value: u64,
    pub avg_invoice_growth: i32,
}

/// Invoice assembled from the cart, ready to send or export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Format: "INV-" followed by six digits
    pub number: String,
    pub issue_date: NaiveDate,
    pub shop_name: Option<String>,
    pub gst_number: Option<String>,
    pub client: Option<Client>,
    pub lines: Vec<CartLine>,
    pub summary: InvoiceSummary,
}

impl Invoice {
    /// Generate an invoice number from the last six digits of a timestamp
    pub fn generate_number(epoch_millis: u64) -> String {
        format!("INV-{:06}", epoch_millis % 1_000_000)
    }
}
