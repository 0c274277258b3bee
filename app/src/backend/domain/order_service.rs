//! Order pricing domain logic for the business manager.
//!
//! Everything the quick-add and invoice screens show as money comes from here:
//! line totals, subtotal, tax, grand total and item counts, plus rupee
//! formatting. All amounts are whole currency units held in `u64`, so sums are
//! exact and the only rounding step is the tax.

use log::debug;
use shared::{CartLine, InvoiceSummary, Language, Product};

use crate::backend::domain::models::Cart;

/// Basis points in one whole (100%)
const BASIS_POINTS: u64 = 10_000;

/// Pricing settings for invoices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingConfig {
    /// Tax rate in basis points, 1800 = 18%
    pub tax_rate_basis_points: u64,
    pub currency_symbol: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate_basis_points: 1_800,
            currency_symbol: "₹".to_string(),
        }
    }
}

/// Order service that derives every invoice amount from a cart
#[derive(Debug, Clone)]
pub struct OrderService {
    config: PricingConfig,
}

impl OrderService {
    pub fn new() -> Self {
        Self {
            config: PricingConfig::default(),
        }
    }

    pub fn with_config(config: PricingConfig) -> Self {
        Self { config }
    }

    /// Add one unit of a catalog product, priced from the catalog and named
    /// in the language active when it first enters the cart
    pub fn add_product(&self, cart: &mut Cart, product: &Product, language: Language) {
        cart.add_item(&product.id, product.price, product.display_name(language));
    }

    pub fn line_total(&self, line: &CartLine) -> u64 {
        line.line_total()
    }

    /// Sum of all line totals
    pub fn subtotal(&self, cart: &Cart) -> u64 {
        cart.lines()
            .iter()
            .map(CartLine::line_total)
            .fold(0, u64::saturating_add)
    }

    /// Tax on the subtotal, rounded half-up to a whole unit
    pub fn tax_amount(&self, cart: &Cart) -> u64 {
        self.tax_on(self.subtotal(cart))
    }

    pub fn grand_total(&self, cart: &Cart) -> u64 {
        let subtotal = self.subtotal(cart);
        subtotal.saturating_add(self.tax_on(subtotal))
    }

    /// Sum of quantities across lines (not the line count)
    pub fn total_item_count(&self, cart: &Cart) -> u64 {
        cart.lines()
            .iter()
            .map(|line| u64::from(line.quantity))
            .fold(0, u64::saturating_add)
    }

    /// All derived totals in one pass
    pub fn summarize(&self, cart: &Cart) -> InvoiceSummary {
        let subtotal = self.subtotal(cart);
        let tax = self.tax_on(subtotal);
        let summary = InvoiceSummary {
            subtotal,
            tax,
            grand_total: subtotal.saturating_add(tax),
            item_count: self.total_item_count(cart),
        };
        debug!("🧾 Cart summary: {:?}", summary);
        summary
    }

    /// Widened to `u128` so the product cannot overflow; a result past
    /// `u64::MAX` (only possible with a rate above 100%) saturates
    fn tax_on(&self, subtotal: u64) -> u64 {
        let bp = u128::from(self.config.tax_rate_basis_points);
        let basis = u128::from(BASIS_POINTS);
        let tax = (u128::from(subtotal) * bp + basis / 2) / basis;
        u64::try_from(tax).unwrap_or(u64::MAX)
    }

    /// Tax rate as a whole-percent label, e.g. "18%" or "12.5%"
    pub fn tax_rate_label(&self) -> String {
        let bp = self.config.tax_rate_basis_points;
        if bp % 100 == 0 {
            format!("{}%", bp / 100)
        } else {
            let text = format!("{}.{:02}", bp / 100, bp % 100);
            format!("{}%", text.trim_end_matches('0'))
        }
    }

    /// Format an amount with the currency symbol and Indian digit grouping
    pub fn format_amount(&self, amount: u64) -> String {
        format!("{}{}", self.config.currency_symbol, group_indian(amount))
    }

    pub fn get_config(&self) -> &PricingConfig {
        &self.config
    }
}

impl Default for OrderService {
    fn default() -> Self {
        Self::new()
    }
}

/// Group digits the Indian way: last three, then pairs (2,45,000)
pub fn group_indian(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> OrderService {
        OrderService::new()
    }

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item("1", 650, "Rice Bag 10kg");
        cart.set_quantity("1", 2);
        cart.add_item("2", 120, "Dal Moong 1kg");
        cart.set_quantity("2", 5);
        cart
    }

    #[test]
    fn test_invoice_scenario_totals() {
        let service = create_test_service();
        let cart = sample_cart();

        assert_eq!(service.subtotal(&cart), 1900);
        assert_eq!(service.tax_amount(&cart), 342);
        assert_eq!(service.grand_total(&cart), 2242);
        assert_eq!(service.total_item_count(&cart), 7);
    }

    #[test]
    fn test_summarize_matches_individual_calls() {
        let service = create_test_service();
        let cart = sample_cart();

        let summary = service.summarize(&cart);
        assert_eq!(summary.subtotal, service.subtotal(&cart));
        assert_eq!(summary.tax, service.tax_amount(&cart));
        assert_eq!(summary.grand_total, summary.subtotal + summary.tax);
        assert_eq!(summary.item_count, 7);
    }

    #[test]
    fn test_empty_cart_is_all_zero() {
        let service = create_test_service();
        assert_eq!(service.summarize(&Cart::new()), InvoiceSummary::default());
    }

    #[test]
    fn test_tax_rounds_half_up() {
        let service = create_test_service();
        let mut cart = Cart::new();

        // 25 * 0.18 = 4.5
        cart.add_item("x", 25, "Half");
        assert_eq!(service.tax_amount(&cart), 5);

        // 24 * 0.18 = 4.32
        cart.set_quantity("x", 0);
        cart.add_item("y", 24, "Below half");
        assert_eq!(service.tax_amount(&cart), 4);
    }

    #[test]
    fn test_tax_is_stable_across_calls() {
        let service = create_test_service();
        let cart = sample_cart();
        let first = service.tax_amount(&cart);
        for _ in 0..3 {
            assert_eq!(service.tax_amount(&cart), first);
        }
    }

    #[test]
    fn test_custom_tax_rate() {
        let service = OrderService::with_config(PricingConfig {
            tax_rate_basis_points: 500,
            currency_symbol: "Rs ".to_string(),
        });
        let cart = sample_cart();
        assert_eq!(service.tax_amount(&cart), 95);
        assert_eq!(service.tax_rate_label(), "5%");
        assert_eq!(service.format_amount(2242), "Rs 2,242");
    }

    #[test]
    fn test_fractional_tax_rate_label() {
        let service = OrderService::with_config(PricingConfig {
            tax_rate_basis_points: 1250,
            ..PricingConfig::default()
        });
        assert_eq!(service.tax_rate_label(), "12.5%");
    }

    #[test]
    fn test_subtotal_is_exact_for_large_amounts() {
        let service = create_test_service();
        let mut cart = Cart::new();
        cart.add_item("big", 9_999_999, "Bulk");
        cart.set_quantity("big", 1_000);
        cart.add_item("small", 1, "Tiny");

        assert_eq!(service.subtotal(&cart), 9_999_999_000 + 1);
    }

    #[test]
    fn test_add_product_uses_catalog_price() {
        let service = create_test_service();
        let product = Product {
            id: "4".to_string(),
            name: "Sugar 1kg".to_string(),
            name_hi: "चीनी 1kg".to_string(),
            stock: 25,
            price: 55,
            category: "Sweeteners".to_string(),
            low_stock_threshold: 10,
            image_url: String::new(),
        };
        let mut cart = Cart::new();
        service.add_product(&mut cart, &product, Language::Hi);
        service.add_product(&mut cart, &product, Language::En);

        assert_eq!(cart.quantity_of("4"), Some(2));
        assert_eq!(cart.line("4").unwrap().name, "चीनी 1kg");
        assert_eq!(service.subtotal(&cart), 110);
    }

    #[test]
    fn test_tax_on_huge_subtotal_does_not_overflow() {
        let service = create_test_service();
        let mut cart = Cart::new();
        cart.add_item("bulk", 20_000_000_000_000_000, "Bulk");

        assert_eq!(service.tax_amount(&cart), 3_600_000_000_000_000);
        assert_eq!(service.grand_total(&cart), 23_600_000_000_000_000);
    }

    #[test]
    fn test_subtotal_saturates_instead_of_panicking() {
        let service = create_test_service();
        let mut cart = Cart::new();
        cart.add_item("big", u64::MAX / 2 + 1, "Big");
        cart.set_quantity("big", 2);
        cart.add_item("more", u64::MAX, "More");

        assert_eq!(service.subtotal(&cart), u64::MAX);
        assert_eq!(service.grand_total(&cart), u64::MAX);
        let summary = service.summarize(&cart);
        assert_eq!(summary.grand_total, u64::MAX);
        assert_eq!(summary.item_count, 3);
    }

    #[test]
    fn test_extreme_tax_rate_saturates() {
        let service = OrderService::with_config(PricingConfig {
            tax_rate_basis_points: u64::MAX,
            ..PricingConfig::default()
        });
        let mut cart = Cart::new();
        cart.add_item("1", 1_000_000, "Bulk");

        assert_eq!(service.tax_amount(&cart), u64::MAX);
        assert_eq!(service.grand_total(&cart), u64::MAX);
    }

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(999), "999");
        assert_eq!(group_indian(1000), "1,000");
        assert_eq!(group_indian(45000), "45,000");
        assert_eq!(group_indian(245000), "2,45,000");
        assert_eq!(group_indian(12345678), "1,23,45,678");
    }

    #[test]
    fn test_format_amount() {
        let service = create_test_service();
        assert_eq!(service.format_amount(245000), "₹2,45,000");
        assert_eq!(service.format_amount(342), "₹342");
    }
}
