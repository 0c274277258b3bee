//! Domain model for the working set of lines in an in-progress order.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use shared::CartLine;

/// Ordered collection of cart lines, at most one per product id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// An existing line only has its quantity bumped; its stored price and name
    /// stay authoritative even if the caller passes different ones.
    pub fn add_item(&mut self, product_id: &str, unit_price: u64, display_name: &str) {
        if let Some(line) = self.line_mut(product_id) {
            line.quantity = line.quantity.saturating_add(1);
            debug!("🛒 Bumped {} to quantity {}", product_id, line.quantity);
            return;
        }

        self.lines.push(CartLine {
            product_id: product_id.to_string(),
            name: display_name.to_string(),
            unit_price,
            quantity: 1,
        });
        debug!("🛒 Added {} to cart at {}", product_id, unit_price);
    }

    /// Replace the quantity of a line; zero or below removes it.
    ///
    /// Unknown product ids are ignored, whatever the quantity.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            let before = self.lines.len();
            self.lines.retain(|line| line.product_id != product_id);
            if self.lines.len() < before {
                debug!("🛒 Removed {} from cart", product_id);
            }
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.line_mut(product_id) {
            Some(line) => line.quantity = quantity,
            None => warn!("⚠️ Ignoring quantity {} for product {} not in cart", quantity, product_id),
        }
    }

    /// Add one to an existing line
    pub fn increment(&mut self, product_id: &str) {
        if let Some(current) = self.quantity_of(product_id) {
            self.set_quantity(product_id, i64::from(current) + 1);
        }
    }

    /// Take one from an existing line, removing it when it would reach zero
    pub fn decrement(&mut self, product_id: &str) {
        if let Some(current) = self.quantity_of(product_id) {
            self.set_quantity(product_id, i64::from(current) - 1);
        }
    }

    pub fn quantity_of(&self, product_id: &str) -> Option<u32> {
        self.line(product_id).map(|line| line.quantity)
    }

    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    fn line_mut(&mut self, product_id: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product_id == product_id)
    }

    /// Lines in the order they were first added
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
