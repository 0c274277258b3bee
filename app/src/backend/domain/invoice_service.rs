//! Invoice assembly: turns the session cart into a numbered, dated invoice.

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use log::info;
use shared::{Client, Invoice, UserProfile};

use crate::backend::domain::models::Cart;
use crate::backend::domain::order_service::OrderService;

/// Date format printed on invoices
pub const INVOICE_DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone)]
pub struct InvoiceService {
    order_service: OrderService,
}

impl InvoiceService {
    pub fn new(order_service: OrderService) -> Self {
        Self { order_service }
    }

    /// Build an invoice stamped with the current local time
    pub fn build_invoice(
        &self,
        cart: &Cart,
        client: Option<&Client>,
        profile: Option<&UserProfile>,
    ) -> Invoice {
        self.build_invoice_at(cart, client, profile, Local::now())
    }

    /// Build an invoice for a fixed moment; the number comes from its epoch millis
    pub fn build_invoice_at<Tz: TimeZone>(
        &self,
        cart: &Cart,
        client: Option<&Client>,
        profile: Option<&UserProfile>,
        at: DateTime<Tz>,
    ) -> Invoice {
        let millis = u64::try_from(at.timestamp_millis()).unwrap_or(0);
        let invoice = Invoice {
            number: Invoice::generate_number(millis),
            issue_date: at.date_naive(),
            shop_name: profile.map(|p| p.shop_name.clone()),
            gst_number: profile.and_then(|p| p.gst_number.clone()),
            client: client.cloned(),
            lines: cart.lines().to_vec(),
            summary: self.order_service.summarize(cart),
        };
        info!(
            "🧾 Prepared invoice {} with {} lines, total {}",
            invoice.number,
            invoice.lines.len(),
            invoice.summary.grand_total
        );
        invoice
    }

    pub fn order_service(&self) -> &OrderService {
        &self.order_service
    }
}

impl Default for InvoiceService {
    fn default() -> Self {
        Self::new(OrderService::new())
    }
}

pub fn format_invoice_date(date: NaiveDate) -> String {
    date.format(INVOICE_DATE_FORMAT).to_string()
}

/// GST line for the invoice footer; only present when the shop has a GST number
pub fn gst_note(invoice: &Invoice) -> Option<&str> {
    invoice
        .gst_number
        .as_deref()
        .filter(|gst| !gst.trim().is_empty())
}
