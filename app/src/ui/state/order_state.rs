//! # Order State Module
//!
//! State for the quick-add and invoice screens that is not the cart itself.
//!
//! ## Responsibilities:
//! - Quick-add input mode (tap grid or typed search)
//! - Client selected for the next invoice
//! - The most recently sent invoice

use log::info;
use shared::{Client, Invoice};

/// How products are picked on the quick-add screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuickAddMode {
    #[default]
    Tap,
    Type,
}

#[derive(Debug, Clone, Default)]
pub struct OrderState {
    pub mode: QuickAddMode,
    pub selected_client: Option<Client>,
    pub last_sent_invoice: Option<Invoice>,
}

impl OrderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_client(&mut self, client: Client) {
        info!("👤 Invoice client set to {}", client.name);
        self.selected_client = Some(client);
    }

    /// Remember a sent invoice and reset the selection for the next one
    pub fn record_sent(&mut self, invoice: Invoice) {
        self.selected_client = None;
        self.last_sent_invoice = Some(invoice);
    }
}
