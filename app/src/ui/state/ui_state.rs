//! # UI State Module
//!
//! General shell state that is not tied to one screen.
//!
//! ## Responsibilities:
//! - Feedback messages (success and error)
//! - The search filter for list screens
//! - The active tab on the reports screen
//! - Help display and the quit flag

/// Tabs on the reports screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportTab {
    /// Inventory value split and items running low
    #[default]
    LowStock,
    /// Sales against target and money owed
    Receivables,
}

impl ReportTab {
    pub const ALL: [ReportTab; 2] = [ReportTab::LowStock, ReportTab::Receivables];

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "lowstock" | "low-stock" | "stock" => Some(ReportTab::LowStock),
            "receivables" | "sales" => Some(ReportTab::Receivables),
            _ => None,
        }
    }
}

/// General UI state for feedback and filtering
#[derive(Debug)]
pub struct UIState {
    /// Filter applied to the inventory, quick-add and client lists
    pub search_query: String,

    /// Reset to the low-stock tab whenever the screen changes
    pub report_tab: ReportTab,

    pub error_message: Option<String>,
    pub success_message: Option<String>,

    pub show_help: bool,

    /// Cleared by `quit`
    pub running: bool,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            search_query: String::new(),
            report_tab: ReportTab::default(),
            error_message: None,
            success_message: None,
            show_help: false,
            running: true,
        }
    }

    /// Clear messages from the previous command
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
        self.show_help = false;
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    pub fn set_success(&mut self, message: String) {
        self.success_message = Some(message);
    }
}

impl Default for UIState {
    fn default() -> Self {
        Self::new()
    }
}
