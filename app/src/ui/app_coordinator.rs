//! # App Coordinator Module
//!
//! Applies shell commands to the application state.
//!
//! ## Key Functions:
//! - `handle_line()` - Parse and run one line of input, recording the outcome
//! - `execute()` - Run an already parsed command
//!
//! ## Application Flow:
//! 1. Clear messages left by the previous command
//! 2. Parse the line into a `Command`
//! 3. Refuse shop commands until onboarding is complete
//! 4. Update the session, calling backend services as needed
//! 5. Leave a success or error message for the renderer

use anyhow::Result;
use log::{info, warn};
use shared::Screen;

use crate::backend::domain::ExportKind;
use crate::ui::app_state::BusinessManagerApp;
use crate::ui::commands::{Command, CommandError, SettingsCommand};
use crate::ui::state::{ReportTab, SessionPhase};

impl BusinessManagerApp {
    /// Run one line of user input; failures become the error message
    pub fn handle_line(&mut self, line: &str) {
        self.ui.clear_messages();

        let result = line
            .parse::<Command>()
            .map_err(anyhow::Error::from)
            .and_then(|command| self.execute(command));

        if let Err(e) = result {
            warn!("⚠️ Command '{}' failed: {}", line.trim(), e);
            self.ui.set_error(e.to_string());
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<()> {
        if needs_profile(&command) && self.session.phase() == SessionPhase::Unauthenticated {
            return Err(CommandError::NotOnboarded.into());
        }

        match command {
            Command::Onboard(form) => {
                if self.session.phase() == SessionPhase::Active {
                    return Err(CommandError::AlreadyOnboarded.into());
                }
                let profile = form.to_profile(self.session.language())?;
                self.session.complete_onboarding(profile);
            }
            Command::Go(screen) => {
                self.ui.search_query.clear();
                self.ui.report_tab = ReportTab::default();
                self.session.navigate(screen);
            }
            Command::Lang(language) => self.session.set_language(language),
            Command::Settings(action) => self.apply_settings(action)?,
            Command::Offline(offline) => self.session.set_offline(offline),
            Command::Add(product_id) => {
                let product = self
                    .backend
                    .catalog_service
                    .find_product(&product_id)?
                    .ok_or(CommandError::UnknownProduct(product_id))?;
                let language = self.session.language();
                self.backend
                    .order_service
                    .add_product(&mut self.session.cart, &product, language);
            }
            Command::Qty(product_id, quantity) => {
                self.session.cart.set_quantity(&product_id, quantity);
            }
            Command::Inc(product_id) => self.session.cart.increment(&product_id),
            Command::Dec(product_id) => self.session.cart.decrement(&product_id),
            Command::Search(query) => self.ui.search_query = query,
            Command::Mode(mode) => self.order.mode = mode,
            Command::Report(tab) => {
                self.session.navigate(Screen::Reports);
                self.ui.report_tab = tab;
            }
            Command::Client(client_id) => {
                match self.backend.client_service.find_client(&client_id)? {
                    Some(client) => self.order.select_client(client),
                    None => {
                        warn!("⚠️ Ignoring unknown client id {}", client_id);
                        return Err(CommandError::UnknownClient(client_id).into());
                    }
                }
            }
            Command::Send => self.send_invoice()?,
            Command::Profile(edits) => {
                if let Some(profile) = self.session.profile() {
                    if !self.settings.editing {
                        self.settings.begin_edit(profile);
                    }
                }
                for (field, value) in &edits {
                    self.settings.set_field(*field, value);
                }
                self.save_settings_form()?;
            }
            Command::Export(kind) => self.export(kind)?,
            Command::Help => self.ui.show_help = true,
            Command::Quit => {
                info!("👋 Quitting");
                self.ui.running = false;
            }
        }
        Ok(())
    }

    fn apply_settings(&mut self, action: SettingsCommand) -> Result<()> {
        match action {
            SettingsCommand::Open => self.session.open_settings(),
            SettingsCommand::Close => {
                self.session.close_settings();
                self.settings.reset();
            }
            SettingsCommand::Toggle(section) => {
                self.session.open_settings();
                self.settings.toggle_section(section);
            }
            SettingsCommand::Edit => {
                self.session.open_settings();
                if let Some(profile) = self.session.profile() {
                    self.settings.begin_edit(profile);
                }
            }
            SettingsCommand::Save => {
                if !self.settings.editing {
                    return Err(CommandError::NotEditing.into());
                }
                self.save_settings_form()?;
            }
            SettingsCommand::Cancel => self.settings.cancel(self.session.profile()),
        }
        Ok(())
    }

    fn save_settings_form(&mut self) -> Result<()> {
        let profile = self.settings.save(self.session.language())?;
        self.ui
            .set_success(format!("Saved details for {}", profile.shop_name));
        self.session.update_profile(profile);
        Ok(())
    }

    /// Send the invoice for the current cart, then start over on the dashboard
    fn send_invoice(&mut self) -> Result<()> {
        if self.session.cart.is_empty() {
            return Err(CommandError::EmptyCart.into());
        }

        let invoice = self.backend.invoice_service.build_invoice(
            &self.session.cart,
            self.order.selected_client.as_ref(),
            self.session.profile(),
        );
        let recipient = invoice
            .client
            .as_ref()
            .map(|client| client.name.clone())
            .unwrap_or_else(|| "walk-in customer".to_string());
        let total = self
            .backend
            .order_service
            .format_amount(invoice.summary.grand_total);

        info!("📤 Invoice {} sent to {} for {}", invoice.number, recipient, total);
        self.ui.set_success(format!(
            "Invoice {} for {} sent to {}",
            invoice.number, total, recipient
        ));

        self.order.record_sent(invoice);
        self.session.cart.clear();
        self.session.navigate(Screen::Dashboard);
        Ok(())
    }

    fn export(&mut self, kind: ExportKind) -> Result<()> {
        let export_service = &self.backend.export_service;
        let outcome = match kind {
            ExportKind::Inventory => {
                let products = self.backend.catalog_service.list_products()?;
                export_service.export_inventory(&products)?
            }
            ExportKind::Clients => {
                let clients = self.backend.client_service.list_clients()?;
                export_service.export_clients(&clients)?
            }
            ExportKind::Invoice => {
                let invoice = if self.session.cart.is_empty() {
                    self.order
                        .last_sent_invoice
                        .clone()
                        .ok_or(CommandError::EmptyCart)?
                } else {
                    self.backend.invoice_service.build_invoice(
                        &self.session.cart,
                        self.order.selected_client.as_ref(),
                        self.session.profile(),
                    )
                };
                export_service.export_invoice(&invoice)?
            }
        };

        self.ui.set_success(format!(
            "Exported {} {} records to {}",
            outcome.record_count,
            outcome.kind,
            outcome.file_path.display()
        ));
        Ok(())
    }
}

/// Commands that only make sense once the shop exists
fn needs_profile(command: &Command) -> bool {
    match command {
        Command::Onboard(_)
        | Command::Lang(_)
        | Command::Offline(_)
        | Command::Search(_)
        | Command::Mode(_)
        | Command::Help
        | Command::Quit => false,
        Command::Go(screen) => *screen != Screen::Onboarding,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::ui::state::QuickAddMode;
    use shared::Language;
    use tempfile::TempDir;

    fn create_test_app() -> BusinessManagerApp {
        BusinessManagerApp::new(&AppConfig::default()).unwrap()
    }

    fn onboarded_app() -> BusinessManagerApp {
        let mut app = create_test_app();
        app.handle_line("onboard Sharma General Store|Anil Sharma|+91 90000 11111|Jaipur");
        assert_eq!(app.ui.error_message, None);
        app
    }

    #[test]
    fn test_onboarding_in_hindi_lands_on_dashboard() {
        let mut app = create_test_app();
        app.handle_line("lang hi");
        app.handle_line("onboard Sharma General Store|Anil Sharma|+91 90000 11111|Jaipur");

        assert_eq!(app.session.screen(), Screen::Dashboard);
        assert_eq!(app.session.language(), Language::Hi);
        assert_eq!(app.session.profile().unwrap().language, Language::Hi);
    }

    #[test]
    fn test_onboarding_rejects_blank_fields() {
        let mut app = create_test_app();
        app.handle_line("onboard Sharma Store| |+91 90000 11111|");

        assert_eq!(app.session.phase(), SessionPhase::Unauthenticated);
        assert_eq!(
            app.ui.error_message.as_deref(),
            Some("Required fields are empty: owner, city")
        );
    }

    #[test]
    fn test_shop_commands_wait_for_onboarding() {
        let mut app = create_test_app();
        app.handle_line("add 1");
        assert!(app.session.cart.is_empty());
        assert_eq!(app.ui.error_message.as_deref(), Some("Complete onboarding first"));

        app.handle_line("mode type");
        assert_eq!(app.order.mode, QuickAddMode::Type);
        assert_eq!(app.ui.error_message, None);
    }

    #[test]
    fn test_second_onboarding_is_refused() {
        let mut app = onboarded_app();
        app.handle_line("onboard Other|Owner|123|Pune");
        assert_eq!(app.session.profile().unwrap().shop_name, "Sharma General Store");
        assert!(app.ui.error_message.is_some());
    }

    #[test]
    fn test_cart_commands() {
        let mut app = onboarded_app();
        app.handle_line("add 1");
        app.handle_line("add 1");
        app.handle_line("add 2");
        app.handle_line("qty 2 5");
        assert_eq!(app.session.cart.quantity_of("1"), Some(2));
        assert_eq!(app.session.cart.quantity_of("2"), Some(5));

        app.handle_line("dec 1");
        app.handle_line("qty 2 0");
        assert_eq!(app.session.cart.quantity_of("1"), Some(1));
        assert_eq!(app.session.cart.quantity_of("2"), None);

        app.handle_line("add 99");
        assert_eq!(app.ui.error_message.as_deref(), Some("No product with id '99'"));
    }

    #[test]
    fn test_qty_for_product_not_in_cart_changes_nothing() {
        let mut app = onboarded_app();
        app.handle_line("add 1");
        let before = app.session.cart.clone();

        app.handle_line("qty 4 3");

        assert_eq!(app.session.cart, before);
    }

    #[test]
    fn test_send_clears_cart_and_returns_to_dashboard() {
        let mut app = onboarded_app();
        app.handle_line("go quick-add");
        app.handle_line("add 1");
        app.handle_line("go invoice");
        app.handle_line("client 2");
        app.handle_line("send");

        assert!(app.session.cart.is_empty());
        assert_eq!(app.session.screen(), Screen::Dashboard);
        assert!(app.order.selected_client.is_none());
        let sent = app.order.last_sent_invoice.as_ref().unwrap();
        assert_eq!(sent.client.as_ref().unwrap().name, "Sita Mart");
        assert_eq!(sent.summary.grand_total, 767);
        assert!(app.ui.success_message.as_deref().unwrap().contains("Sita Mart"));
    }

    #[test]
    fn test_send_with_empty_cart_fails() {
        let mut app = onboarded_app();
        app.handle_line("send");
        assert_eq!(app.ui.error_message.as_deref(), Some("The cart is empty"));
        assert!(app.order.last_sent_invoice.is_none());
    }

    #[test]
    fn test_unknown_client_keeps_selection() {
        let mut app = onboarded_app();
        app.handle_line("client 3");
        app.handle_line("client 42");
        assert_eq!(app.order.selected_client.as_ref().unwrap().id, "3");
        assert!(app.ui.error_message.is_some());
    }

    #[test]
    fn test_profile_command_updates_profile() {
        let mut app = onboarded_app();
        app.handle_line("profile city=Udaipur gst=08ABCDE1234F1Z5");

        let profile = app.session.profile().unwrap();
        assert_eq!(profile.city, "Udaipur");
        assert_eq!(profile.gst_number.as_deref(), Some("08ABCDE1234F1Z5"));
        assert_eq!(profile.shop_name, "Sharma General Store");
        assert!(!app.settings.editing);
    }

    #[test]
    fn test_settings_edit_cancel() {
        let mut app = onboarded_app();
        app.handle_line("settings edit");
        assert!(app.session.settings_open());
        assert!(app.settings.editing);

        app.handle_line("settings cancel");
        assert!(!app.settings.editing);

        app.handle_line("settings save");
        assert!(app.ui.error_message.is_some());

        app.handle_line("settings close");
        assert!(!app.session.settings_open());
    }

    #[test]
    fn test_navigation_clears_search() {
        let mut app = onboarded_app();
        app.handle_line("go inventory");
        app.handle_line("search dal");
        assert_eq!(app.ui.search_query, "dal");

        app.handle_line("go clients");
        assert!(app.ui.search_query.is_empty());
    }

    #[test]
    fn test_report_tab_selection() {
        let mut app = onboarded_app();
        app.handle_line("report receivables");
        assert_eq!(app.ui.error_message, None);
        assert_eq!(app.session.screen(), Screen::Reports);
        assert_eq!(app.ui.report_tab, ReportTab::Receivables);

        app.handle_line("go dashboard");
        app.handle_line("go reports");
        assert_eq!(app.ui.report_tab, ReportTab::LowStock);
    }

    #[test]
    fn test_report_tab_needs_onboarding() {
        let mut app = create_test_app();
        app.handle_line("report receivables");
        assert!(app.ui.error_message.is_some());
        assert_eq!(app.ui.report_tab, ReportTab::LowStock);
    }

    #[test]
    fn test_export_inventory_into_configured_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig {
            export_dir: Some(temp_dir.path().to_path_buf()),
            ..AppConfig::default()
        };
        let mut app = BusinessManagerApp::new(&config).unwrap();
        app.handle_line("onboard Sharma General Store|Anil Sharma|+91 90000 11111|Jaipur");

        app.handle_line("export inventory");

        assert_eq!(app.ui.error_message, None);
        let files: Vec<_> = std::fs::read_dir(temp_dir.path()).unwrap().collect();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_quit() {
        let mut app = create_test_app();
        app.handle_line("quit");
        assert!(!app.is_running());
    }
}
