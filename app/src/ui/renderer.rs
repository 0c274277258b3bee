//! # Renderer Module
//!
//! Turns the application state into plain-text lines for the terminal.
//!
//! ## Layout:
//! 1. Offline banner (when offline)
//! 2. Header with the shop name
//! 3. The active screen, or onboarding until a profile exists
//! 4. Settings drawer (when open)
//! 5. Bottom navigation
//! 6. Messages and help from the last command
//!
//! Rendering only reads state. Every label comes from the active language's
//! table, and amounts use the configured currency and Indian digit grouping.

use anyhow::Result;
use shared::{LowStockUrgency, ReceivableStatus, Screen, StockStatus};

use crate::backend::domain::client_service::initials;
use crate::backend::domain::invoice_service::{format_invoice_date, gst_note};
use crate::backend::domain::{CatalogService, LabelKey};
use crate::ui::app_state::BusinessManagerApp;
use crate::ui::commands::help_lines;
use crate::ui::navigation::{bottom_nav_items, QUICK_ACTIONS};
use crate::ui::state::{QuickAddMode, ReportTab, SessionPhase, SettingsSection};

const RULE: &str = "----------------------------------------";

/// Render the whole frame for the current state
pub fn render(app: &BusinessManagerApp) -> Result<Vec<String>> {
    let mut out = Vec::new();

    if app.session.is_offline() {
        out.push(format!(
            "[!] {}: {}",
            app.label(LabelKey::Offline),
            app.label(LabelKey::OfflineMessage)
        ));
    }

    if app.session.phase() == SessionPhase::Unauthenticated {
        render_onboarding(app, &mut out);
    } else {
        render_header(app, &mut out);
        match app.session.screen() {
            Screen::Onboarding => render_onboarding(app, &mut out),
            Screen::Dashboard => render_dashboard(app, &mut out)?,
            Screen::Inventory => render_inventory(app, &mut out)?,
            Screen::QuickAdd => render_quick_add(app, &mut out)?,
            Screen::Invoice => render_invoice(app, &mut out)?,
            Screen::Clients => render_clients(app, &mut out)?,
            Screen::Reports => render_reports(app, &mut out)?,
            Screen::Profile => render_profile(app, &mut out)?,
            Screen::Settings => render_settings(app, &mut out),
        }
        if app.session.settings_open() && app.session.screen() != Screen::Settings {
            render_settings(app, &mut out);
        }
    }

    render_bottom_nav(app, &mut out);
    render_messages(app, &mut out);
    Ok(out)
}

fn money(app: &BusinessManagerApp, amount: u64) -> String {
    app.backend.order_service.format_amount(amount)
}

fn signed_percent(value: i64) -> String {
    if value > 0 {
        format!("+{}%", value)
    } else {
        format!("{}%", value)
    }
}

fn title(out: &mut Vec<String>, text: &str) {
    out.push(RULE.to_string());
    out.push(text.to_string());
    out.push(RULE.to_string());
}

fn render_header(app: &BusinessManagerApp, out: &mut Vec<String>) {
    let shop = app
        .session
        .profile()
        .map(|p| p.shop_name.as_str())
        .unwrap_or("");
    out.push(format!("{} | {}", app.label(LabelKey::AppName), shop));
}

fn render_onboarding(app: &BusinessManagerApp, out: &mut Vec<String>) {
    title(out, app.label(LabelKey::Welcome));
    out.push(app.label(LabelKey::Subtitle).to_string());
    for key in [
        LabelKey::ShopName,
        LabelKey::OwnerName,
        LabelKey::WhatsappPhone,
        LabelKey::City,
    ] {
        out.push(format!("  {} *", app.label(key)));
    }
    out.push(format!(
        "  {}: {}",
        app.label(LabelKey::Language),
        app.session.language().native_name()
    ));
    out.push(format!(
        "{} -> onboard <shop>|<owner>|<phone>|<city>[|<gst>]",
        app.label(LabelKey::StartTrial)
    ));
}

fn render_dashboard(app: &BusinessManagerApp, out: &mut Vec<String>) -> Result<()> {
    let metrics = app.backend.report_service.business_metrics()?;
    title(out, app.label(LabelKey::Home));

    let rows = [
        (LabelKey::TotalRevenue, metrics.total_revenue, metrics.revenue_growth),
        (LabelKey::Outstanding, metrics.outstanding_amount, metrics.outstanding_change),
        (LabelKey::AvgInvoice, metrics.avg_invoice_value, metrics.avg_invoice_growth),
    ];
    for (key, amount, change) in rows {
        out.push(format!(
            "  {:<16} {:>12}  {}",
            app.label(key),
            money(app, amount),
            signed_percent(i64::from(change))
        ));
    }

    if let Some(growth) = app.backend.report_service.earnings_growth()? {
        out.push(format!(
            "  {} ({}) {}  {}",
            app.label(LabelKey::Earnings),
            growth.month,
            money(app, growth.this_month),
            signed_percent(growth.growth_percent)
        ));
    }

    out.push(format!("{}:", app.label(LabelKey::QuickActions)));
    for action in QUICK_ACTIONS.iter() {
        out.push(format!("  {:<20} go {}", app.label(action.label), action.target));
    }

    if !app.session.cart.is_empty() {
        render_cart_summary(app, out);
    }
    Ok(())
}

fn stock_label(app: &BusinessManagerApp, status: StockStatus) -> &'static str {
    match status {
        StockStatus::Good => app.label(LabelKey::InStock),
        StockStatus::Low => app.label(LabelKey::LowStock),
        StockStatus::Out => app.label(LabelKey::OutOfStock),
    }
}

fn render_inventory(app: &BusinessManagerApp, out: &mut Vec<String>) -> Result<()> {
    let language = app.session.language();
    let catalog = &app.backend.catalog_service;
    title(out, app.label(LabelKey::Inventory));

    let low_count = catalog.low_stock_products()?.len();
    out.push(format!("  {}: {}", app.label(LabelKey::LowStock), low_count));

    let products = catalog.search(&app.ui.search_query, language)?;
    if products.is_empty() {
        out.push(format!("  {}", app.label(LabelKey::NoProducts)));
        return Ok(());
    }
    for product in &products {
        out.push(format!(
            "  [{}] {:<24} {}: {} {}  {}: {}  {}",
            product.id,
            product.display_name(language),
            app.label(LabelKey::Stock),
            product.stock,
            app.label(LabelKey::Pieces),
            app.label(LabelKey::Price),
            money(app, product.price),
            stock_label(app, CatalogService::stock_status(product))
        ));
    }
    Ok(())
}

fn render_quick_add(app: &BusinessManagerApp, out: &mut Vec<String>) -> Result<()> {
    let language = app.session.language();
    title(out, app.label(LabelKey::NewOrder));

    let (tap, typed) = match app.order.mode {
        QuickAddMode::Tap => ("*", " "),
        QuickAddMode::Type => (" ", "*"),
    };
    out.push(format!(
        "  ({}) {}   ({}) {}",
        tap,
        app.label(LabelKey::TapMode),
        typed,
        app.label(LabelKey::TypeMode)
    ));

    let products = match app.order.mode {
        QuickAddMode::Tap => app.backend.catalog_service.list_products()?,
        QuickAddMode::Type => app
            .backend
            .catalog_service
            .search(&app.ui.search_query, language)?,
    };
    if products.is_empty() {
        out.push(format!("  {}", app.label(LabelKey::NoProducts)));
    }
    for product in &products {
        let in_cart = app.session.cart.quantity_of(&product.id).unwrap_or(0);
        let marker = if in_cart > 0 {
            format!(" x{}", in_cart)
        } else {
            String::new()
        };
        out.push(format!(
            "  [{}] {} {}{}",
            product.id,
            product.display_name(language),
            money(app, product.price),
            marker
        ));
    }

    render_cart_summary(app, out);
    if !app.session.cart.is_empty() {
        out.push(format!("  {} -> go invoice", app.label(LabelKey::CreateOrder)));
    }
    Ok(())
}

fn render_cart_summary(app: &BusinessManagerApp, out: &mut Vec<String>) {
    let summary = app.backend.order_service.summarize(&app.session.cart);
    out.push(format!(
        "{}: {} {} | {}: {}",
        app.label(LabelKey::Cart),
        summary.item_count,
        app.label(LabelKey::Items),
        app.label(LabelKey::Total),
        money(app, summary.grand_total)
    ));
}

fn render_invoice(app: &BusinessManagerApp, out: &mut Vec<String>) -> Result<()> {
    let invoice = app.backend.invoice_service.build_invoice(
        &app.session.cart,
        app.order.selected_client.as_ref(),
        app.session.profile(),
    );
    title(out, app.label(LabelKey::InvoiceBuilder));
    out.push(format!(
        "  {} {}   {}: {}",
        app.label(LabelKey::InvoiceNumber),
        invoice.number,
        app.label(LabelKey::Date),
        format_invoice_date(invoice.issue_date)
    ));

    match &invoice.client {
        Some(client) => out.push(format!(
            "  {}: {} ({})",
            app.label(LabelKey::SelectClient),
            client.name,
            client.phone
        )),
        None => {
            out.push(format!("  {}:", app.label(LabelKey::SelectClient)));
            for client in app.backend.client_service.list_clients()? {
                out.push(format!("    [{}] {} {}", client.id, client.name, client.phone));
            }
        }
    }

    if invoice.lines.is_empty() {
        out.push(format!("  {}", app.label(LabelKey::EmptyCart)));
        return Ok(());
    }
    for line in &invoice.lines {
        out.push(format!(
            "  {:<24} {}: {:>3}  {}: {:>8}  {}: {:>10}",
            line.name,
            app.label(LabelKey::Quantity),
            line.quantity,
            app.label(LabelKey::Price),
            money(app, line.unit_price),
            app.label(LabelKey::Total),
            money(app, line.line_total())
        ));
    }

    let order_service = &app.backend.order_service;
    out.push(RULE.to_string());
    out.push(format!(
        "  {:<20} {:>12}",
        app.label(LabelKey::Subtotal),
        money(app, invoice.summary.subtotal)
    ));
    out.push(format!(
        "  {:<20} {:>12}",
        format!("{} ({})", app.label(LabelKey::Gst), order_service.tax_rate_label()),
        money(app, invoice.summary.tax)
    ));
    out.push(format!(
        "  {:<20} {:>12}",
        app.label(LabelKey::GrandTotal),
        money(app, invoice.summary.grand_total)
    ));
    if let Some(gst) = gst_note(&invoice) {
        out.push(format!("  {}{}", app.label(LabelKey::GstNote), gst));
    }
    out.push(format!("  {} -> send", app.label(LabelKey::SendInvoice)));
    Ok(())
}

fn render_clients(app: &BusinessManagerApp, out: &mut Vec<String>) -> Result<()> {
    let client_service = &app.backend.client_service;
    let stats = client_service.stats()?;
    title(out, app.label(LabelKey::Clients));
    out.push(format!(
        "  {}: {}  {}: {}  {}: {}",
        app.label(LabelKey::TotalClients),
        stats.total_clients,
        app.label(LabelKey::ActiveClients),
        stats.active_clients,
        app.label(LabelKey::Outstanding),
        money(app, stats.total_outstanding)
    ));

    let clients = client_service.search(&app.ui.search_query)?;
    if clients.is_empty() {
        out.push(format!("  {}", app.label(LabelKey::NoClients)));
    }
    for client in &clients {
        let balance = if client.outstanding > 0 {
            format!("{} {}", app.label(LabelKey::Outstanding), money(app, client.outstanding))
        } else {
            app.label(LabelKey::Paid).to_string()
        };
        out.push(format!(
            "  ({}) [{}] {}, {} {}  {}  {}: {}",
            initials(&client.name),
            client.id,
            client.name,
            client.city,
            client.phone,
            balance,
            app.label(LabelKey::LastOrder),
            client.last_order
        ));
    }
    Ok(())
}

fn render_reports(app: &BusinessManagerApp, out: &mut Vec<String>) -> Result<()> {
    title(out, app.label(LabelKey::Reports));

    let tabs: Vec<String> = ReportTab::ALL
        .iter()
        .map(|&tab| {
            let label = app.label(report_tab_label(tab));
            if tab == app.ui.report_tab {
                format!("[{}]", label)
            } else {
                format!(" {} ", label)
            }
        })
        .collect();
    out.push(tabs.join("  "));

    match app.ui.report_tab {
        ReportTab::LowStock => render_low_stock_tab(app, out),
        ReportTab::Receivables => render_receivables_tab(app, out),
    }
}

fn report_tab_label(tab: ReportTab) -> LabelKey {
    match tab {
        ReportTab::LowStock => LabelKey::LowStock,
        ReportTab::Receivables => LabelKey::Receivables,
    }
}

fn render_low_stock_tab(app: &BusinessManagerApp, out: &mut Vec<String>) -> Result<()> {
    let reports = &app.backend.report_service;

    out.push(format!("{}:", app.label(LabelKey::InventoryValue)));
    for share in reports.inventory_value_shares()? {
        out.push(format!("  {:<10} {:>3}%", share.category, share.percent));
    }

    out.push(format!("{}:", app.label(LabelKey::CriticalStock)));
    for entry in reports.low_stock_report()? {
        let urgency = match entry.urgency {
            LowStockUrgency::Out => app.label(LabelKey::OutOfStock),
            LowStockUrgency::Critical => app.label(LabelKey::CriticalStock),
            LowStockUrgency::Low => app.label(LabelKey::LowStock),
        };
        out.push(format!(
            "  {:<20} {}/{}  {}  {}",
            entry.name,
            entry.stock,
            entry.threshold,
            money(app, entry.value),
            urgency
        ));
    }
    Ok(())
}

fn render_receivables_tab(app: &BusinessManagerApp, out: &mut Vec<String>) -> Result<()> {
    let reports = &app.backend.report_service;
    let sales = reports.sales()?;

    out.push(format!(
        "{} ({} {}):",
        app.label(LabelKey::SalesReport),
        app.label(LabelKey::Target),
        sales
            .first()
            .map(|point| money(app, point.target))
            .unwrap_or_default()
    ));
    for point in &sales {
        let marker = if point.sales >= point.target { "^" } else { "v" };
        out.push(format!("  {:<4} {:>10} {}", point.month, money(app, point.sales), marker));
    }

    out.push(format!("{}:", app.label(LabelKey::Receivables)));
    for receivable in reports.receivables()? {
        let status = match receivable.status {
            ReceivableStatus::Overdue => app.label(LabelKey::Overdue),
            ReceivableStatus::Pending => app.label(LabelKey::Pending),
        };
        out.push(format!(
            "  {:<20} {:>10}  {}d  {}",
            receivable.client,
            money(app, receivable.amount),
            receivable.days,
            status
        ));
    }
    Ok(())
}

fn render_profile(app: &BusinessManagerApp, out: &mut Vec<String>) -> Result<()> {
    title(out, app.label(LabelKey::Profile));
    if let Some(profile) = app.session.profile() {
        out.push(format!("  {}: {}", app.label(LabelKey::ShopName), profile.shop_name));
        out.push(format!("  {}: {}", app.label(LabelKey::OwnerName), profile.owner_name));
        out.push(format!(
            "  {}: {}",
            app.label(LabelKey::WhatsappPhone),
            profile.whatsapp_phone
        ));
        out.push(format!("  {}: {}", app.label(LabelKey::City), profile.city));
        if let Some(gst) = &profile.gst_number {
            out.push(format!("  {}: {}", app.label(LabelKey::GstNumber), gst));
        }
    }

    out.push(format!("{}:", app.label(LabelKey::Earnings)));
    for month in app.backend.report_service.monthly_earnings()? {
        out.push(format!(
            "  {:<4} {:>10} -> {:>10}",
            month.month,
            money(app, month.last_month),
            money(app, month.this_month)
        ));
    }

    out.push(format!("{}:", app.label(LabelKey::LowInventory)));
    let language = app.session.language();
    for product in app.backend.catalog_service.low_stock_products()? {
        out.push(format!(
            "  [{}] {} ({} {})",
            product.id,
            product.display_name(language),
            product.stock,
            app.label(LabelKey::Pieces)
        ));
    }
    out.push(format!("  {} -> settings open", app.label(LabelKey::Settings)));
    Ok(())
}

fn section_label(section: SettingsSection) -> LabelKey {
    match section {
        SettingsSection::BusinessInfo => LabelKey::BusinessInfo,
        SettingsSection::WhatsappIntegration => LabelKey::WhatsappIntegration,
        SettingsSection::Language => LabelKey::Language,
        SettingsSection::ExportData => LabelKey::ExportData,
    }
}

fn render_settings(app: &BusinessManagerApp, out: &mut Vec<String>) {
    title(out, app.label(LabelKey::Settings));
    for section in SettingsSection::ALL {
        let expanded = app.settings.expanded == Some(section);
        out.push(format!(
            "{} {}",
            if expanded { "v" } else { ">" },
            app.label(section_label(section))
        ));
        if expanded {
            render_settings_section(app, section, out);
        }
    }
}

fn render_settings_section(app: &BusinessManagerApp, section: SettingsSection, out: &mut Vec<String>) {
    match section {
        SettingsSection::BusinessInfo => {
            let form = &app.settings.form;
            let profile = app.session.profile();
            let value = |editing: &str, stored: Option<&str>| -> String {
                if app.settings.editing {
                    editing.to_string()
                } else {
                    stored.unwrap_or("").to_string()
                }
            };
            out.push(format!(
                "    {}: {}",
                app.label(LabelKey::ShopName),
                value(&form.shop_name, profile.map(|p| p.shop_name.as_str()))
            ));
            out.push(format!(
                "    {}: {}",
                app.label(LabelKey::OwnerName),
                value(&form.owner_name, profile.map(|p| p.owner_name.as_str()))
            ));
            out.push(format!(
                "    {}: {}",
                app.label(LabelKey::City),
                value(&form.city, profile.map(|p| p.city.as_str()))
            ));
            out.push(format!(
                "    {}: {}",
                app.label(LabelKey::GstNumber),
                value(&form.gst_number, profile.and_then(|p| p.gst_number.as_deref()))
            ));
            if app.settings.editing {
                out.push(format!(
                    "    {} -> settings save | {} -> settings cancel",
                    app.label(LabelKey::Save),
                    app.label(LabelKey::Cancel)
                ));
            } else {
                out.push(format!("    {} -> settings edit", app.label(LabelKey::Edit)));
            }
        }
        SettingsSection::WhatsappIntegration => {
            let phone = app
                .session
                .profile()
                .map(|p| p.whatsapp_phone.as_str())
                .unwrap_or("");
            out.push(format!("    {}: {}", app.label(LabelKey::WhatsappPhone), phone));
        }
        SettingsSection::Language => {
            for language in shared::Language::ALL {
                let marker = if language == app.session.language() { "*" } else { " " };
                out.push(format!(
                    "    ({}) {} -> lang {}",
                    marker,
                    language.native_name(),
                    language.code()
                ));
            }
        }
        SettingsSection::ExportData => {
            out.push("    export inventory | export clients | export invoice".to_string());
        }
    }
}

fn render_bottom_nav(app: &BusinessManagerApp, out: &mut Vec<String>) {
    let items = bottom_nav_items(&app.session);
    if items.is_empty() {
        return;
    }
    let bar: Vec<String> = items
        .iter()
        .map(|item| {
            if item.active {
                format!("[{}]", app.label(item.label))
            } else {
                app.label(item.label).to_string()
            }
        })
        .collect();
    out.push(RULE.to_string());
    out.push(bar.join("  "));
}

fn render_messages(app: &BusinessManagerApp, out: &mut Vec<String>) {
    if let Some(message) = &app.ui.success_message {
        out.push(format!("OK: {}", message));
    }
    if let Some(message) = &app.ui.error_message {
        out.push(format!("Error: {}", message));
    }
    if app.ui.show_help {
        out.extend(help_lines().into_iter().map(|line| format!("  {}", line)));
    }
}
