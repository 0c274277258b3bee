//! # Shell Commands
//!
//! Parses one line of user input into a [`Command`].
//!
//! ## Syntax:
//! - `onboard <shop>|<owner>|<phone>|<city>[|<gst>]`
//! - `go <screen>`, `lang <en|hi>`, `offline on|off`
//! - `settings open|close|edit|save|cancel|<section>`
//! - `add <id>`, `qty <id> <n>`, `inc <id>`, `dec <id>`
//! - `search <text>`, `mode tap|type`, `client <id>`, `send`
//! - `report lowstock|receivables`
//! - `profile <field>=<value>...` (values may contain spaces)
//! - `export inventory|clients|invoice`, `help`, `quit`

use std::str::FromStr;

use shared::{Language, ParseLanguageError, ParseScreenError, Screen};
use thiserror::Error;

use crate::backend::domain::models::{ProfileField, ProfileForm, ProfileValidationError};
use crate::backend::domain::ExportKind;
use crate::ui::state::{QuickAddMode, ReportTab, SettingsSection};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Nothing to do; type 'help' for commands")]
    Empty,
    #[error("Unknown command '{0}'; type 'help' for commands")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Invalid value '{value}' for {command}")]
    InvalidArgument { command: &'static str, value: String },
    #[error("{0}")]
    Screen(#[from] ParseScreenError),
    #[error("{0}")]
    Language(#[from] ParseLanguageError),
    #[error(transparent)]
    Profile(#[from] ProfileValidationError),
    #[error("Complete onboarding first")]
    NotOnboarded,
    #[error("Onboarding is already complete; use 'profile' to edit the shop details")]
    AlreadyOnboarded,
    #[error("No product with id '{0}'")]
    UnknownProduct(String),
    #[error("No client with id '{0}'")]
    UnknownClient(String),
    #[error("The cart is empty")]
    EmptyCart,
    #[error("Open settings and 'settings edit' before saving")]
    NotEditing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsCommand {
    Open,
    Close,
    Toggle(SettingsSection),
    Edit,
    Save,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Onboard(ProfileForm),
    Go(Screen),
    Lang(Language),
    Settings(SettingsCommand),
    Offline(bool),
    Add(String),
    Qty(String, i64),
    Inc(String),
    Dec(String),
    Search(String),
    Mode(QuickAddMode),
    Client(String),
    Send,
    Report(ReportTab),
    Profile(Vec<(ProfileField, String)>),
    Export(ExportKind),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name.to_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "onboard" => parse_onboard(rest),
            "go" => Ok(Command::Go(required(rest, "go <screen>")?.parse()?)),
            "lang" => Ok(Command::Lang(required(rest, "lang <en|hi>")?.parse()?)),
            "settings" => parse_settings(rest),
            "offline" => match rest.to_lowercase().as_str() {
                "on" => Ok(Command::Offline(true)),
                "off" => Ok(Command::Offline(false)),
                _ => Err(CommandError::Usage("offline on|off")),
            },
            "add" => Ok(Command::Add(required(rest, "add <product-id>")?.to_string())),
            "qty" => parse_qty(rest),
            "inc" => Ok(Command::Inc(required(rest, "inc <product-id>")?.to_string())),
            "dec" => Ok(Command::Dec(required(rest, "dec <product-id>")?.to_string())),
            "search" => Ok(Command::Search(rest.to_string())),
            "mode" => match rest.to_lowercase().as_str() {
                "tap" => Ok(Command::Mode(QuickAddMode::Tap)),
                "type" => Ok(Command::Mode(QuickAddMode::Type)),
                _ => Err(CommandError::Usage("mode tap|type")),
            },
            "client" => Ok(Command::Client(required(rest, "client <client-id>")?.to_string())),
            "send" => Ok(Command::Send),
            "report" => ReportTab::parse(rest)
                .map(Command::Report)
                .ok_or(CommandError::Usage("report lowstock|receivables")),
            "profile" => parse_profile(rest),
            "export" => match rest.to_lowercase().as_str() {
                "inventory" => Ok(Command::Export(ExportKind::Inventory)),
                "clients" => Ok(Command::Export(ExportKind::Clients)),
                "invoice" => Ok(Command::Export(ExportKind::Invoice)),
                _ => Err(CommandError::Usage("export inventory|clients|invoice")),
            },
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn required<'a>(rest: &'a str, usage: &'static str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::Usage(usage))
    } else {
        Ok(rest)
    }
}

fn parse_onboard(rest: &str) -> Result<Command, CommandError> {
    const USAGE: &str = "onboard <shop>|<owner>|<phone>|<city>[|<gst>]";
    let parts: Vec<&str> = rest.split('|').map(str::trim).collect();
    if !(4..=5).contains(&parts.len()) {
        return Err(CommandError::Usage(USAGE));
    }

    Ok(Command::Onboard(ProfileForm {
        shop_name: parts[0].to_string(),
        owner_name: parts[1].to_string(),
        whatsapp_phone: parts[2].to_string(),
        city: parts[3].to_string(),
        gst_number: parts.get(4).map(|gst| gst.to_string()).unwrap_or_default(),
    }))
}

fn parse_settings(rest: &str) -> Result<Command, CommandError> {
    let command = match rest.to_lowercase().as_str() {
        "" | "open" => SettingsCommand::Open,
        "close" => SettingsCommand::Close,
        "edit" => SettingsCommand::Edit,
        "save" => SettingsCommand::Save,
        "cancel" => SettingsCommand::Cancel,
        other => match SettingsSection::parse(other) {
            Some(section) => SettingsCommand::Toggle(section),
            None => {
                return Err(CommandError::Usage(
                    "settings open|close|edit|save|cancel|business|whatsapp|language|export",
                ))
            }
        },
    };
    Ok(Command::Settings(command))
}

fn parse_qty(rest: &str) -> Result<Command, CommandError> {
    const USAGE: &str = "qty <product-id> <quantity>";
    let mut parts = rest.split_whitespace();
    let (Some(id), Some(quantity), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(CommandError::Usage(USAGE));
    };
    let quantity = quantity.parse::<i64>().map_err(|_| CommandError::InvalidArgument {
        command: "qty",
        value: quantity.to_string(),
    })?;
    Ok(Command::Qty(id.to_string(), quantity))
}

/// `field=value` pairs; words without `=` continue the previous value
fn parse_profile(rest: &str) -> Result<Command, CommandError> {
    const USAGE: &str = "profile <field>=<value>... (fields: shop, owner, phone, city, gst)";
    let mut edits: Vec<(ProfileField, String)> = Vec::new();

    for word in rest.split_whitespace() {
        match word.split_once('=') {
            Some((field, value)) => edits.push((field.parse()?, value.to_string())),
            None => match edits.last_mut() {
                Some((_, value)) => {
                    value.push(' ');
                    value.push_str(word);
                }
                None => return Err(CommandError::Usage(USAGE)),
            },
        }
    }

    if edits.is_empty() {
        return Err(CommandError::Usage(USAGE));
    }
    Ok(Command::Profile(edits))
}

/// Command reference shown by `help`
pub fn help_lines() -> Vec<&'static str> {
    vec![
        "onboard <shop>|<owner>|<phone>|<city>[|<gst>]  complete onboarding",
        "go <screen>            dashboard, inventory, quick-add, invoice, clients, reports, profile, settings",
        "lang <en|hi>           switch display language",
        "settings <action>      open, close, edit, save, cancel, business, whatsapp, language, export",
        "offline on|off         toggle the offline banner",
        "add <id>               add one unit of a product to the cart",
        "qty <id> <n>           set a cart quantity (0 removes the line)",
        "inc <id> / dec <id>    change a cart quantity by one",
        "search <text>          filter products or clients (empty clears)",
        "mode tap|type          quick-add input mode",
        "client <id>            choose the invoice client",
        "send                   send the invoice and clear the cart",
        "report <tab>           reports tab: lowstock or receivables",
        "profile f=v ...        edit shop details (shop, owner, phone, city, gst)",
        "export <what>          inventory, clients or invoice",
        "help                   show this list",
        "quit                   leave the app",
    ]
}
