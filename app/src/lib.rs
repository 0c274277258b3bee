//! Business manager core for small shops: onboarding, navigation, bilingual
//! labels, order pricing and invoices over a demo catalog.

pub mod backend;
pub mod config;
pub mod ui;

pub use backend::Backend;
pub use config::{AppConfig, ConfigError};
pub use ui::BusinessManagerApp;
