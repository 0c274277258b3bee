//! # App State Module
//!
//! Defines the central application struct for the business manager shell.
//!
//! ## Key Types:
//! - `BusinessManagerApp` - Backend plus every piece of UI state
//!
//! ## Purpose:
//! One struct owns the backend services and the session, so command handling
//! and rendering both work from a single source of truth.

use anyhow::Result;
use log::info;

use crate::backend::domain::LabelKey;
use crate::backend::Backend;
use crate::config::AppConfig;
use crate::ui::state::{OrderState, SessionState, SettingsState, UIState};

/// Main application struct for the terminal shell
pub struct BusinessManagerApp {
    pub backend: Backend,
    pub session: SessionState,
    pub order: OrderState,
    pub settings: SettingsState,
    pub ui: UIState,
}

impl BusinessManagerApp {
    /// Create the app over the demo data
    pub fn new(config: &AppConfig) -> Result<Self> {
        info!("🚀 Initializing BusinessManagerApp");
        let backend = Backend::new(config)?;
        Ok(Self::with_backend(backend, config))
    }

    pub fn with_backend(backend: Backend, config: &AppConfig) -> Self {
        Self {
            backend,
            session: SessionState::new(config.default_language, config.start_offline),
            order: OrderState::new(),
            settings: SettingsState::new(),
            ui: UIState::new(),
        }
    }

    /// Label text in the active language
    pub fn label(&self, key: LabelKey) -> &'static str {
        self.backend.labels.get(self.session.language(), key)
    }

    pub fn is_running(&self) -> bool {
        self.ui.running
    }
}
