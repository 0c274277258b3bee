//! # Session State
//!
//! The single source of truth for "where am I" and "who am I" during a run.
//!
//! ## Responsibilities:
//! - Active screen and free navigation between screens
//! - The shop profile captured at onboarding, and later edits to it
//! - Active display language
//! - Settings drawer and offline banner flags
//! - The in-progress order cart, which survives navigation
//!
//! ## Purpose:
//! Every command handler and screen renderer receives this struct explicitly;
//! nothing reads session data from anywhere else.
//!
//! ## Lifecycle:
//! A session starts `Unauthenticated` on the onboarding screen. Completing
//! onboarding stores the profile and moves it to `Active` for the rest of
//! the run; there is no transition back.

use log::info;
use shared::{Language, Screen, UserProfile};

use crate::backend::domain::models::Cart;

/// Whether onboarding has been completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Unauthenticated,
    Active,
}

/// Navigation, profile and cart state for one run of the app
#[derive(Debug, Clone)]
pub struct SessionState {
    screen: Screen,
    profile: Option<UserProfile>,
    language: Language,
    settings_open: bool,
    offline: bool,

    /// Lines of the order being built
    pub cart: Cart,
}

impl SessionState {
    /// Fresh session on the onboarding screen
    pub fn new(language: Language, offline: bool) -> Self {
        Self {
            screen: Screen::Onboarding,
            profile: None,
            language,
            settings_open: false,
            offline,
            cart: Cart::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn settings_open(&self) -> bool {
        self.settings_open
    }

    pub fn is_offline(&self) -> bool {
        self.offline
    }

    pub fn phase(&self) -> SessionPhase {
        if self.profile.is_some() {
            SessionPhase::Active
        } else {
            SessionPhase::Unauthenticated
        }
    }

    /// Store the profile, switch to its language and land on the dashboard.
    /// The profile is taken as given; the onboarding form validates it.
    pub fn complete_onboarding(&mut self, profile: UserProfile) {
        info!(
            "🏪 Onboarding complete for '{}' ({})",
            profile.shop_name, profile.language
        );
        self.language = profile.language;
        self.profile = Some(profile);
        self.screen = Screen::Dashboard;
    }

    /// Switch to any screen
    pub fn navigate(&mut self, screen: Screen) {
        if self.screen != screen {
            info!("🧭 Navigating {} -> {}", self.screen, screen);
        }
        self.screen = screen;
    }

    /// Change the display language; the stored profile keeps its own value
    pub fn set_language(&mut self, language: Language) {
        info!("🔤 Language set to {}", language);
        self.language = language;
    }

    /// Replace the stored profile wholesale
    pub fn update_profile(&mut self, profile: UserProfile) {
        info!("📝 Profile updated for '{}'", profile.shop_name);
        self.profile = Some(profile);
    }

    pub fn open_settings(&mut self) {
        self.settings_open = true;
    }

    pub fn close_settings(&mut self) {
        self.settings_open = false;
    }

    pub fn set_offline(&mut self, offline: bool) {
        if self.offline != offline {
            info!("📶 Offline mode {}", if offline { "on" } else { "off" });
        }
        self.offline = offline;
    }

    /// Bottom navigation shows once onboarded, except on the onboarding screen
    pub fn shows_bottom_navigation(&self) -> bool {
        self.profile.is_some() && self.screen != Screen::Onboarding
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Language::En, false)
    }
}
