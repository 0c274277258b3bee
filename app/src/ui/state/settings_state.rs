//! # Settings State Module
//!
//! State for the settings drawer.
//!
//! ## Responsibilities:
//! - Which section of the drawer is expanded
//! - Edit mode for the business information form
//! - Save and cancel for profile edits
//!
//! ## Purpose:
//! The drawer edits a copy of the profile. Nothing reaches the session until
//! the form is saved, and cancelling restores the copy from the stored profile.

use log::info;
use shared::{Language, UserProfile};

use crate::backend::domain::models::{ProfileField, ProfileForm, ProfileValidationError};

/// Expandable sections of the settings drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSection {
    BusinessInfo,
    WhatsappIntegration,
    Language,
    ExportData,
}

impl SettingsSection {
    pub const ALL: [SettingsSection; 4] = [
        SettingsSection::BusinessInfo,
        SettingsSection::WhatsappIntegration,
        SettingsSection::Language,
        SettingsSection::ExportData,
    ];

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "business" | "business-info" => Some(SettingsSection::BusinessInfo),
            "whatsapp" => Some(SettingsSection::WhatsappIntegration),
            "language" => Some(SettingsSection::Language),
            "export" => Some(SettingsSection::ExportData),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    pub expanded: Option<SettingsSection>,
    pub editing: bool,
    pub form: ProfileForm,
}

impl SettingsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand a section; expanding the open one collapses it
    pub fn toggle_section(&mut self, section: SettingsSection) {
        self.expanded = if self.expanded == Some(section) {
            None
        } else {
            Some(section)
        };
    }

    pub fn begin_edit(&mut self, profile: &UserProfile) {
        self.form = ProfileForm::from_profile(profile);
        self.editing = true;
    }

    pub fn set_field(&mut self, field: ProfileField, value: &str) {
        self.form.set_field(field, value);
    }

    /// Validate the form and leave edit mode; the form stays open on error
    pub fn save(&mut self, language: Language) -> Result<UserProfile, ProfileValidationError> {
        let profile = self.form.to_profile(language)?;
        self.editing = false;
        info!("💾 Settings form saved");
        Ok(profile)
    }

    /// Drop unsaved edits
    pub fn cancel(&mut self, profile: Option<&UserProfile>) {
        self.form = profile.map(ProfileForm::from_profile).unwrap_or_default();
        self.editing = false;
    }

    /// Close the drawer, collapsing everything
    pub fn reset(&mut self) {
        self.expanded = None;
        self.editing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> UserProfile {
        UserProfile {
            shop_name: "Sharma General Store".to_string(),
            owner_name: "Anil Sharma".to_string(),
            whatsapp_phone: "+91 90000 11111".to_string(),
            city: "Jaipur".to_string(),
            language: Language::En,
            gst_number: None,
        }
    }

    #[test]
    fn test_toggle_same_section_collapses() {
        let mut state = SettingsState::new();
        state.toggle_section(SettingsSection::Language);
        assert_eq!(state.expanded, Some(SettingsSection::Language));

        state.toggle_section(SettingsSection::ExportData);
        assert_eq!(state.expanded, Some(SettingsSection::ExportData));

        state.toggle_section(SettingsSection::ExportData);
        assert_eq!(state.expanded, None);
    }

    #[test]
    fn test_edit_and_save() {
        let mut state = SettingsState::new();
        state.begin_edit(&sample_profile());
        state.set_field(ProfileField::City, "Udaipur");

        let saved = state.save(Language::En).unwrap();
        assert_eq!(saved.city, "Udaipur");
        assert!(!state.editing);
    }

    #[test]
    fn test_save_with_blank_field_stays_in_edit_mode() {
        let mut state = SettingsState::new();
        state.begin_edit(&sample_profile());
        state.set_field(ProfileField::ShopName, "");

        assert!(state.save(Language::En).is_err());
        assert!(state.editing);
    }

    #[test]
    fn test_cancel_restores_stored_profile() {
        let profile = sample_profile();
        let mut state = SettingsState::new();
        state.begin_edit(&profile);
        state.set_field(ProfileField::OwnerName, "Someone Else");

        state.cancel(Some(&profile));

        assert_eq!(state.form.owner_name, "Anil Sharma");
        assert!(!state.editing);
    }

    #[test]
    fn test_parse_section_names() {
        assert_eq!(SettingsSection::parse("Business"), Some(SettingsSection::BusinessInfo));
        assert_eq!(SettingsSection::parse("export"), Some(SettingsSection::ExportData));
        assert_eq!(SettingsSection::parse("printer"), None);
    }
}
