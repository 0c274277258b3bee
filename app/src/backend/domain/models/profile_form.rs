//! Editable copy of the shop profile, used by onboarding and the settings drawer.

use std::fmt;
use std::str::FromStr;

use shared::{Language, UserProfile};
use thiserror::Error;

/// Editable profile fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    ShopName,
    OwnerName,
    WhatsappPhone,
    City,
    GstNumber,
}

impl ProfileField {
    /// Fields that must be filled before a profile can be saved
    pub const REQUIRED: [ProfileField; 4] = [
        ProfileField::ShopName,
        ProfileField::OwnerName,
        ProfileField::WhatsappPhone,
        ProfileField::City,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::ShopName => "shop",
            ProfileField::OwnerName => "owner",
            ProfileField::WhatsappPhone => "phone",
            ProfileField::City => "city",
            ProfileField::GstNumber => "gst",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileField {
    type Err = ProfileValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "shop" | "shop_name" => Ok(ProfileField::ShopName),
            "owner" | "owner_name" => Ok(ProfileField::OwnerName),
            "phone" | "whatsapp" | "whatsapp_phone" => Ok(ProfileField::WhatsappPhone),
            "city" => Ok(ProfileField::City),
            "gst" | "gst_number" => Ok(ProfileField::GstNumber),
            other => Err(ProfileValidationError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileValidationError {
    #[error("Required fields are empty: {}", join_fields(.0))]
    MissingFields(Vec<ProfileField>),
    #[error("Unknown profile field: {0}")]
    UnknownField(String),
}

fn join_fields(fields: &[ProfileField]) -> String {
    fields
        .iter()
        .map(ProfileField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Form state for the shop profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub shop_name: String,
    pub owner_name: String,
    pub whatsapp_phone: String,
    pub city: String,
    pub gst_number: String,
}

impl ProfileForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the form from a stored profile
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            shop_name: profile.shop_name.clone(),
            owner_name: profile.owner_name.clone(),
            whatsapp_phone: profile.whatsapp_phone.clone(),
            city: profile.city.clone(),
            gst_number: profile.gst_number.clone().unwrap_or_default(),
        }
    }

    pub fn set_field(&mut self, field: ProfileField, value: &str) {
        let slot = match field {
            ProfileField::ShopName => &mut self.shop_name,
            ProfileField::OwnerName => &mut self.owner_name,
            ProfileField::WhatsappPhone => &mut self.whatsapp_phone,
            ProfileField::City => &mut self.city,
            ProfileField::GstNumber => &mut self.gst_number,
        };
        *slot = value.to_string();
    }

    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::ShopName => &self.shop_name,
            ProfileField::OwnerName => &self.owner_name,
            ProfileField::WhatsappPhone => &self.whatsapp_phone,
            ProfileField::City => &self.city,
            ProfileField::GstNumber => &self.gst_number,
        }
    }

    /// Required fields that are blank after trimming
    pub fn missing_fields(&self) -> Vec<ProfileField> {
        ProfileField::REQUIRED
            .iter()
            .copied()
            .filter(|field| self.field(*field).trim().is_empty())
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Build a complete profile; a blank GST number becomes `None`
    pub fn to_profile(&self, language: Language) -> Result<UserProfile, ProfileValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ProfileValidationError::MissingFields(missing));
        }

        let gst = self.gst_number.trim();
        Ok(UserProfile {
            shop_name: self.shop_name.trim().to_string(),
            owner_name: self.owner_name.trim().to_string(),
            whatsapp_phone: self.whatsapp_phone.trim().to_string(),
            city: self.city.trim().to_string(),
            language,
            gst_number: (!gst.is_empty()).then(|| gst.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ProfileForm {
        ProfileForm {
            shop_name: " Sharma General Store ".to_string(),
            owner_name: "Anil Sharma".to_string(),
            whatsapp_phone: "+91 90000 11111".to_string(),
            city: "Jaipur".to_string(),
            gst_number: String::new(),
        }
    }

    #[test]
    fn test_valid_form_builds_trimmed_profile() {
        let profile = filled_form().to_profile(Language::Hi).unwrap();
        assert_eq!(profile.shop_name, "Sharma General Store");
        assert_eq!(profile.language, Language::Hi);
        assert_eq!(profile.gst_number, None);
    }

    #[test]
    fn test_gst_number_kept_when_present() {
        let mut form = filled_form();
        form.set_field(ProfileField::GstNumber, "08ABCDE1234F1Z5");
        let profile = form.to_profile(Language::En).unwrap();
        assert_eq!(profile.gst_number.as_deref(), Some("08ABCDE1234F1Z5"));
    }

    #[test]
    fn test_blank_required_fields_are_reported() {
        let mut form = filled_form();
        form.set_field(ProfileField::OwnerName, "   ");
        form.set_field(ProfileField::City, "");

        assert!(!form.is_valid());
        let err = form.to_profile(Language::En).unwrap_err();
        assert_eq!(
            err,
            ProfileValidationError::MissingFields(vec![ProfileField::OwnerName, ProfileField::City])
        );
        assert_eq!(err.to_string(), "Required fields are empty: owner, city");
    }

    #[test]
    fn test_empty_form_misses_everything_required() {
        assert_eq!(ProfileForm::new().missing_fields().len(), 4);
    }

    #[test]
    fn test_from_profile_round_trip() {
        let profile = filled_form().to_profile(Language::En).unwrap();
        let form = ProfileForm::from_profile(&profile);
        assert_eq!(form.to_profile(Language::En).unwrap(), profile);
    }

    #[test]
    fn test_parse_field_names() {
        assert_eq!("Shop".parse::<ProfileField>().unwrap(), ProfileField::ShopName);
        assert_eq!("whatsapp".parse::<ProfileField>().unwrap(), ProfileField::WhatsappPhone);
        assert!(matches!(
            "email".parse::<ProfileField>(),
            Err(ProfileValidationError::UnknownField(_))
        ));
    }
}
