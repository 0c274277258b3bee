//! # Labels
//!
//! Bilingual display strings keyed by [`LabelKey`].
//!
//! Each language has one table. A table is checked when it is loaded: every
//! key must have a non-empty entry and no key may appear twice. A missing
//! translation therefore fails at startup instead of showing up as a blank
//! label on some screen.

use std::collections::HashMap;

use log::info;
use shared::Language;
use thiserror::Error;

/// Declares `LabelKey` and `LabelKey::ALL` from one list so the two cannot drift
macro_rules! label_keys {
    ($($key:ident,)+) => {
        /// Every string the screens display
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum LabelKey {
            $($key,)+
        }

        impl LabelKey {
            pub const ALL: &'static [LabelKey] = &[$(LabelKey::$key,)+];
        }
    };
}

label_keys! {
    // App shell and bottom navigation
    AppName,
    Home,
    Inventory,
    Orders,
    Reports,
    Profile,
    // Onboarding
    Welcome,
    Subtitle,
    ShopName,
    OwnerName,
    WhatsappPhone,
    City,
    Language,
    StartTrial,
    Required,
    // Dashboard
    TotalRevenue,
    Outstanding,
    AvgInvoice,
    QuickActions,
    CreateInvoice,
    ViewReports,
    ManageInventory,
    AddClient,
    // Inventory
    InStock,
    LowStock,
    OutOfStock,
    Pieces,
    Price,
    Stock,
    NoProducts,
    // Quick add
    NewOrder,
    TapMode,
    TypeMode,
    Cart,
    Items,
    Total,
    CreateOrder,
    Quantity,
    // Invoice
    InvoiceBuilder,
    InvoiceNumber,
    Date,
    SelectClient,
    Subtotal,
    Gst,
    GrandTotal,
    SendInvoice,
    GstNote,
    EmptyCart,
    // Clients
    Clients,
    Paid,
    TotalClients,
    ActiveClients,
    LastOrder,
    NoClients,
    // Reports
    Receivables,
    CriticalStock,
    Overdue,
    Pending,
    SalesReport,
    InventoryValue,
    Growth,
    Target,
    // Profile
    Earnings,
    LowInventory,
    // Settings
    Settings,
    BusinessInfo,
    WhatsappIntegration,
    ExportData,
    GstNumber,
    Edit,
    Save,
    Cancel,
    // Offline banner
    Offline,
    OfflineMessage,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LabelError {
    #[error("Missing {language} translation for label {key:?}")]
    MissingTranslation { language: Language, key: LabelKey },
    #[error("Duplicate {language} entry for label {key:?}")]
    DuplicateEntry { language: Language, key: LabelKey },
}

/// Validated label table for a single language
#[derive(Debug, Clone)]
pub struct LabelDictionary {
    language: Language,
    entries: HashMap<LabelKey, &'static str>,
}

impl LabelDictionary {
    /// Load the built-in table for a language
    pub fn load(language: Language) -> Result<Self, LabelError> {
        let entries = match language {
            Language::En => ENGLISH,
            Language::Hi => HINDI,
        };
        Self::from_entries(language, entries)
    }

    /// Build a table, rejecting duplicates and gaps
    pub fn from_entries(
        language: Language,
        entries: &[(LabelKey, &'static str)],
    ) -> Result<Self, LabelError> {
        let mut map = HashMap::with_capacity(entries.len());
        for (key, text) in entries {
            if map.insert(*key, *text).is_some() {
                return Err(LabelError::DuplicateEntry { language, key: *key });
            }
        }

        for key in LabelKey::ALL {
            match map.get(key) {
                Some(text) if !text.trim().is_empty() => {}
                _ => return Err(LabelError::MissingTranslation { language, key: *key }),
            }
        }

        Ok(Self { language, entries: map })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn get(&self, key: LabelKey) -> &'static str {
        // Coverage is checked on load, so the fallback is unreachable in practice
        self.entries.get(&key).copied().unwrap_or("?")
    }
}

/// Label tables for every supported language
#[derive(Debug, Clone)]
pub struct Labels {
    english: LabelDictionary,
    hindi: LabelDictionary,
}

impl Labels {
    /// Load and validate all built-in tables
    pub fn load() -> Result<Self, LabelError> {
        let english = LabelDictionary::load(Language::En)?;
        let hindi = LabelDictionary::load(Language::Hi)?;
        info!("🔤 Loaded {} labels for {} languages", LabelKey::ALL.len(), Language::ALL.len());
        Ok(Self { english, hindi })
    }

    pub fn for_language(&self, language: Language) -> &LabelDictionary {
        match language {
            Language::En => &self.english,
            Language::Hi => &self.hindi,
        }
    }

    pub fn get(&self, language: Language, key: LabelKey) -> &'static str {
        self.for_language(language).get(key)
    }
}

const ENGLISH: &[(LabelKey, &str)] = &[
    (LabelKey::AppName, "Business Manager"),
    (LabelKey::Home, "Home"),
    (LabelKey::Inventory, "Inventory"),
    (LabelKey::Orders, "Orders"),
    (LabelKey::Reports, "Reports"),
    (LabelKey::Profile, "Profile"),
    (LabelKey::Welcome, "Welcome to Business Manager"),
    (LabelKey::Subtitle, "Set up your shop in just a few steps"),
    (LabelKey::ShopName, "Shop Name"),
    (LabelKey::OwnerName, "Owner Name"),
    (LabelKey::WhatsappPhone, "WhatsApp Phone"),
    (LabelKey::City, "City"),
    (LabelKey::Language, "Language"),
    (LabelKey::StartTrial, "Start Free Trial"),
    (LabelKey::Required, "This field is required"),
    (LabelKey::TotalRevenue, "Total Revenue"),
    (LabelKey::Outstanding, "Outstanding"),
    (LabelKey::AvgInvoice, "Avg Invoice"),
    (LabelKey::QuickActions, "Quick Actions"),
    (LabelKey::CreateInvoice, "Create Invoice"),
    (LabelKey::ViewReports, "View Reports"),
    (LabelKey::ManageInventory, "Manage Inventory"),
    (LabelKey::AddClient, "Add Client"),
    (LabelKey::InStock, "In Stock"),
    (LabelKey::LowStock, "Low Stock"),
    (LabelKey::OutOfStock, "Out of Stock"),
    (LabelKey::Pieces, "pcs"),
    (LabelKey::Price, "Price"),
    (LabelKey::Stock, "Stock"),
    (LabelKey::NoProducts, "No products found"),
    (LabelKey::NewOrder, "New Order"),
    (LabelKey::TapMode, "Tap"),
    (LabelKey::TypeMode, "Type"),
    (LabelKey::Cart, "Cart"),
    (LabelKey::Items, "items"),
    (LabelKey::Total, "Total"),
    (LabelKey::CreateOrder, "Create Order"),
    (LabelKey::Quantity, "Qty"),
    (LabelKey::InvoiceBuilder, "Invoice Builder"),
    (LabelKey::InvoiceNumber, "Invoice #"),
    (LabelKey::Date, "Date"),
    (LabelKey::SelectClient, "Select Client"),
    (LabelKey::Subtotal, "Subtotal"),
    (LabelKey::Gst, "GST"),
    (LabelKey::GrandTotal, "Grand Total"),
    (LabelKey::SendInvoice, "Send Invoice"),
    (LabelKey::GstNote, "GST number: "),
    (LabelKey::EmptyCart, "No items yet"),
    (LabelKey::Clients, "Clients"),
    (LabelKey::Paid, "Paid"),
    (LabelKey::TotalClients, "Total Clients"),
    (LabelKey::ActiveClients, "Active Clients"),
    (LabelKey::LastOrder, "Last order"),
    (LabelKey::NoClients, "No clients found"),
    (LabelKey::Receivables, "Receivables"),
    (LabelKey::CriticalStock, "Critical Stock"),
    (LabelKey::Overdue, "Overdue"),
    (LabelKey::Pending, "Pending"),
    (LabelKey::SalesReport, "Sales Report"),
    (LabelKey::InventoryValue, "Inventory Value"),
    (LabelKey::Growth, "Growth"),
    (LabelKey::Target, "Target"),
    (LabelKey::Earnings, "Earnings"),
    (LabelKey::LowInventory, "Low Inventory"),
    (LabelKey::Settings, "Settings"),
    (LabelKey::BusinessInfo, "Business Information"),
    (LabelKey::WhatsappIntegration, "WhatsApp Integration"),
    (LabelKey::ExportData, "Export Data"),
    (LabelKey::GstNumber, "GST Number"),
    (LabelKey::Edit, "Edit"),
    (LabelKey::Save, "Save"),
    (LabelKey::Cancel, "Cancel"),
    (LabelKey::Offline, "You are offline"),
    (
        LabelKey::OfflineMessage,
        "Some features may be limited. Data will sync when connection is restored.",
    ),
];

const HINDI: &[(LabelKey, &str)] = &[
    (LabelKey::AppName, "व्यवसाय प्रबंधक"),
    (LabelKey::Home, "होम"),
    (LabelKey::Inventory, "इन्वेंटरी"),
    (LabelKey::Orders, "ऑर्डर"),
    (LabelKey::Reports, "रिपोर्ट"),
    (LabelKey::Profile, "प्रोफ़ाइल"),
    (LabelKey::Welcome, "व्यवसाय प्रबंधक में आपका स्वागत है"),
    (LabelKey::Subtitle, "कुछ ही चरणों में अपनी दुकान सेट करें"),
    (LabelKey::ShopName, "दुकान का नाम"),
    (LabelKey::OwnerName, "मालिक का नाम"),
    (LabelKey::WhatsappPhone, "व्हाट्सएप फोन"),
    (LabelKey::City, "शहर"),
    (LabelKey::Language, "भाषा"),
    (LabelKey::StartTrial, "निःशुल्क परीक्षण शुरू करें"),
    (LabelKey::Required, "यह फ़ील्ड आवश्यक है"),
    (LabelKey::TotalRevenue, "कुल आय"),
    (LabelKey::Outstanding, "बकाया"),
    (LabelKey::AvgInvoice, "औसत चालान"),
    (LabelKey::QuickActions, "त्वरित कार्य"),
    (LabelKey::CreateInvoice, "चालान बनाएं"),
    (LabelKey::ViewReports, "रिपोर्ट देखें"),
    (LabelKey::ManageInventory, "इन्वेंटरी प्रबंधित करें"),
    (LabelKey::AddClient, "ग्राहक जोड़ें"),
    (LabelKey::InStock, "स्टॉक में"),
    (LabelKey::LowStock, "कम स्टॉक"),
    (LabelKey::OutOfStock, "स्टॉक खत्म"),
    (LabelKey::Pieces, "पीस"),
    (LabelKey::Price, "कीमत"),
    (LabelKey::Stock, "स्टॉक"),
    (LabelKey::NoProducts, "कोई उत्पाद नहीं मिला"),
    (LabelKey::NewOrder, "नया ऑर्डर"),
    (LabelKey::TapMode, "टैप"),
    (LabelKey::TypeMode, "टाइप"),
    (LabelKey::Cart, "कार्ट"),
    (LabelKey::Items, "आइटम"),
    (LabelKey::Total, "कुल"),
    (LabelKey::CreateOrder, "ऑर्डर बनाएं"),
    (LabelKey::Quantity, "मात्रा"),
    (LabelKey::InvoiceBuilder, "चालान निर्माता"),
    (LabelKey::InvoiceNumber, "चालान #"),
    (LabelKey::Date, "दिनांक"),
    (LabelKey::SelectClient, "ग्राहक चुनें"),
    (LabelKey::Subtotal, "उप कुल"),
    (LabelKey::Gst, "जीएसटी"),
    (LabelKey::GrandTotal, "कुल योग"),
    (LabelKey::SendInvoice, "चालान भेजें"),
    (LabelKey::GstNote, "जीएसटी नंबर: "),
    (LabelKey::EmptyCart, "अभी कोई आइटम नहीं"),
    (LabelKey::Clients, "ग्राहक"),
    (LabelKey::Paid, "भुगतान"),
    (LabelKey::TotalClients, "कुल ग्राहक"),
    (LabelKey::ActiveClients, "सक्रिय ग्राहक"),
    (LabelKey::LastOrder, "अंतिम ऑर्डर"),
    (LabelKey::NoClients, "कोई ग्राहक नहीं मिला"),
    (LabelKey::Receivables, "प्राप्तियां"),
    (LabelKey::CriticalStock, "महत्वपूर्ण स्टॉक"),
    (LabelKey::Overdue, "देर से"),
    (LabelKey::Pending, "लंबित"),
    (LabelKey::SalesReport, "बिक्री रिपोर्ट"),
    (LabelKey::InventoryValue, "इन्वेंटरी मूल्य"),
    (LabelKey::Growth, "वृद्धि"),
    (LabelKey::Target, "लक्ष्य"),
    (LabelKey::Earnings, "कमाई"),
    (LabelKey::LowInventory, "कम इन्वेंटरी"),
    (LabelKey::Settings, "सेटिंग्स"),
    (LabelKey::BusinessInfo, "व्यवसाय की जानकारी"),
    (LabelKey::WhatsappIntegration, "व्हाट्सएप एकीकरण"),
    (LabelKey::ExportData, "डेटा निर्यात"),
    (LabelKey::GstNumber, "जीएसटी नंबर"),
    (LabelKey::Edit, "संपादित करें"),
    (LabelKey::Save, "सेव करें"),
    (LabelKey::Cancel, "रद्द करें"),
    (LabelKey::Offline, "आप ऑफलाइन हैं"),
    (
        LabelKey::OfflineMessage,
        "कुछ सुविधाएं सीमित हो सकती हैं। कनेक्शन बहाल होने पर डेटा सिंक होगा।",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_complete() {
        for language in Language::ALL {
            let dictionary = LabelDictionary::load(language).unwrap();
            for key in LabelKey::ALL {
                assert!(!dictionary.get(*key).is_empty());
            }
        }
    }

    #[test]
    fn test_all_lists_each_key_once() {
        let unique: std::collections::HashSet<LabelKey> = LabelKey::ALL.iter().copied().collect();
        assert_eq!(unique.len(), LabelKey::ALL.len());
        assert_eq!(LabelKey::ALL.first(), Some(&LabelKey::AppName));
        assert_eq!(LabelKey::ALL.last(), Some(&LabelKey::OfflineMessage));
        assert_eq!(LabelKey::ALL.len(), 74);
    }

    #[test]
    fn test_builtin_tables_cover_same_keys() {
        assert_eq!(ENGLISH.len(), LabelKey::ALL.len());
        assert_eq!(HINDI.len(), LabelKey::ALL.len());
    }

    #[test]
    fn test_missing_translation_is_rejected() {
        let partial = &ENGLISH[..ENGLISH.len() - 1];
        let err = LabelDictionary::from_entries(Language::En, partial).unwrap_err();
        assert_eq!(
            err,
            LabelError::MissingTranslation {
                language: Language::En,
                key: LabelKey::OfflineMessage,
            }
        );
    }

    #[test]
    fn test_blank_translation_is_rejected() {
        let mut entries: Vec<(LabelKey, &'static str)> = HINDI.to_vec();
        entries[1] = (LabelKey::Home, "  ");
        let err = LabelDictionary::from_entries(Language::Hi, &entries).unwrap_err();
        assert!(matches!(err, LabelError::MissingTranslation { key: LabelKey::Home, .. }));
    }

    #[test]
    fn test_duplicate_entry_is_rejected() {
        let mut entries: Vec<(LabelKey, &'static str)> = ENGLISH.to_vec();
        entries.push((LabelKey::Home, "Start"));
        let err = LabelDictionary::from_entries(Language::En, &entries).unwrap_err();
        assert!(matches!(err, LabelError::DuplicateEntry { key: LabelKey::Home, .. }));
    }

    #[test]
    fn test_lookup_follows_language() {
        let labels = Labels::load().unwrap();
        assert_eq!(labels.get(Language::En, LabelKey::Orders), "Orders");
        assert_eq!(labels.get(Language::Hi, LabelKey::Orders), "ऑर्डर");
        assert_eq!(labels.for_language(Language::Hi).language(), Language::Hi);
    }
}
