//! Bottom navigation bar and dashboard quick actions.

use shared::Screen;

use crate::backend::domain::LabelKey;
use crate::ui::state::SessionState;

/// One entry of the bottom navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub screen: Screen,
    pub label: LabelKey,
    pub active: bool,
}

const BOTTOM_NAV: [(Screen, LabelKey); 5] = [
    (Screen::Dashboard, LabelKey::Home),
    (Screen::Inventory, LabelKey::Inventory),
    (Screen::QuickAdd, LabelKey::Orders),
    (Screen::Reports, LabelKey::Reports),
    (Screen::Profile, LabelKey::Profile),
];

/// Items for the bottom bar, empty when the bar is hidden
pub fn bottom_nav_items(session: &SessionState) -> Vec<NavItem> {
    if !session.shows_bottom_navigation() {
        return Vec::new();
    }
    BOTTOM_NAV
        .iter()
        .map(|(screen, label)| NavItem {
            screen: *screen,
            label: *label,
            active: session.screen() == *screen,
        })
        .collect()
}

/// Dashboard shortcut to another screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub label: LabelKey,
    pub target: Screen,
}

pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        label: LabelKey::CreateInvoice,
        target: Screen::Invoice,
    },
    QuickAction {
        label: LabelKey::ViewReports,
        target: Screen::Reports,
    },
    QuickAction {
        label: LabelKey::ManageInventory,
        target: Screen::Inventory,
    },
    QuickAction {
        label: LabelKey::AddClient,
        target: Screen::Clients,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Language, UserProfile};

    fn onboarded_session() -> SessionState {
        let mut session = SessionState::default();
        session.complete_onboarding(UserProfile {
            shop_name: "Sharma General Store".to_string(),
            owner_name: "Anil Sharma".to_string(),
            whatsapp_phone: "+91 90000 11111".to_string(),
            city: "Jaipur".to_string(),
            language: Language::En,
            gst_number: None,
        });
        session
    }

    #[test]
    fn test_hidden_before_onboarding() {
        assert!(bottom_nav_items(&SessionState::default()).is_empty());
    }

    #[test]
    fn test_marks_current_screen_active() {
        let mut session = onboarded_session();
        session.navigate(Screen::QuickAdd);

        let items = bottom_nav_items(&session);
        assert_eq!(items.len(), 5);
        let active: Vec<Screen> = items.iter().filter(|i| i.active).map(|i| i.screen).collect();
        assert_eq!(active, vec![Screen::QuickAdd]);
        assert_eq!(items[2].label, LabelKey::Orders);
    }

    #[test]
    fn test_no_active_item_off_the_bar() {
        let mut session = onboarded_session();
        session.navigate(Screen::Invoice);
        assert!(bottom_nav_items(&session).iter().all(|i| !i.active));
    }
}
