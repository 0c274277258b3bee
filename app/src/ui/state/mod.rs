//! # UI State
//!
//! Grouped state for the terminal shell: the session container plus the
//! smaller per-area states the screens need.

pub mod order_state;
pub mod session_state;
pub mod settings_state;
pub mod ui_state;

pub use order_state::{OrderState, QuickAddMode};
pub use session_state::{SessionPhase, SessionState};
pub use settings_state::{SettingsSection, SettingsState};
pub use ui_state::{ReportTab, UIState};
