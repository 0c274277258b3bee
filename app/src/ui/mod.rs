//! Terminal shell: state, command handling and plain-text screens.

pub mod app_coordinator;
pub mod app_state;
pub mod commands;
pub mod navigation;
pub mod renderer;
pub mod state;

pub use app_state::BusinessManagerApp;
pub use commands::{Command, CommandError};
pub use renderer::render;
