//! Domain models that carry behaviour beyond the shared DTOs.

pub mod cart;
pub mod profile_form;

pub use cart::Cart;
pub use profile_form::{ProfileField, ProfileForm, ProfileValidationError};
