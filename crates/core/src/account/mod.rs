//! User accounts, roles and credential validation.

mod error;
mod types;
mod validation;

pub use error::AccountError;
pub use types::{
    Claims, DisplayUpdateRequest, LoginRequest, PublicUser, RegisterRequest, Role, User,
    MAX_DISPLAYED_ITEMS,
};
pub use validation::{normalize_email, validate_display_update, validate_registration};
