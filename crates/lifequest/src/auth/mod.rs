//! Authentication: password hashing, bearer tokens and route guards.
//!
//! Tokens are HS256 JWTs signed with `Config::jwt_secret`. Handlers opt in
//! by taking [`CurrentUser`] or [`AdminUser`] as an argument.

mod extractors;
mod password;
mod token;

pub use extractors::{AdminUser, CurrentUser};
pub use password::{hash_password, verify_password};
pub use token::{decode_token, issue_token};
