use std::sync::OnceLock;

use regex::Regex;
use uuid::Uuid;

use super::{AccountError, DisplayUpdateRequest, RegisterRequest, MAX_DISPLAYED_ITEMS};

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email regex is valid"))
}

/// Lowercases and trims an email address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validates a registration request.
pub fn validate_registration(req: &RegisterRequest) -> Result<(), AccountError> {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AccountError::MissingCredentials);
    }
    if !email_regex().is_match(&normalize_email(&req.email)) {
        return Err(AccountError::InvalidEmail);
    }
    let username_len = req.username.trim().chars().count();
    if !(3..=20).contains(&username_len) {
        return Err(AccountError::InvalidUsername);
    }
    if req.password.chars().count() < 6 {
        return Err(AccountError::PasswordTooShort);
    }
    Ok(())
}

/// Validates a profile display update against the ids the user owns.
pub fn validate_display_update(
    req: &DisplayUpdateRequest,
    owned: &[Uuid],
) -> Result<(), AccountError> {
    if !req.collection_type.eq_ignore_ascii_case("pokemon") {
        return Err(AccountError::InvalidCollectionType(
            req.collection_type.clone(),
        ));
    }
    if req.items.len() > MAX_DISPLAYED_ITEMS {
        return Err(AccountError::TooManyDisplayedItems {
            limit: MAX_DISPLAYED_ITEMS,
        });
    }
    if !req.items.iter().all(|id| owned.contains(id)) {
        return Err(AccountError::NotOwned);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, username: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn accepts_valid_registration() {
        assert!(validate_registration(&request("Abel@Example.com", "abel", "secret1")).is_ok());
    }

    #[test]
    fn rejects_missing_credentials() {
        assert_eq!(
            validate_registration(&request("", "abel", "secret1")),
            Err(AccountError::MissingCredentials)
        );
        assert_eq!(
            validate_registration(&request("a@b.co", "abel", "")),
            Err(AccountError::MissingCredentials)
        );
    }

    #[test]
    fn rejects_bad_email() {
        assert_eq!(
            validate_registration(&request("not-an-email", "abel", "secret1")),
            Err(AccountError::InvalidEmail)
        );
    }

    #[test]
    fn rejects_username_out_of_range() {
        assert_eq!(
            validate_registration(&request("a@b.co", "ab", "secret1")),
            Err(AccountError::InvalidUsername)
        );
        assert_eq!(
            validate_registration(&request("a@b.co", &"x".repeat(21), "secret1")),
            Err(AccountError::InvalidUsername)
        );
    }

    #[test]
    fn rejects_short_password() {
        assert_eq!(
            validate_registration(&request("a@b.co", "abel", "12345")),
            Err(AccountError::PasswordTooShort)
        );
    }

    #[test]
    fn normalize_email_lowercases_and_trims() {
        assert_eq!(normalize_email("  Abel@Example.COM "), "abel@example.com");
    }

    #[test]
    fn display_update_requires_ownership() {
        let owned = vec![Uuid::new_v4(), Uuid::new_v4()];
        let ok = DisplayUpdateRequest {
            collection_type: "pokemon".to_string(),
            items: vec![owned[0]],
        };
        assert!(validate_display_update(&ok, &owned).is_ok());

        let foreign = DisplayUpdateRequest {
            collection_type: "pokemon".to_string(),
            items: vec![owned[0], Uuid::new_v4()],
        };
        assert_eq!(
            validate_display_update(&foreign, &owned),
            Err(AccountError::NotOwned)
        );
    }

    #[test]
    fn display_update_rejects_unknown_collection() {
        let req = DisplayUpdateRequest {
            collection_type: "snoopy".to_string(),
            items: vec![],
        };
        assert_eq!(
            validate_display_update(&req, &[]),
            Err(AccountError::InvalidCollectionType("snoopy".to_string()))
        );
    }

    #[test]
    fn display_update_enforces_limit() {
        let owned: Vec<Uuid> = (0..7).map(|_| Uuid::new_v4()).collect();
        let req = DisplayUpdateRequest {
            collection_type: "pokemon".to_string(),
            items: owned.clone(),
        };
        assert_eq!(
            validate_display_update(&req, &owned),
            Err(AccountError::TooManyDisplayedItems { limit: 6 })
        );
    }
}
