use anyhow::Context;
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use lifequest_core::account::{Claims, User};

use crate::{config::Config, handlers::AppError};

/// Signs a bearer token for `user`, valid for `config.token_ttl()`.
pub fn issue_token(user: &User, config: &Config, now: DateTime<Utc>) -> Result<String, AppError> {
    let claims = Claims::new(user, now, config.token_ttl());
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .context("failed to sign token")?;
    Ok(token)
}

/// Verifies a bearer token's signature and expiry.
pub fn decode_token(token: &str, config: &Config, now: DateTime<Utc>) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )
    .map_err(|e| {
        tracing::debug!(error = %e, "Rejected bearer token");
        AppError::Unauthorized("Not authorized, token failed".to_string())
    })?
    .claims;

    if claims.is_expired(now) {
        return Err(AppError::Unauthorized(
            "Not authorized, token expired".to_string(),
        ));
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifequest_core::account::Role;

    #[test]
    fn test_issued_token_decodes_to_same_user() {
        let config = Config::default();
        let user = User::new("ash@example.com", "ash", "hash").with_role(Role::Admin);

        let token = issue_token(&user, &config, Utc::now()).unwrap();
        let claims = decode_token(&token, &config, Utc::now()).unwrap();

        assert_eq!(claims.user_id(), Some(user.id));
        assert_eq!(claims.role, Role::Admin);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let user = User::new("ash@example.com", "ash", "hash");
        let other = Config {
            jwt_secret: "someone-else".to_string(),
            ..Config::default()
        };

        let token = issue_token(&user, &other, Utc::now()).unwrap();

        assert!(matches!(
            decode_token(&token, &Config::default(), Utc::now()),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let config = Config::default();
        let user = User::new("ash@example.com", "ash", "hash");
        let issued = Utc::now() - chrono::Duration::hours(config.jwt_expiry_hours + 1);

        let token = issue_token(&user, &config, issued).unwrap();

        assert!(decode_token(&token, &config, Utc::now()).is_err());
    }
}
