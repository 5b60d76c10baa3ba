use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::progression::Progression;

use super::AccountError;

/// Maximum number of collectibles shown on a profile.
pub const MAX_DISPLAYED_ITEMS: usize = 6;

/// Account role used for route authorization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    WifeOfTheYear,
    #[default]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::WifeOfTheYear => "wife_of_the_year",
            Role::User => "user",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "wife_of_the_year" => Ok(Role::WifeOfTheYear),
            "user" => Ok(Role::User),
            other => Err(AccountError::UnknownRole(other.to_string())),
        }
    }
}

/// A stored account, including its password hash.
///
/// Never serialized directly; responses go through [`PublicUser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    pub progression: Progression,
    /// UserPokemon ids shown on the profile.
    pub displayed_pokemon: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new account with default progression.
    pub fn new(
        email: impl Into<String>,
        username: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            username: username.into(),
            password_hash: password_hash.into(),
            role: Role::User,
            progression: Progression::default(),
            displayed_pokemon: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            email: self.email.clone(),
            username: self.username.clone(),
            role: self.role,
            progression: self.progression.clone(),
            displayed_pokemon: self.displayed_pokemon.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// The account as exposed over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub role: Role,
    #[serde(flatten)]
    pub progression: Progression,
    pub displayed_pokemon: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// JWT claims carried by bearer tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub role: Role,
    /// Issued at (Unix timestamp).
    pub iat: i64,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
}

impl Claims {
    pub fn new(user: &User, issued_at: DateTime<Utc>, ttl: chrono::Duration) -> Self {
        Self {
            sub: user.id.to_string(),
            role: user.role,
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        }
    }

    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }
}

/// Request payload for `POST /api/auth/register`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Request payload for `POST /api/auth/login`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request payload for `PUT /api/users/me/profile/display`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayUpdateRequest {
    pub collection_type: String,
    pub items: Vec<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip_through_str() {
        for role in [Role::Admin, Role::WifeOfTheYear, Role::User] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("root".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serializes_snake_case() {
        let json = serde_json::to_string(&Role::WifeOfTheYear).unwrap();
        assert_eq!(json, "\"wife_of_the_year\"");
    }

    #[test]
    fn test_public_user_hides_password_and_flattens_progression() {
        let user = User::new("abel@example.com", "abel", "$2b$hash");
        let json = serde_json::to_value(user.to_public()).unwrap();

        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["email"], "abel@example.com");
        assert_eq!(json["role"], "user");
        assert_eq!(json["level"], 1);
        assert_eq!(json["xpToNextLevel"], 100);
        assert_eq!(json["temuTokens"], 10);
    }

    #[test]
    fn test_claims_expiry() {
        let user = User::new("a@b.co", "abc", "hash").with_role(Role::Admin);
        let now = Utc::now();
        let claims = Claims::new(&user, now, chrono::Duration::hours(1));

        assert_eq!(claims.user_id(), Some(user.id));
        assert_eq!(claims.role, Role::Admin);
        assert!(!claims.is_expired(now));
        assert!(claims.is_expired(now + chrono::Duration::hours(2)));
    }
}
