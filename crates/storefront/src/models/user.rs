//! User domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pomelo_core::{Email, Role, UserId};

/// A storefront account.
///
/// At most one user is active per session; absence means anonymous. The
/// record is persisted wholesale under the `user` key on every change and
/// removed on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// Display name.
    pub name: String,
    /// Avatar image URL, if one was generated at signup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Account role.
    pub role: Role,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_roundtrip() {
        let user = User {
            id: UserId::new("u-1"),
            email: Email::parse("jane@example.com").unwrap(),
            name: "Jane".to_owned(),
            avatar: None,
            role: Role::Customer,
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&user).unwrap();
        // Absent avatar stays absent rather than serializing as null
        assert!(!json.contains("avatar"));

        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, user);
    }
}
