//! User entity and related types

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::validation::{validate_age, validate_email, validate_name, UserValidationError};
use crate::domain::DomainError;

/// User identifier - integer assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner integer value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl FromStr for UserId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| DomainError::invalid_id(format!("Invalid user ID '{}'", s)))
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated `{name, email, age}` triple used for both create and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    name: String,
    email: String,
    age: i64,
}

impl UserDraft {
    /// Validate the fields and build a draft. Name is checked first, then
    /// email, then age.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        age: i64,
    ) -> Result<Self, UserValidationError> {
        let name = name.into();
        let email = email.into();

        validate_name(&name)?;
        validate_email(&email)?;
        validate_age(age)?;

        Ok(Self { name, email, age })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> i64 {
        self.age
    }
}

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    age: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user from a validated draft, stamping both timestamps
    pub fn new(id: UserId, draft: UserDraft) -> Self {
        let now = Utc::now();

        Self {
            id,
            name: draft.name,
            email: draft.email,
            age: draft.age,
            created_at: now,
            updated_at: now,
        }
    }

    // Getters

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Replace name, email and age. `id` and `created_at` are left alone.
    pub fn apply(&mut self, draft: UserDraft) {
        self.name = draft.name;
        self.email = draft.email;
        self.age = draft.age;
        self.touch();
    }

    fn touch(&mut self) {
        // Clock steps backwards must not break updated_at >= created_at.
        self.updated_at = Utc::now().max(self.created_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user(id: i64, email: &str) -> User {
        let draft = UserDraft::new("John Doe", email, 30).unwrap();
        User::new(UserId::new(id), draft)
    }

    #[test]
    fn test_user_id_parse() {
        let id: UserId = "42".parse().unwrap();
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_user_id_parse_negative() {
        let id: UserId = "-3".parse().unwrap();
        assert_eq!(id.value(), -3);
    }

    #[test]
    fn test_user_id_parse_invalid() {
        let err = "abc".parse::<UserId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId { .. }));
        assert!("".parse::<UserId>().is_err());
        assert!("1.5".parse::<UserId>().is_err());
    }

    #[test]
    fn test_draft_validation_order() {
        assert_eq!(
            UserDraft::new("", "", 0).unwrap_err(),
            UserValidationError::EmptyName
        );
        assert_eq!(
            UserDraft::new("Jane", "", 0).unwrap_err(),
            UserValidationError::EmptyEmail
        );
        assert_eq!(
            UserDraft::new("Jane", "jane@example.com", 0).unwrap_err(),
            UserValidationError::InvalidAge(0)
        );
    }

    #[test]
    fn test_user_creation() {
        let user = create_test_user(1, "john@example.com");

        assert_eq!(user.id(), UserId::new(1));
        assert_eq!(user.name(), "John Doe");
        assert_eq!(user.email(), "john@example.com");
        assert_eq!(user.age(), 30);
        assert_eq!(user.created_at(), user.updated_at());
    }

    #[test]
    fn test_user_apply_keeps_identity() {
        let mut user = create_test_user(7, "john@example.com");
        let created_at = user.created_at();

        std::thread::sleep(std::time::Duration::from_millis(10));

        user.apply(UserDraft::new("Johnny", "johnny@example.com", 31).unwrap());

        assert_eq!(user.id(), UserId::new(7));
        assert_eq!(user.name(), "Johnny");
        assert_eq!(user.email(), "johnny@example.com");
        assert_eq!(user.age(), 31);
        assert_eq!(user.created_at(), created_at);
        assert!(user.updated_at() > created_at);
    }

    #[test]
    fn test_user_serialization_field_names() {
        let user = create_test_user(3, "eve@x.com");
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["name"], "John Doe");
        assert_eq!(json["email"], "eve@x.com");
        assert_eq!(json["age"], 30);
        assert!(json["created_at"].is_string());
        assert!(json["updated_at"].is_string());
        assert_eq!(json.as_object().unwrap().len(), 6);
    }
}
