//! User validation utilities

use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    #[error("Name is required")]
    EmptyName,

    #[error("Email is required")]
    EmptyEmail,

    #[error("Age must be greater than 0 (got {0})")]
    InvalidAge(i64),
}

/// Validate a user's display name
///
/// Any non-empty text is accepted; the comparison is exact, so a name made
/// only of whitespace is still a name.
pub fn validate_name(name: &str) -> Result<(), UserValidationError> {
    if name.is_empty() {
        return Err(UserValidationError::EmptyName);
    }

    Ok(())
}

/// Validate an email address
///
/// Only presence is checked. Uniqueness is enforced by the store.
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.is_empty() {
        return Err(UserValidationError::EmptyEmail);
    }

    Ok(())
}

/// Validate an age, which must be strictly positive
pub fn validate_age(age: i64) -> Result<(), UserValidationError> {
    if age <= 0 {
        return Err(UserValidationError::InvalidAge(age));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("John Doe").is_ok());
        assert!(validate_name(" ").is_ok());
        assert_eq!(validate_name(""), Err(UserValidationError::EmptyName));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("john@example.com").is_ok());
        assert_eq!(validate_email(""), Err(UserValidationError::EmptyEmail));
    }

    #[test]
    fn test_validate_age() {
        assert!(validate_age(1).is_ok());
        assert!(validate_age(130).is_ok());
        assert_eq!(validate_age(0), Err(UserValidationError::InvalidAge(0)));
        assert_eq!(validate_age(-5), Err(UserValidationError::InvalidAge(-5)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(UserValidationError::EmptyName.to_string(), "Name is required");
        assert_eq!(UserValidationError::EmptyEmail.to_string(), "Email is required");
        assert_eq!(
            UserValidationError::InvalidAge(0).to_string(),
            "Age must be greater than 0 (got 0)"
        );
    }
}
