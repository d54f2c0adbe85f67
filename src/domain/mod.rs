//! Domain layer - entities, validation rules and repository traits

pub mod error;
pub mod user;

pub use error::DomainError;
pub use user::{User, UserDraft, UserId, UserRepository, UserValidationError};

impl From<UserValidationError> for DomainError {
    fn from(err: UserValidationError) -> Self {
        DomainError::validation(err.to_string())
    }
}
