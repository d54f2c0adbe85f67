//! User domain
//!
//! This module provides the user entity, field validation and the
//! repository trait implemented by the in-memory store.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserDraft, UserId};
pub use repository::UserRepository;
pub use validation::{validate_age, validate_email, validate_name, UserValidationError};

#[cfg(test)]
pub use repository::MockUserRepository;
