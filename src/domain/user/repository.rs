//! User repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{User, UserDraft, UserId};
use crate::domain::DomainError;

/// Storage for user records.
///
/// Every operation is atomic with respect to every other one. Implementations
/// must perform lookup, uniqueness check and mutation within a single
/// critical section.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user, assigning the next id. Fails with `Conflict` when
    /// another user already has the draft's email.
    async fn create(&self, draft: UserDraft) -> Result<User, DomainError>;

    /// All users in insertion order
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Get a user by id. Fails with `NotFound` when absent.
    async fn get(&self, id: UserId) -> Result<User, DomainError>;

    /// Replace name, email and age of an existing user
    async fn update(&self, id: UserId, draft: UserDraft) -> Result<User, DomainError>;

    /// Remove a user, keeping the order of the remaining ones
    async fn delete(&self, id: UserId) -> Result<(), DomainError>;

    /// Number of stored users
    async fn count(&self) -> Result<usize, DomainError>;

    /// Remove every user and reset id assignment to the seed
    async fn clear(&self) -> Result<(), DomainError>;
}
