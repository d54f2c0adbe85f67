//! In-memory user repository implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserDraft, UserId, UserRepository};
use crate::domain::DomainError;

/// Default first id handed out by a fresh store
pub const DEFAULT_ID_SEED: i64 = 1;

/// Records and id counter, always locked together
#[derive(Debug)]
struct UserTable {
    /// Insertion order
    users: Vec<User>,
    next_id: i64,
}

impl UserTable {
    fn new(seed: i64) -> Self {
        Self {
            users: Vec::new(),
            next_id: seed,
        }
    }

    fn position(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|u| u.id() == id)
    }

    fn email_taken(&self, email: &str, exclude: Option<UserId>) -> bool {
        self.users
            .iter()
            .any(|u| u.email() == email && Some(u.id()) != exclude)
    }
}

/// In-memory implementation of UserRepository
///
/// A single readers-writer lock guards the record list and the id counter.
/// Reads share the lock; every mutation takes it exclusively for the whole
/// lookup, check and write sequence.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
    seed: i64,
}

impl InMemoryUserRepository {
    /// Create an empty repository whose first id is [`DEFAULT_ID_SEED`]
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_ID_SEED)
    }

    /// Create an empty repository whose first id is `seed`
    pub fn with_seed(seed: i64) -> Self {
        Self {
            table: Arc::new(RwLock::new(UserTable::new(seed))),
            seed,
        }
    }

    /// The id handed out first, and again after every clear
    pub fn seed(&self) -> i64 {
        self.seed
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, draft: UserDraft) -> Result<User, DomainError> {
        let mut table = self.table.write().await;

        if table.email_taken(draft.email(), None) {
            return Err(DomainError::conflict(format!(
                "Email '{}' already exists",
                draft.email()
            )));
        }

        let id = UserId::new(table.next_id);
        table.next_id = table
            .next_id
            .checked_add(1)
            .ok_or_else(|| DomainError::internal("User ID space exhausted"))?;

        let user = User::new(id, draft);
        table.users.push(user.clone());

        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.users.clone())
    }

    async fn get(&self, id: UserId) -> Result<User, DomainError> {
        let table = self.table.read().await;

        table
            .users
            .iter()
            .find(|u| u.id() == id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))
    }

    async fn update(&self, id: UserId, draft: UserDraft) -> Result<User, DomainError> {
        let mut table = self.table.write().await;

        let index = table
            .position(id)
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))?;

        if table.email_taken(draft.email(), Some(id)) {
            return Err(DomainError::conflict(format!(
                "Email '{}' already exists",
                draft.email()
            )));
        }

        let user = &mut table.users[index];
        user.apply(draft);

        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        let mut table = self.table.write().await;

        let index = table
            .position(id)
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))?;

        // Vec::remove shifts the tail, keeping insertion order.
        table.users.remove(index);

        Ok(())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let table = self.table.read().await;
        Ok(table.users.len())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        let mut table = self.table.write().await;

        table.users.clear();
        table.next_id = self.seed;

        Ok(())
    }
}
