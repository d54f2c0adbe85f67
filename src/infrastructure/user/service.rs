//! User service for registry operations

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::user::{User, UserDraft, UserId, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::observability::{record_store_operation, set_user_count};

/// Request for creating or updating a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRequest {
    pub name: String,
    pub email: String,
    pub age: i64,
}

impl UserRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
        }
    }

    fn into_draft(self) -> Result<UserDraft, DomainError> {
        Ok(UserDraft::new(self.name, self.email, self.age)?)
    }
}

/// Users loaded at startup when sample data is enabled
pub fn sample_users() -> Vec<UserRequest> {
    vec![
        UserRequest::new("John Doe", "john@example.com", 30),
        UserRequest::new("Jane Smith", "jane@example.com", 25),
    ]
}

/// User service over a shared repository handle
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Create a new user service
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Create a new user
    pub async fn create(&self, request: UserRequest) -> Result<User, DomainError> {
        let result = match request.into_draft() {
            Ok(draft) => self.repository.create(draft).await,
            Err(e) => Err(e),
        };
        self.observe("create", &result);

        let user = result?;
        info!(id = %user.id(), email = %user.email(), "User created");
        self.refresh_user_gauge().await;

        Ok(user)
    }

    /// List all users in insertion order
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        let result = self.repository.list().await;
        self.observe("list", &result);
        result
    }

    /// Get a user by ID
    pub async fn get(&self, id: UserId) -> Result<User, DomainError> {
        debug!(id = %id, "Getting user");

        let result = self.repository.get(id).await;
        self.observe("get", &result);
        result
    }

    /// Replace a user's name, email and age
    pub async fn update(&self, id: UserId, request: UserRequest) -> Result<User, DomainError> {
        let result = match request.into_draft() {
            Ok(draft) => self.repository.update(id, draft).await,
            Err(e) => Err(e),
        };
        self.observe("update", &result);

        let user = result?;
        info!(id = %id, "User updated");

        Ok(user)
    }

    /// Delete a user
    pub async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        let result = self.repository.delete(id).await;
        self.observe("delete", &result);

        result?;
        info!(id = %id, "User deleted");
        self.refresh_user_gauge().await;

        Ok(())
    }

    /// Count users
    pub async fn count(&self) -> Result<usize, DomainError> {
        let result = self.repository.count().await;
        self.observe("count", &result);
        result
    }

    /// Remove all users and restart id assignment
    pub async fn clear(&self) -> Result<(), DomainError> {
        let result = self.repository.clear().await;
        self.observe("clear", &result);

        result?;
        info!("All users cleared");
        self.refresh_user_gauge().await;

        Ok(())
    }

    /// Load the sample users through the regular create path
    pub async fn seed_sample_users(&self) -> Result<Vec<User>, DomainError> {
        let mut created = Vec::new();

        for request in sample_users() {
            created.push(self.create(request).await?);
        }

        info!(count = created.len(), "Sample users loaded");
        Ok(created)
    }

    fn observe<T>(&self, operation: &'static str, result: &Result<T, DomainError>) {
        match result {
            Ok(_) => record_store_operation(operation, "ok"),
            Err(e) => {
                debug!(operation, error = %e, "User operation rejected");
                record_store_operation(operation, e.kind());
            }
        }
    }

    async fn refresh_user_gauge(&self) {
        match self.repository.count().await {
            Ok(count) => set_user_count(count),
            Err(e) => warn!(error = %e, "Failed to refresh user gauge"),
        }
    }
}
