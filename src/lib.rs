//! User Registry API
//!
//! An in-memory user registry served over HTTP:
//! - Create, read, update and delete users under `/api/v1/users`
//! - Store-assigned integer ids and unique emails under concurrent access
//! - Count and clear operations, optional sample data at startup

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::UserRepository;
use infrastructure::user::InMemoryUserRepository;

/// Create application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create application state: build the store, hand it to the state and
/// load the sample users when enabled
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let repository: Arc<dyn UserRepository> =
        Arc::new(InMemoryUserRepository::with_seed(config.store.seed));
    let state = AppState::new(repository);

    if config.store.sample_data {
        state.user_service.seed_sample_users().await?;
    }

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_app_state_with_sample_data() {
        let state = create_app_state().await.unwrap();

        assert_eq!(state.user_service.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_create_app_state_without_sample_data() {
        let mut config = AppConfig::default();
        config.store.sample_data = false;
        config.store.seed = 50;

        let state = create_app_state_with_config(&config).await.unwrap();
        assert_eq!(state.user_service.count().await.unwrap(), 0);

        let user = state
            .user_service
            .create(infrastructure::user::UserRequest::new("Eve", "eve@x.com", 22))
            .await
            .unwrap();
        assert_eq!(user.id().value(), 50);
    }
}
