//! User & Order Service
//!
//! A small HTTP service over two in-memory collections:
//! - A user directory with name and email validation
//! - An order ledger computing totals with fixed tax and discount

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use tracing::info;

use api::state::{AppState, UserDirectoryTrait};

/// Users loaded into an empty directory when demo seeding is enabled
const DEMO_USERS: [(&str, &str); 2] = [("Alice", "alice@example.com"), ("Bob", "bob@example.com")];

/// Build the application state from configuration
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let state = AppState::in_memory();

    if config.seed.demo_users {
        seed_demo_users(state.user_directory.as_ref()).await?;
    }

    Ok(state)
}

/// Create the demo users unless the directory already has users
async fn seed_demo_users(directory: &dyn UserDirectoryTrait) -> anyhow::Result<()> {
    if directory.count().await? > 0 {
        return Ok(());
    }

    for (name, email) in DEMO_USERS {
        directory.create(Some(name), Some(email)).await?;
    }

    info!("Seeded {} demo users", DEMO_USERS.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeedConfig;
    use crate::domain::user::UserId;

    #[tokio::test]
    async fn test_create_app_state_seeds_demo_users() {
        let state = create_app_state(&AppConfig::default()).await.unwrap();

        let users = state.user_directory.list_all().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id(), UserId::new(1));
        assert_eq!(users[0].email(), Some("alice@example.com"));
        assert_eq!(users[1].name(), "Bob");

        // Next user continues after the seeded ids
        let carol = state.user_directory.create(Some("Carol"), None).await.unwrap();
        assert_eq!(carol.id(), UserId::new(3));
    }

    #[tokio::test]
    async fn test_create_app_state_without_seed() {
        let config = AppConfig {
            seed: SeedConfig { demo_users: false },
            ..AppConfig::default()
        };

        let state = create_app_state(&config).await.unwrap();
        assert_eq!(state.user_directory.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_seeding_is_skipped_for_populated_directory() {
        let state = AppState::in_memory();
        state.user_directory.create(Some("Zed"), None).await.unwrap();

        seed_demo_users(state.user_directory.as_ref()).await.unwrap();
        assert_eq!(state.user_directory.count().await.unwrap(), 1);
    }
}
