//! Database repositories
//!
//! Handlers depend on the [`UserRepository`] and [`EntryRepository`]
//! traits only. `PgUserRepository`/`PgEntryRepository` back them with
//! PostgreSQL; [`InMemoryStore`] backs both for tests and local runs.
//! Neither implementation caches: every call reads the store.

pub mod entry;
pub mod memory;
pub mod user;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

pub use entry::PgEntryRepository;
pub use memory::InMemoryStore;
pub use user::PgUserRepository;

/// Repository error types
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("username already taken")]
    UsernameTaken,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// User record from the store
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Diary entry record from the store
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct EntryRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Credential store
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user. Fails with `UsernameTaken` if the name is in use.
    async fn create_user(&self, username: &str, password_hash: &str)
        -> RepositoryResult<UserRecord>;

    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<UserRecord>>;

    async fn username_exists(&self, username: &str) -> RepositoryResult<bool>;

    /// Cheap liveness probe against the backing store
    async fn health_check(&self) -> RepositoryResult<()> {
        Ok(())
    }
}

/// Entry store
#[async_trait]
pub trait EntryRepository: Send + Sync {
    async fn create_entry(&self, user_id: Uuid, content: &str) -> RepositoryResult<EntryRecord>;

    /// All entries owned by `user_id`, oldest first
    async fn list_by_user(&self, user_id: Uuid) -> RepositoryResult<Vec<EntryRecord>>;

    /// A single entry, only if owned by `user_id`
    async fn find_for_user(
        &self,
        user_id: Uuid,
        entry_id: Uuid,
    ) -> RepositoryResult<Option<EntryRecord>>;
}
