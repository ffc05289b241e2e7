//! In-memory store
//!
//! Implements both repository traits over process-local maps. State lives
//! only as long as the store, so each test gets an isolated database.

use super::{
    EntryRecord, EntryRepository, RepositoryError, RepositoryResult, UserRecord, UserRepository,
};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryStore {
    users: RwLock<HashMap<String, UserRecord>>,
    // Insertion order is creation order
    entries: RwLock<Vec<EntryRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> RepositoryResult<UserRecord> {
        let mut users = self.users.write().await;
        if users.contains_key(username) {
            return Err(RepositoryError::UsernameTaken);
        }

        let now = Utc::now();
        let user = UserRecord {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: now,
            updated_at: now,
        };
        users.insert(username.to_string(), user.clone());

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<UserRecord>> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn username_exists(&self, username: &str) -> RepositoryResult<bool> {
        Ok(self.users.read().await.contains_key(username))
    }
}

#[async_trait]
impl EntryRepository for InMemoryStore {
    async fn create_entry(&self, user_id: Uuid, content: &str) -> RepositoryResult<EntryRecord> {
        let now = Utc::now();
        let entry = EntryRecord {
            id: Uuid::new_v4(),
            user_id,
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.entries.write().await.push(entry.clone());

        Ok(entry)
    }

    async fn list_by_user(&self, user_id: Uuid) -> RepositoryResult<Vec<EntryRecord>> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_for_user(
        &self,
        user_id: Uuid,
        entry_id: Uuid,
    ) -> RepositoryResult<Option<EntryRecord>> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .find(|e| e.id == entry_id && e.user_id == user_id)
            .cloned())
    }
}
