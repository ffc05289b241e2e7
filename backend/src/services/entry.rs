//! Diary entry service
//!
//! Every operation is scoped to the authenticated username. The owner is
//! looked up on each call, so a token for a user that no longer exists
//! is treated as unauthenticated.

use crate::error::ApiError;
use crate::repositories::{EntryRecord, EntryRepository, UserRecord, UserRepository};
use tracing::info;
use uuid::Uuid;

pub struct EntryService;

impl EntryService {
    pub async fn add_entry(
        users: &dyn UserRepository,
        entries: &dyn EntryRepository,
        username: &str,
        content: &str,
    ) -> Result<EntryRecord, ApiError> {
        let owner = Self::resolve_owner(users, username).await?;
        let entry = entries.create_entry(owner.id, content).await?;

        metrics::counter!("diary_entries_created_total").increment(1);
        info!(entry_id = %entry.id, user_id = %owner.id, "Entry created");

        Ok(entry)
    }

    /// All of the caller's entries, oldest first
    pub async fn list_entries(
        users: &dyn UserRepository,
        entries: &dyn EntryRepository,
        username: &str,
    ) -> Result<Vec<EntryRecord>, ApiError> {
        let owner = Self::resolve_owner(users, username).await?;
        Ok(entries.list_by_user(owner.id).await?)
    }

    /// One of the caller's entries. Other users' entries are reported as
    /// not found.
    pub async fn get_entry(
        users: &dyn UserRepository,
        entries: &dyn EntryRepository,
        username: &str,
        entry_id: Uuid,
    ) -> Result<EntryRecord, ApiError> {
        let owner = Self::resolve_owner(users, username).await?;
        entries
            .find_for_user(owner.id, entry_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Entry not found".to_string()))
    }

    async fn resolve_owner(
        users: &dyn UserRepository,
        username: &str,
    ) -> Result<UserRecord, ApiError> {
        users
            .find_by_username(username)
            .await?
            .ok_or_else(|| ApiError::Unauthenticated("User no longer exists".to_string()))
    }
}
