//! Diary entry repository for database operations

use super::{EntryRecord, EntryRepository, RepositoryResult};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL-backed entry store
#[derive(Clone)]
pub struct PgEntryRepository {
    pool: PgPool,
}

impl PgEntryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntryRepository for PgEntryRepository {
    async fn create_entry(&self, user_id: Uuid, content: &str) -> RepositoryResult<EntryRecord> {
        let entry = sqlx::query_as::<_, EntryRecord>(
            r#"
            INSERT INTO entries (user_id, content)
            VALUES ($1, $2)
            RETURNING id, user_id, content, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(entry)
    }

    async fn list_by_user(&self, user_id: Uuid) -> RepositoryResult<Vec<EntryRecord>> {
        // seq breaks ties between entries written in the same microsecond
        let entries = sqlx::query_as::<_, EntryRecord>(
            r#"
            SELECT id, user_id, content, created_at, updated_at
            FROM entries
            WHERE user_id = $1
            ORDER BY created_at ASC, seq ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn find_for_user(
        &self,
        user_id: Uuid,
        entry_id: Uuid,
    ) -> RepositoryResult<Option<EntryRecord>> {
        let entry = sqlx::query_as::<_, EntryRecord>(
            r#"
            SELECT id, user_id, content, created_at, updated_at
            FROM entries
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(entry_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entry)
    }
}
