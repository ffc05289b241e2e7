//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction. State is built
//! once at startup from explicit store handles and configuration and is
//! read-only afterwards.

use crate::auth::JwtService;
use crate::config::AppConfig;
use crate::repositories::{
    EntryRepository, InMemoryStore, PgEntryRepository, PgUserRepository, UserRepository,
};
use secrecy::ExposeSecret;
use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state
///
/// All fields are `Arc`s or already cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Credential store
    pub users: Arc<dyn UserRepository>,
    /// Entry store
    pub entries: Arc<dyn EntryRepository>,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Pre-initialized JWT service with cached keys
    pub jwt: JwtService,
}

impl AppState {
    /// Create application state over arbitrary stores
    ///
    /// Derives the JWT keys from the configured secret, so call this once
    /// at startup.
    pub fn new(
        users: Arc<dyn UserRepository>,
        entries: Arc<dyn EntryRepository>,
        config: AppConfig,
    ) -> Self {
        let jwt = JwtService::new(config.jwt.secret.expose_secret(), config.jwt.token_ttl_secs);

        Self {
            users,
            entries,
            config: Arc::new(config),
            jwt,
        }
    }

    /// State backed by PostgreSQL
    pub fn with_postgres(pool: PgPool, config: AppConfig) -> Self {
        Self::new(
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgEntryRepository::new(pool)),
            config,
        )
    }

    /// State backed by a fresh in-memory store
    pub fn in_memory(config: AppConfig) -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::new(store.clone(), store, config)
    }

    #[inline]
    pub fn users(&self) -> &dyn UserRepository {
        self.users.as_ref()
    }

    #[inline]
    pub fn entries(&self) -> &dyn EntryRepository {
        self.entries.as_ref()
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }
}
