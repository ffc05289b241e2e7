//! User service for registration and login
//!
//! Password hashing and verification run on the blocking thread pool.
//! Callers pass already-validated [`Credentials`].

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{UserRecord, UserRepository};
use diary_shared::{AuthError, Credentials};
use secrecy::ExposeSecret;
use tracing::{debug, info};

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user. Does not log the user in.
    pub async fn register(
        users: &dyn UserRepository,
        credentials: Credentials,
    ) -> Result<UserRecord, ApiError> {
        let Credentials { username, password } = credentials;

        if users.username_exists(&username).await? {
            return Err(ApiError::Conflict("Username already taken".to_string()));
        }

        let password_hash = PasswordService::hash_async(password.expose_secret().clone())
            .await
            .map_err(ApiError::Internal)?;

        // A concurrent registration can still win here; the store reports it
        // as UsernameTaken, which maps to the same Conflict.
        let user = users.create_user(&username, &password_hash).await?;

        metrics::counter!("diary_registrations_total").increment(1);
        info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    /// Check credentials and issue a bearer token
    pub async fn login(
        users: &dyn UserRepository,
        jwt_service: &JwtService,
        credentials: Credentials,
    ) -> Result<String, ApiError> {
        let Credentials { username, password } = credentials;

        let Some(user) = users.find_by_username(&username).await? else {
            debug!("Login for unknown username");
            return Err(Self::rejected());
        };

        let valid =
            PasswordService::verify_async(password.expose_secret().clone(), user.password_hash)
                .await
                .map_err(ApiError::Internal)?;

        if !valid {
            debug!(user_id = %user.id, "Login with wrong password");
            return Err(Self::rejected());
        }

        let token = jwt_service.issue(&user.username).map_err(ApiError::Internal)?;

        metrics::counter!("diary_logins_total", "outcome" => "success").increment(1);
        Ok(token)
    }

    fn rejected() -> ApiError {
        metrics::counter!("diary_logins_total", "outcome" => "rejected").increment(1);
        AuthError::InvalidCredentials.into()
    }
}
