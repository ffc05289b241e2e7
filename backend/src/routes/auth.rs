//! Authentication routes
//!
//! Provides endpoints for user registration and login. Input is validated
//! here, before any store access.

use crate::error::{ApiError, ApiResult};
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use diary_shared::{AuthenticationInput, LoginResponse, RegisterResponse, UserProfile};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user
///
/// POST /auth/register
async fn register(
    State(state): State<AppState>,
    payload: Result<Json<AuthenticationInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let Json(input) = payload?;
    let credentials = input.into_credentials().map_err(ApiError::Validation)?;

    let user = UserService::register(state.users(), credentials).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user: UserProfile {
                id: user.id.to_string(),
                username: user.username,
                created_at: user.created_at,
            },
        }),
    ))
}

/// Login with username and password
///
/// POST /auth/login
async fn login(
    State(state): State<AppState>,
    payload: Result<Json<AuthenticationInput>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(input) = payload?;
    let credentials = input.into_credentials().map_err(ApiError::Validation)?;

    let jwt = UserService::login(state.users(), state.jwt(), credentials).await?;
    Ok(Json(LoginResponse { jwt }))
}
