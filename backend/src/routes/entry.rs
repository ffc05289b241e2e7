//! Diary entry API routes
//!
//! Mounted behind `auth_middleware`; every handler receives the caller
//! through the `AuthUser` extractor.

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::repositories::EntryRecord;
use crate::services::EntryService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use diary_shared::{DataResponse, EntryInput, EntryResponse};
use uuid::Uuid;

/// Create entry routes
pub fn entry_routes() -> Router<AppState> {
    Router::new()
        .route("/entry", post(add_entry).get(get_all_entries))
        .route("/entry/:id", get(get_entry))
}

impl From<EntryRecord> for EntryResponse {
    fn from(entry: EntryRecord) -> Self {
        EntryResponse {
            id: entry.id.to_string(),
            user_id: entry.user_id.to_string(),
            content: entry.content,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

/// POST /api/entry - Create an entry owned by the caller
async fn add_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    payload: Result<Json<EntryInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<DataResponse<EntryResponse>>)> {
    let Json(input) = payload?;
    let content = input.into_content().map_err(ApiError::Validation)?;

    let entry =
        EntryService::add_entry(state.users(), state.entries(), &auth.username, &content).await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(entry.into()))))
}

/// GET /api/entry - List the caller's entries, oldest first
async fn get_all_entries(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<DataResponse<Vec<EntryResponse>>>> {
    let entries =
        EntryService::list_entries(state.users(), state.entries(), &auth.username).await?;

    Ok(Json(DataResponse::new(
        entries.into_iter().map(EntryResponse::from).collect(),
    )))
}

/// GET /api/entry/:id - Fetch one of the caller's entries
async fn get_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DataResponse<EntryResponse>>> {
    let entry_id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::BadRequest("Invalid entry id".to_string()))?;

    let entry =
        EntryService::get_entry(state.users(), state.entries(), &auth.username, entry_id).await?;

    Ok(Json(DataResponse::new(entry.into())))
}
