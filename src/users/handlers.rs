use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use crate::{error::ApiError, state::AppState, users::model::UserSummary};

pub fn routes() -> Router<AppState> {
    Router::new().route("/users", get(list_users))
}

/// Diagnostic listing of every account. The password column never leaves
/// the store query.
#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserSummary>>, ApiError> {
    let users = state
        .store
        .list_all()
        .await
        .map_err(|e| ApiError::storage("Failed to fetch users", e))?;
    Ok(Json(users))
}
