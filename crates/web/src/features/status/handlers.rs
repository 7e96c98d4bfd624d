use axum::{Json, extract::State};
use storage::dto::status::DbStatusResponse;

use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/db-status",
    responses(
        (status = 200, description = "Active backend and whether it is usable", body = DbStatusResponse)
    ),
    tag = "status"
)]
pub async fn db_status(State(state): State<AppState>) -> Json<DbStatusResponse> {
    Json(state.status())
}
