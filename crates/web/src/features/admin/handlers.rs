use axum::{Json, extract::State};
use storage::dto::admin::{LoginRequest, LoginResponse};

use crate::error::{WebError, WebResult};
use crate::extract::JsonBody;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Password accepted", body = LoginResponse),
        (status = 401, description = "Wrong password")
    ),
    tag = "admin"
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> WebResult<Json<LoginResponse>> {
    if !state.admin().verify(&req.password) {
        tracing::warn!("Invalid admin password attempt");
        return Err(WebError::Unauthorized);
    }

    Ok(Json(LoginResponse {
        authenticated: true,
    }))
}
