use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::participant::{CreatedResponse, MessageResponse, ParticipantFilter, ParticipantRequest},
    models::{NewParticipant, Participant},
};
use validator::Validate;

use crate::error::WebError;
use crate::extract::JsonBody;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/participants",
    params(ParticipantFilter),
    responses(
        (status = 200, description = "Participants ordered by school, then name", body = Vec<Participant>),
        (status = 500, description = "Backend failure")
    ),
    tag = "participants"
)]
pub async fn list_participants(
    State(state): State<AppState>,
    Query(filter): Query<ParticipantFilter>,
) -> Result<Response, WebError> {
    let participants = services::list_participants(state.store()?, &filter).await?;

    Ok(Json(participants).into_response())
}

#[utoipa::path(
    post,
    path = "/api/participants",
    request_body = ParticipantRequest,
    responses(
        (status = 201, description = "Registration saved", body = CreatedResponse),
        (status = 400, description = "Required fields missing"),
        (status = 500, description = "Backend failure")
    ),
    tag = "participants"
)]
pub async fn create_participant(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ParticipantRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let participant = NewParticipant::from(req);
    let id = services::create_participant(state.store()?, &participant).await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })).into_response())
}

#[utoipa::path(
    put,
    path = "/api/participants/{id}",
    params(
        ("id" = String, Path, description = "Participant identifier")
    ),
    request_body = ParticipantRequest,
    responses(
        (status = 200, description = "Registration replaced", body = MessageResponse),
        (status = 400, description = "Required fields missing"),
        (status = 500, description = "Backend failure")
    ),
    tag = "participants"
)]
pub async fn update_participant(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<ParticipantRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let participant = NewParticipant::from(req);
    services::update_participant(state.store()?, &id, &participant).await?;

    Ok(Json(MessageResponse {
        message: format!("Update succeeded on {}", state.provider()),
    })
    .into_response())
}

#[utoipa::path(
    delete,
    path = "/api/participants/{id}",
    params(
        ("id" = String, Path, description = "Participant identifier")
    ),
    responses(
        (status = 200, description = "Registration deleted, or nothing matched", body = MessageResponse),
        (status = 500, description = "Backend failure or no backend configured")
    ),
    tag = "participants"
)]
pub async fn delete_participant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    services::delete_participant(state.store()?, &id).await?;

    Ok(Json(MessageResponse {
        message: format!("Registration deleted from {}", state.provider()),
    })
    .into_response())
}
