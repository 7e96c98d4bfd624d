use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use storage::dto::participant::ParticipantFilter;

use crate::error::WebResult;
use crate::state::AppState;

use super::services::{self, CSV_FILENAME, PDF_FILENAME, SQL_FILENAME};

fn attachment(content_type: &'static str, filename: &str, body: impl IntoResponse) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", filename),
            ),
        ],
        body,
    )
        .into_response()
}

/// Downloads answer failures as plain text, not JSON.
fn download(
    result: WebResult<impl IntoResponse>,
    content_type: &'static str,
    filename: &str,
) -> Response {
    match result {
        Ok(body) => attachment(content_type, filename, body),
        Err(e) => {
            tracing::error!("Export failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to export database",
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/export-sql",
    responses(
        (status = 200, description = "SQL script recreating the table and its rows", body = String, content_type = "text/plain"),
        (status = 500, description = "Export failed", body = String, content_type = "text/plain")
    ),
    tag = "export"
)]
pub async fn export_sql(State(state): State<AppState>) -> Response {
    download(
        services::export_sql(&state).await,
        "text/plain; charset=utf-8",
        SQL_FILENAME,
    )
}

#[utoipa::path(
    get,
    path = "/api/export-csv",
    params(ParticipantFilter),
    responses(
        (status = 200, description = "Recap sheet of the filtered registrations", body = String, content_type = "text/csv"),
        (status = 500, description = "Export failed", body = String, content_type = "text/plain")
    ),
    tag = "export"
)]
pub async fn export_csv(
    State(state): State<AppState>,
    Query(filter): Query<ParticipantFilter>,
) -> Response {
    download(
        services::export_csv(&state, &filter).await,
        "text/csv; charset=utf-8",
        CSV_FILENAME,
    )
}

#[utoipa::path(
    get,
    path = "/api/export-pdf",
    params(ParticipantFilter),
    responses(
        (status = 200, description = "Printable registration sheet of the filtered registrations", body = String, content_type = "application/pdf"),
        (status = 500, description = "Export failed", body = String, content_type = "text/plain")
    ),
    tag = "export"
)]
pub async fn export_pdf(
    State(state): State<AppState>,
    Query(filter): Query<ParticipantFilter>,
) -> Response {
    download(
        services::export_pdf(&state, &filter).await,
        "application/pdf",
        PDF_FILENAME,
    )
}
