use axum::{Router, routing::get};

use super::handlers::{export_csv, export_pdf, export_sql};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/export-sql", get(export_sql))
        .route("/export-csv", get(export_csv))
        .route("/export-pdf", get(export_pdf))
}
