use axum::{Router, routing::get};

use super::handlers::db_status;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/db-status", get(db_status))
}
