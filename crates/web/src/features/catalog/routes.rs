use axum::{Router, routing::get};

use super::handlers::get_catalog;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/catalog", get(get_catalog))
}
