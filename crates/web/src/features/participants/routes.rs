use axum::{
    Router,
    routing::{get, put},
};

use super::handlers::{
    create_participant, delete_participant, list_participants, update_participant,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_participants).post(create_participant))
        .route("/:id", put(update_participant).delete(delete_participant))
}
