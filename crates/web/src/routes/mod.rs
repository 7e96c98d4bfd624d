use std::path::Path;

use axum::{Router, extract::DefaultBodyLimit};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::features;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Registration payloads are small, but the form used to post files inline.
const BODY_LIMIT: usize = 50 * 1024 * 1024;

/// Everything mounted under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(features::status::routes())
        .merge(features::export::routes())
        .merge(features::catalog::routes())
        .nest("/participants", features::participants::routes())
        .nest("/admin", features::admin::routes())
}

/// Full application: API, OpenAPI docs and, when `static_dir` is set, the
/// single-page front end with `index.html` as fallback.
pub fn router(state: AppState, static_dir: Option<&Path>) -> Router {
    let app = Router::new()
        .nest("/api", api_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let app = match static_dir {
        Some(dir) => app.fallback_service(
            ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))),
        ),
        None => app,
    };

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .layer(DefaultBodyLimit::max(BODY_LIMIT)),
    )
    .with_state(state)
}
