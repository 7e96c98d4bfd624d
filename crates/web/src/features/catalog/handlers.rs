use axum::Json;
use storage::dto::catalog::CatalogResponse;

#[utoipa::path(
    get,
    path = "/api/catalog",
    responses(
        (status = 200, description = "Schools and competition categories offered on the form", body = CatalogResponse)
    ),
    tag = "catalog"
)]
pub async fn get_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse::current())
}
