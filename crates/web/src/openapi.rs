use utoipa::OpenApi;

use crate::features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::status::handlers::db_status,
        features::participants::handlers::list_participants,
        features::participants::handlers::create_participant,
        features::participants::handlers::update_participant,
        features::participants::handlers::delete_participant,
        features::export::handlers::export_sql,
        features::export::handlers::export_csv,
        features::export::handlers::export_pdf,
        features::catalog::handlers::get_catalog,
        features::admin::handlers::login,
    ),
    components(
        schemas(
            storage::models::Participant,
            storage::models::Category,
            storage::Provider,
            storage::dto::participant::ParticipantRequest,
            storage::dto::participant::CreatedResponse,
            storage::dto::participant::MessageResponse,
            storage::dto::status::DbStatusResponse,
            storage::dto::status::ConfigPresence,
            storage::dto::catalog::CatalogResponse,
            storage::dto::catalog::CategoryInfo,
            storage::dto::admin::LoginRequest,
            storage::dto::admin::LoginResponse,
        )
    ),
    tags(
        (name = "participants", description = "Registration records"),
        (name = "export", description = "SQL, CSV and PDF downloads"),
        (name = "status", description = "Backend status probe"),
        (name = "catalog", description = "Form options"),
        (name = "admin", description = "Shared-password admin login"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/api/db-status",
            "/api/participants",
            "/api/participants/{id}",
            "/api/export-sql",
            "/api/export-csv",
            "/api/export-pdf",
            "/api/catalog",
            "/api/admin/login",
        ] {
            assert!(paths.contains(&expected), "missing {}", expected);
        }
    }
}
