use std::sync::Arc;

use storage::dto::status::{ConfigPresence, DbStatusResponse};
use storage::{BackendSettings, ParticipantStore, Provider};

use crate::error::{WebError, WebResult};
use crate::features::admin::services::AdminSecret;

/// Shared per-request state. `store` is `None` when the backend could not be
/// opened at startup; the server keeps answering and reports it.
#[derive(Clone)]
pub struct AppState {
    store: Option<Arc<dyn ParticipantStore>>,
    provider: Provider,
    presence: ConfigPresence,
    admin: AdminSecret,
}

impl AppState {
    pub fn new(
        store: Option<Arc<dyn ParticipantStore>>,
        settings: &BackendSettings,
        admin_password: &str,
    ) -> Self {
        let provider = store
            .as_ref()
            .map(|store| store.provider())
            .unwrap_or_else(|| settings.provider());

        Self {
            store,
            provider,
            presence: settings.presence(),
            admin: AdminSecret::new(admin_password),
        }
    }

    pub fn store(&self) -> WebResult<&dyn ParticipantStore> {
        self.store.as_deref().ok_or(WebError::NotConfigured)
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn admin(&self) -> &AdminSecret {
        &self.admin
    }

    pub fn status(&self) -> DbStatusResponse {
        DbStatusResponse {
            provider: self.provider,
            connected: self.store.is_some(),
            config: self.presence,
        }
    }
}
