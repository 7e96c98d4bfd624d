use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::status::ConfigPresence;
use crate::error::Result;
use crate::repository::{
    ParticipantStore, sqlite::SqliteParticipantRepository,
    supabase::SupabaseParticipantRepository,
};
use crate::services::sql_export::SqlDialect;

pub const DEFAULT_SQLITE_PATH: &str = "fls3n_beji_2026.db";

/// The two interchangeable storage backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Provider {
    #[serde(rename = "SQLite")]
    Sqlite,
    Supabase,
}

impl Provider {
    pub fn label(self) -> &'static str {
        match self {
            Provider::Sqlite => "SQLite",
            Provider::Supabase => "Supabase",
        }
    }

    pub fn dialect(self) -> SqlDialect {
        match self {
            Provider::Sqlite => SqlDialect::Sqlite,
            Provider::Supabase => SqlDialect::Postgres,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Settings that decide which backend serves the process.
#[derive(Debug, Clone)]
pub struct BackendSettings {
    pub sqlite_path: PathBuf,
    pub supabase_url: Option<String>,
    pub supabase_key: Option<String>,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            sqlite_path: PathBuf::from(DEFAULT_SQLITE_PATH),
            supabase_url: None,
            supabase_key: None,
        }
    }
}

impl BackendSettings {
    fn url(&self) -> Option<&str> {
        self.supabase_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    fn key(&self) -> Option<&str> {
        self.supabase_key.as_deref().filter(|key| !key.trim().is_empty())
    }

    /// Supabase when both its URL and key are set, SQLite otherwise.
    pub fn provider(&self) -> Provider {
        match (self.url(), self.key()) {
            (Some(_), Some(_)) => Provider::Supabase,
            _ => Provider::Sqlite,
        }
    }

    pub fn presence(&self) -> ConfigPresence {
        ConfigPresence {
            has_url: self.url().is_some(),
            has_key: self.key().is_some(),
        }
    }
}

/// Opens the backend chosen by `settings`. For SQLite this also brings the
/// table up to the expected column set before returning.
pub async fn connect(settings: &BackendSettings) -> Result<Arc<dyn ParticipantStore>> {
    match (settings.url(), settings.key()) {
        (Some(url), Some(key)) => {
            let repo = SupabaseParticipantRepository::new(url, key)?;
            tracing::info!(host = repo.host(), "Using Supabase backend");
            Ok(Arc::new(repo))
        }
        _ => {
            tracing::info!(path = %settings.sqlite_path.display(), "Using SQLite backend");
            let repo = SqliteParticipantRepository::open(&settings.sqlite_path).await?;
            let added = repo.ensure_schema().await?;
            if !added.is_empty() {
                tracing::info!(columns = ?added, "Added missing participant columns");
            }
            Ok(Arc::new(repo))
        }
    }
}
