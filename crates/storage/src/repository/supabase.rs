use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::IgnoredAny;

use super::ParticipantStore;
use crate::backend::Provider;
use crate::error::{Result, StorageError};
use crate::models::participant::parse_timestamp;
use crate::models::{NewParticipant, Participant, ParticipantId};

const TABLE: &str = "participants";
const LIST_ORDER: &str = "nama_sekolah.asc,nama_peserta.asc";

#[derive(Debug, Deserialize)]
struct RemoteRow {
    id: ParticipantId,
    #[serde(default)]
    nama_sekolah: Option<String>,
    #[serde(default)]
    nama_peserta: Option<String>,
    #[serde(default)]
    tempat_tanggal_lahir: Option<String>,
    #[serde(default)]
    cabang_lomba: Option<String>,
    #[serde(default)]
    file_url: Option<String>,
    #[serde(default)]
    file_name: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
}

impl From<RemoteRow> for Participant {
    fn from(row: RemoteRow) -> Self {
        Self {
            id: row.id,
            school: row.nama_sekolah.unwrap_or_default(),
            participant_names: row.nama_peserta.unwrap_or_default(),
            birth_details: row.tempat_tanggal_lahir.unwrap_or_default(),
            category: row.cabang_lomba.unwrap_or_default(),
            file_url: row.file_url,
            file_name: row.file_name,
            created_at: row.created_at.as_deref().and_then(parse_timestamp),
        }
    }
}

#[derive(Debug, Deserialize)]
struct InsertedRow {
    #[serde(default)]
    id: Option<ParticipantId>,
}

#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
}

/// Remote backend talking to Supabase's PostgREST endpoint for the
/// `participants` table.
#[derive(Debug, Clone)]
pub struct SupabaseParticipantRepository {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

impl SupabaseParticipantRepository {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("fls3n-registration/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            endpoint: format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), TABLE),
            api_key: api_key.to_string(),
            client,
        })
    }

    /// Host part of the endpoint, safe to log.
    pub fn host(&self) -> &str {
        let without_scheme = self
            .endpoint
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(self.endpoint.as_str());
        without_scheme.split('/').next().unwrap_or(without_scheme)
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.client
            .request(method, &self.endpoint)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    fn id_filter(id: &str) -> [(&'static str, String); 1] {
        [("id", format!("eq.{}", id))]
    }
}

/// Turns a non-2xx PostgREST answer into a storage error carrying its message.
async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<PostgrestError>(&body)
        .map(|error| error.message)
        .unwrap_or(body);

    tracing::error!(status = status.as_u16(), %message, "Supabase request failed");
    Err(StorageError::Remote {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl ParticipantStore for SupabaseParticipantRepository {
    fn provider(&self) -> Provider {
        Provider::Supabase
    }

    async fn list(&self) -> Result<Vec<Participant>> {
        let response = self
            .request(Method::GET)
            .query(&[("select", "*"), ("order", LIST_ORDER)])
            .send()
            .await?;

        let rows: Vec<RemoteRow> = ensure_success(response).await?.json().await?;

        Ok(rows.into_iter().map(Participant::from).collect())
    }

    async fn insert(&self, participant: &NewParticipant) -> Result<ParticipantId> {
        participant.ensure_complete()?;
        let participant = participant.clone().normalized();

        let response = self
            .request(Method::POST)
            .header("Prefer", "return=representation")
            .json(&[&participant])
            .send()
            .await?;

        let rows: Vec<InsertedRow> = ensure_success(response).await?.json().await?;

        let id = rows
            .into_iter()
            .next()
            .and_then(|row| row.id)
            .ok_or(StorageError::MissingIdentifier)?;
        tracing::debug!(%id, "Inserted participant into Supabase");

        Ok(id)
    }

    async fn update(&self, id: &str, participant: &NewParticipant) -> Result<u64> {
        participant.ensure_complete()?;
        let participant = participant.clone().normalized();

        let response = self
            .request(Method::PATCH)
            .query(&Self::id_filter(id))
            .header("Prefer", "return=representation")
            .json(&participant)
            .send()
            .await?;

        let rows: Vec<IgnoredAny> = ensure_success(response).await?.json().await?;
        tracing::debug!(id, affected = rows.len(), "Updated participant in Supabase");

        Ok(rows.len() as u64)
    }

    async fn delete(&self, id: &str) -> Result<u64> {
        let response = self
            .request(Method::DELETE)
            .query(&Self::id_filter(id))
            .header("Prefer", "return=representation")
            .send()
            .await?;

        let rows: Vec<IgnoredAny> = ensure_success(response).await?.json().await?;
        tracing::debug!(id, affected = rows.len(), "Deleted participant from Supabase");

        Ok(rows.len() as u64)
    }
}
