pub mod sqlite;
pub mod supabase;

use async_trait::async_trait;

use crate::backend::Provider;
use crate::error::Result;
use crate::models::{NewParticipant, Participant, ParticipantId};
use crate::services::sql_export;

/// CRUD over registrations, implemented once per backend.
///
/// `update` and `delete` take the identifier exactly as it arrived in the
/// request path; each backend decides how to match it. Both return the
/// number of affected rows, and zero is not an error.
#[async_trait]
pub trait ParticipantStore: Send + Sync {
    fn provider(&self) -> Provider;

    /// All participants ordered by school, then participant name.
    async fn list(&self) -> Result<Vec<Participant>>;

    async fn insert(&self, participant: &NewParticipant) -> Result<ParticipantId>;

    async fn update(&self, id: &str, participant: &NewParticipant) -> Result<u64>;

    async fn delete(&self, id: &str) -> Result<u64>;

    async fn export_sql(&self) -> Result<String> {
        let participants = self.list().await?;
        Ok(sql_export::render(self.provider().dialect(), &participants))
    }
}
