use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::FromRow;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

use super::ParticipantStore;
use crate::backend::Provider;
use crate::error::Result;
use crate::models::{NewParticipant, Participant, ParticipantId};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS participants (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nama_sekolah TEXT,
        nama_peserta TEXT,
        tempat_tanggal_lahir TEXT,
        cabang_lomba TEXT,
        file_url TEXT,
        file_name TEXT,
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// Columns an older `participants` table may lack. SQLite refuses a
/// non-constant default on ALTER, so `created_at` is added bare and filled
/// explicitly on insert.
const EXPECTED_COLUMNS: [(&str, &str); 7] = [
    ("nama_sekolah", "TEXT"),
    ("nama_peserta", "TEXT"),
    ("tempat_tanggal_lahir", "TEXT"),
    ("cabang_lomba", "TEXT"),
    ("file_url", "TEXT"),
    ("file_name", "TEXT"),
    ("created_at", "DATETIME"),
];

#[derive(Debug, FromRow)]
struct ParticipantRow {
    id: i64,
    nama_sekolah: Option<String>,
    nama_peserta: Option<String>,
    tempat_tanggal_lahir: Option<String>,
    cabang_lomba: Option<String>,
    file_url: Option<String>,
    file_name: Option<String>,
    created_at: Option<NaiveDateTime>,
}

impl From<ParticipantRow> for Participant {
    fn from(row: ParticipantRow) -> Self {
        Self {
            id: ParticipantId::Numeric(row.id),
            school: row.nama_sekolah.unwrap_or_default(),
            participant_names: row.nama_peserta.unwrap_or_default(),
            birth_details: row.tempat_tanggal_lahir.unwrap_or_default(),
            category: row.cabang_lomba.unwrap_or_default(),
            file_url: row.file_url,
            file_name: row.file_name,
            created_at: row.created_at.map(|created_at| created_at.and_utc()),
        }
    }
}

/// Local backend over an embedded SQLite file.
#[derive(Debug, Clone)]
pub struct SqliteParticipantRepository {
    pool: SqlitePool,
}

impl SqliteParticipantRepository {
    /// Opens (creating if needed) the database file. Call
    /// [`ensure_schema`](Self::ensure_schema) before serving requests.
    pub async fn open(path: &Path) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the table if absent and adds whichever expected columns an
    /// existing table is missing. Returns the columns it added.
    pub async fn ensure_schema(&self) -> Result<Vec<&'static str>> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;

        let existing: Vec<String> =
            sqlx::query_scalar("SELECT name FROM pragma_table_info('participants')")
                .fetch_all(&self.pool)
                .await?;

        let mut added = Vec::new();
        for (column, column_type) in EXPECTED_COLUMNS {
            if existing.iter().any(|name| name == column) {
                continue;
            }

            let statement = format!("ALTER TABLE participants ADD COLUMN {column} {column_type}");
            sqlx::query(&statement).execute(&self.pool).await?;
            tracing::info!(column, "Added column to participants");
            added.push(column);
        }

        Ok(added)
    }
}

#[async_trait]
impl ParticipantStore for SqliteParticipantRepository {
    fn provider(&self) -> Provider {
        Provider::Sqlite
    }

    async fn list(&self) -> Result<Vec<Participant>> {
        let rows = sqlx::query_as::<_, ParticipantRow>(
            r#"
            SELECT id, nama_sekolah, nama_peserta, tempat_tanggal_lahir, cabang_lomba,
                   file_url, file_name, created_at
            FROM participants
            ORDER BY nama_sekolah ASC, nama_peserta ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Participant::from).collect())
    }

    async fn insert(&self, participant: &NewParticipant) -> Result<ParticipantId> {
        participant.ensure_complete()?;
        let participant = participant.clone().normalized();

        let result = sqlx::query(
            r#"
            INSERT INTO participants (nama_sekolah, nama_peserta, tempat_tanggal_lahir, cabang_lomba,
                                      file_url, file_name, created_at)
            VALUES (?, ?, ?, ?, ?, ?, CURRENT_TIMESTAMP)
            "#,
        )
        .bind(&participant.school)
        .bind(&participant.participant_names)
        .bind(&participant.birth_details)
        .bind(&participant.category)
        .bind(&participant.file_url)
        .bind(&participant.file_name)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        tracing::debug!(id, "Inserted participant into SQLite");

        Ok(ParticipantId::Numeric(id))
    }

    async fn update(&self, id: &str, participant: &NewParticipant) -> Result<u64> {
        participant.ensure_complete()?;
        let participant = participant.clone().normalized();

        let query = sqlx::query(
            r#"
            UPDATE participants
            SET nama_sekolah = ?,
                nama_peserta = ?,
                tempat_tanggal_lahir = ?,
                cabang_lomba = ?,
                file_url = ?,
                file_name = ?
            WHERE id = ?
            "#,
        )
        .bind(&participant.school)
        .bind(&participant.participant_names)
        .bind(&participant.birth_details)
        .bind(&participant.category)
        .bind(&participant.file_url)
        .bind(&participant.file_name);

        let target = ParticipantId::parse(id);
        let query = match &target {
            ParticipantId::Numeric(value) => query.bind(*value),
            ParticipantId::Text(value) => query.bind(value.as_str()),
        };

        let affected = query.execute(&self.pool).await?.rows_affected();
        tracing::debug!(%target, affected, "Updated participant in SQLite");

        Ok(affected)
    }

    async fn delete(&self, id: &str) -> Result<u64> {
        let query = sqlx::query("DELETE FROM participants WHERE id = ?");

        let target = ParticipantId::parse(id);
        let query = match &target {
            ParticipantId::Numeric(value) => query.bind(*value),
            ParticipantId::Text(value) => query.bind(value.as_str()),
        };

        let affected = query.execute(&self.pool).await?.rows_affected();
        tracing::debug!(%target, affected, "Deleted participant from SQLite");

        Ok(affected)
    }
}
