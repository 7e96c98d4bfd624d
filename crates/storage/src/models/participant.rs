use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{Result, StorageError};

/// Backend-assigned record identifier.
///
/// SQLite hands out integers; Supabase returns whatever its own column
/// produces, which is not guaranteed to look numeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParticipantId {
    Numeric(i64),
    Text(String),
}

impl ParticipantId {
    /// Resolves an identifier taken from a request path.
    ///
    /// The leading integer is taken when there is one, so `"12abc"` resolves
    /// to 12 and trailing text is ignored. Anything without a leading digit
    /// run (after optional whitespace and sign) is kept verbatim.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
        let sign_len = trimmed.len() - unsigned.len();
        let digits_len = unsigned.len()
            - unsigned
                .trim_start_matches(|c: char| c.is_ascii_digit())
                .len();

        match trimmed[..sign_len + digits_len].parse::<i64>() {
            Ok(value) if digits_len > 0 => Self::Numeric(value),
            _ => Self::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(value) => write!(f, "{}", value),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// One registration as stored by either backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Participant {
    #[schema(value_type = String, example = "1")]
    pub id: ParticipantId,
    #[serde(rename = "nama_sekolah")]
    pub school: String,
    /// One name per line for group categories.
    #[serde(rename = "nama_peserta")]
    pub participant_names: String,
    /// One line per name, same order as `participant_names`.
    #[serde(rename = "tempat_tanggal_lahir")]
    pub birth_details: String,
    #[serde(rename = "cabang_lomba")]
    pub category: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// The mutable part of a registration, as handed to `insert` and `update`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewParticipant {
    #[serde(rename = "nama_sekolah")]
    pub school: String,
    #[serde(rename = "nama_peserta")]
    pub participant_names: String,
    #[serde(rename = "tempat_tanggal_lahir")]
    pub birth_details: String,
    #[serde(rename = "cabang_lomba")]
    pub category: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
}

impl NewParticipant {
    /// Rejects the record when any of the four text columns is empty.
    pub fn ensure_complete(&self) -> Result<()> {
        let missing: Vec<&'static str> = [
            ("nama_sekolah", &self.school),
            ("nama_peserta", &self.participant_names),
            ("tempat_tanggal_lahir", &self.birth_details),
            ("cabang_lomba", &self.category),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(column, _)| column)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(StorageError::MissingFields(missing))
        }
    }

    /// Empty file fields are stored as NULL.
    pub fn normalized(mut self) -> Self {
        self.file_url = self.file_url.filter(|value| !value.is_empty());
        self.file_name = self.file_name.filter(|value| !value.is_empty());
        self
    }
}

/// Parses timestamps as returned by SQLite (`2026-03-01 10:00:00`) or
/// PostgREST (RFC 3339, with or without offset).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}
