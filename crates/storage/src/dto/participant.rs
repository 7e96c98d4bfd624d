use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::{NewParticipant, Participant, ParticipantId};

/// School filter value meaning "no filter" in the admin view.
pub const ALL_SCHOOLS: &str = "Semua Sekolah";

/// Request payload for creating or replacing a registration.
///
/// Every field is optional at the JSON level so that a missing field is
/// reported as a validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct ParticipantRequest {
    #[serde(rename = "nama_sekolah")]
    #[validate(
        required(message = "School is required"),
        length(min = 1, message = "School is required")
    )]
    pub school: Option<String>,

    #[serde(rename = "nama_peserta")]
    #[validate(
        required(message = "Participant name is required"),
        length(min = 1, message = "Participant name is required")
    )]
    pub participant_names: Option<String>,

    #[serde(rename = "tempat_tanggal_lahir")]
    #[validate(
        required(message = "Birth place and date are required"),
        length(min = 1, message = "Birth place and date are required")
    )]
    pub birth_details: Option<String>,

    #[serde(rename = "cabang_lomba")]
    #[validate(
        required(message = "Category is required"),
        length(min = 1, message = "Category is required")
    )]
    pub category: Option<String>,

    pub file_url: Option<String>,
    pub file_name: Option<String>,
}

impl From<ParticipantRequest> for NewParticipant {
    fn from(req: ParticipantRequest) -> Self {
        Self {
            school: req.school.unwrap_or_default(),
            participant_names: req.participant_names.unwrap_or_default(),
            birth_details: req.birth_details.unwrap_or_default(),
            category: req.category.unwrap_or_default(),
            file_url: req.file_url,
            file_name: req.file_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    #[schema(value_type = String, example = "1")]
    pub id: ParticipantId,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Admin table filters: exact school match plus a case-insensitive search
/// over participant names and category.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ParticipantFilter {
    /// School name; empty or "Semua Sekolah" disables the filter
    pub school: Option<String>,
    /// Search term matched against names and category
    pub q: Option<String>,
}

impl ParticipantFilter {
    fn school(&self) -> Option<&str> {
        self.school
            .as_deref()
            .filter(|school| !school.is_empty() && *school != ALL_SCHOOLS)
    }

    fn term(&self) -> Option<String> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
    }

    pub fn is_empty(&self) -> bool {
        self.school().is_none() && self.term().is_none()
    }

    pub fn matches(&self, participant: &Participant) -> bool {
        let school_matches = self
            .school()
            .is_none_or(|school| participant.school == school);

        let term_matches = self.term().is_none_or(|term| {
            participant.participant_names.to_lowercase().contains(&term)
                || participant.category.to_lowercase().contains(&term)
        });

        school_matches && term_matches
    }

    /// Keeps the input order.
    pub fn apply(&self, participants: Vec<Participant>) -> Vec<Participant> {
        if self.is_empty() {
            return participants;
        }

        participants
            .into_iter()
            .filter(|participant| self.matches(participant))
            .collect()
    }
}
