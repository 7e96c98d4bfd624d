use chrono::Local;
use storage::{
    dto::participant::ParticipantFilter,
    services::{csv_export, pdf_export},
};

use crate::error::WebResult;
use crate::state::AppState;

pub const SQL_FILENAME: &str = "database_dump.sql";
pub const CSV_FILENAME: &str = "Rekap_Peserta_FLS3N_Beji_2026.csv";
pub const PDF_FILENAME: &str = "Lembar_Pendaftaran_FLS3N_Beji_2026.pdf";

/// SQL dump of every registration in the active backend's dialect
pub async fn export_sql(state: &AppState) -> WebResult<String> {
    let dump = state.store()?.export_sql().await?;
    Ok(dump)
}

/// Recap sheet of the registrations matching `filter`
pub async fn export_csv(state: &AppState, filter: &ParticipantFilter) -> WebResult<String> {
    let participants = state.store()?.list().await?;
    Ok(csv_export::render(&filter.apply(participants)))
}

/// Printable registration sheet of the registrations matching `filter`,
/// dated today
pub async fn export_pdf(state: &AppState, filter: &ParticipantFilter) -> WebResult<Vec<u8>> {
    let participants = filter.apply(state.store()?.list().await?);
    let sheet = pdf_export::render(&participants, Local::now().date_naive())?;
    tracing::info!(rows = participants.len(), bytes = sheet.len(), "Registration sheet rendered");
    Ok(sheet)
}
