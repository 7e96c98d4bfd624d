use storage::{
    ParticipantStore,
    dto::participant::ParticipantFilter,
    error::Result,
    models::{NewParticipant, Participant, ParticipantId},
};

/// List participants, narrowed by the admin filters when any are set
pub async fn list_participants(
    store: &dyn ParticipantStore,
    filter: &ParticipantFilter,
) -> Result<Vec<Participant>> {
    let participants = store.list().await?;
    Ok(filter.apply(participants))
}

/// Register a new participant
pub async fn create_participant(
    store: &dyn ParticipantStore,
    participant: &NewParticipant,
) -> Result<ParticipantId> {
    let id = store.insert(participant).await?;
    tracing::info!(%id, provider = %store.provider(), "Registration saved");
    Ok(id)
}

/// Replace a registration
pub async fn update_participant(
    store: &dyn ParticipantStore,
    id: &str,
    participant: &NewParticipant,
) -> Result<u64> {
    tracing::info!(id, "Update requested");
    let affected = store.update(id, participant).await?;
    tracing::info!(id, affected, provider = %store.provider(), "Registration updated");
    Ok(affected)
}

/// Delete a registration
pub async fn delete_participant(store: &dyn ParticipantStore, id: &str) -> Result<u64> {
    tracing::info!(id, "Delete requested");
    let affected = store.delete(id).await?;
    tracing::info!(id, affected, provider = %store.provider(), "Registration deleted");
    Ok(affected)
}
