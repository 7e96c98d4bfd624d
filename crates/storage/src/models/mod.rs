pub mod catalog;
pub mod participant;

pub use catalog::{Category, SCHOOLS};
pub use participant::{NewParticipant, Participant, ParticipantId};
