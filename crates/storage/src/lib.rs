pub mod backend;
pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use backend::{BackendSettings, Provider, connect};
pub use repository::ParticipantStore;
