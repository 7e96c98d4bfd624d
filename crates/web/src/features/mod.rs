pub mod admin;
pub mod catalog;
pub mod export;
pub mod participants;
pub mod status;
