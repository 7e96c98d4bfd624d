pub mod admin;
pub mod catalog;
pub mod participant;
pub mod status;
