#![allow(dead_code)]

pub mod postgrest;

use storage::models::NewParticipant;

pub fn registration(school: &str, names: &str, category: &str) -> NewParticipant {
    let births = names
        .lines()
        .map(|_| "Pasuruan, 12 Mei 2015")
        .collect::<Vec<_>>()
        .join("\n");

    NewParticipant {
        school: school.to_string(),
        participant_names: names.to_string(),
        birth_details: births,
        category: category.to_string(),
        file_url: None,
        file_name: None,
    }
}
