//! Plain-text SQL dump of the participants table.

use crate::models::Participant;

/// Column types differ between the embedded and the hosted database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlDialect {
    Sqlite,
    Postgres,
}

impl SqlDialect {
    fn banner(self) -> &'static str {
        match self {
            SqlDialect::Sqlite => "-- SQLite Export",
            SqlDialect::Postgres => "-- Supabase Export",
        }
    }

    fn id_column(self) -> &'static str {
        match self {
            SqlDialect::Sqlite => "id INTEGER PRIMARY KEY AUTOINCREMENT",
            SqlDialect::Postgres => "id SERIAL PRIMARY KEY",
        }
    }

    fn created_at_column(self) -> &'static str {
        match self {
            SqlDialect::Sqlite => "created_at DATETIME DEFAULT CURRENT_TIMESTAMP",
            SqlDialect::Postgres => "created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP",
        }
    }

    pub fn create_table(self) -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS participants (\n  \
             {},\n  \
             nama_sekolah TEXT,\n  \
             nama_peserta TEXT,\n  \
             tempat_tanggal_lahir TEXT,\n  \
             cabang_lomba TEXT,\n  \
             file_url TEXT,\n  \
             file_name TEXT,\n  \
             {}\n\
             );\n",
            self.id_column(),
            self.created_at_column()
        )
    }
}

/// Single-quoted SQL string literal with embedded quotes doubled.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn optional_literal(value: Option<&str>) -> String {
    match value {
        Some(value) if !value.is_empty() => quote_literal(value),
        _ => "NULL".to_string(),
    }
}

pub fn insert_statement(participant: &Participant) -> String {
    let values = [
        quote_literal(&participant.school),
        quote_literal(&participant.participant_names),
        quote_literal(&participant.birth_details),
        quote_literal(&participant.category),
        optional_literal(participant.file_url.as_deref()),
        optional_literal(participant.file_name.as_deref()),
    ]
    .join(", ");

    format!(
        "INSERT INTO participants (nama_sekolah, nama_peserta, tempat_tanggal_lahir, cabang_lomba, file_url, file_name) VALUES ({});\n",
        values
    )
}

/// Renders the table definition followed by one INSERT per participant.
pub fn render(dialect: SqlDialect, participants: &[Participant]) -> String {
    let mut dump = String::new();
    dump.push_str(dialect.banner());
    dump.push('\n');
    dump.push_str(&dialect.create_table());
    dump.push('\n');

    for participant in participants {
        dump.push_str(&insert_statement(participant));
    }

    dump
}
