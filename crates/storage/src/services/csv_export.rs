//! Recap sheet for the admin view, RFC 4180 quoting.

use std::borrow::Cow;

use crate::models::Participant;

pub const HEADERS: [&str; 4] = [
    "Nama Sekolah",
    "Nama Peserta",
    "Tempat Tgl Lahir",
    "Cabang Lomba",
];

fn escape_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

fn push_row<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
    let row: Vec<Cow<'_, str>> = fields.into_iter().map(escape_field).collect();
    out.push_str(&row.join(","));
    out.push('\n');
}

pub fn render(participants: &[Participant]) -> String {
    let mut out = String::new();
    push_row(&mut out, HEADERS);

    for participant in participants {
        push_row(
            &mut out,
            [
                participant.school.as_str(),
                participant.participant_names.as_str(),
                participant.birth_details.as_str(),
                participant.category.as_str(),
            ],
        );
    }

    out
}
