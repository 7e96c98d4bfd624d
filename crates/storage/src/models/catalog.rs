use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Competition disciplines offered on the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Category {
    #[serde(rename = "Gambar Bercerita")]
    StoryDrawing,
    #[serde(rename = "Kriya Anyam")]
    WeavingCraft,
    #[serde(rename = "Menyanyi Solo")]
    SoloSinging,
    #[serde(rename = "Pantomim")]
    Pantomime,
    #[serde(rename = "Seni Tari")]
    Dance,
    #[serde(rename = "Mendongeng")]
    Storytelling,
    #[serde(rename = "Menulis Cerita")]
    StoryWriting,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::StoryDrawing,
        Category::WeavingCraft,
        Category::SoloSinging,
        Category::Pantomime,
        Category::Dance,
        Category::Storytelling,
        Category::StoryWriting,
    ];

    /// Name as stored in `cabang_lomba`.
    pub fn name(self) -> &'static str {
        match self {
            Category::StoryDrawing => "Gambar Bercerita",
            Category::WeavingCraft => "Kriya Anyam",
            Category::SoloSinging => "Menyanyi Solo",
            Category::Pantomime => "Pantomim",
            Category::Dance => "Seni Tari",
            Category::Storytelling => "Mendongeng",
            Category::StoryWriting => "Menulis Cerita",
        }
    }

    /// How many names (and birth lines) a registration in this category carries.
    pub fn expected_participants(self) -> usize {
        match self {
            Category::Pantomime => 2,
            Category::Dance => 3,
            _ => 1,
        }
    }

    /// Performance categories ask for a link to a recording.
    pub fn accepts_file(self) -> bool {
        matches!(
            self,
            Category::SoloSinging | Category::Pantomime | Category::Dance
        )
    }
}

pub const SCHOOLS: [&str; 32] = [
    "SDN BAUJENG I",
    "SDN BAUJENG II",
    "SDN BEJI I",
    "SDN BEJI II",
    "SDN BEJI IV",
    "SDN CANGKRINGMALANG I",
    "SDN CANGKRINGMALANG II",
    "SDN CANGKRINGMALANG III",
    "SDN GAJAHBENDO",
    "SDN GLANGGANG I",
    "SDN GLANGGANG II",
    "SDN GUNUNGGANGSIR I",
    "SDN GUNUNGGANGSIR II",
    "SDN GUNUNGGANGSIR III",
    "SDN GUNUNGSARI I",
    "SDN GUNUNGSARI II",
    "SDN KEDUNGBOTO",
    "SDN KEDUNGRINGIN I",
    "SDN KEDUNGRINGIN II",
    "SDN KEDUNGRINGIN III",
    "SDN KEDUNGRINGIN IV",
    "SDN KENEP",
    "SDN NGEMBE 1",
    "SDN PAGAK",
    "SDN SIDOWAYAH",
    "SDN SUMBERSARI I",
    "SDN SUMBERSARI II",
    "SD ISLAM YASPAI",
    "SD ISLAM HASAN MUNADI",
    "SD AR-ROUDHOH",
    "SD ISLAM AZ ZAHRA",
    "SD ISLAM DARUSSALAM",
];
