mod common;

use storage::{
    BackendSettings, ParticipantStore, Provider,
    error::StorageError,
    models::{NewParticipant, ParticipantId},
    repository::sqlite::SqliteParticipantRepository,
};
use tempfile::TempDir;

use common::registration;

async fn open_repo(dir: &TempDir) -> SqliteParticipantRepository {
    let repo = SqliteParticipantRepository::open(&dir.path().join("participants.db"))
        .await
        .expect("failed to open database");
    repo.ensure_schema().await.expect("failed to create schema");
    repo
}

#[tokio::test]
async fn test_inserted_record_is_listed_verbatim() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir).await;

    let mut record = registration("SDN BEJI I", "Ani\nBudi", "Pantomim");
    record.file_url = Some("https://drive.example/pantomim.mp4".to_string());
    record.file_name = Some("pantomim.mp4".to_string());

    let id = repo.insert(&record).await.unwrap();
    assert!(matches!(id, ParticipantId::Numeric(_)));

    let listed = repo.list().await.unwrap();
    assert_eq!(listed.len(), 1);

    let stored = &listed[0];
    assert_eq!(stored.id, id);
    assert_eq!(stored.school, record.school);
    assert_eq!(stored.participant_names, record.participant_names);
    assert_eq!(stored.birth_details, record.birth_details);
    assert_eq!(stored.category, record.category);
    assert_eq!(stored.file_url, record.file_url);
    assert_eq!(stored.file_name, record.file_name);
    assert!(stored.created_at.is_some());
}

#[tokio::test]
async fn test_identifiers_autoincrement() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir).await;

    let first = repo
        .insert(&registration("SDN KENEP", "Sari", "Mendongeng"))
        .await
        .unwrap();
    let second = repo
        .insert(&registration("SDN KENEP", "Tono", "Mendongeng"))
        .await
        .unwrap();

    match (first, second) {
        (ParticipantId::Numeric(a), ParticipantId::Numeric(b)) => assert!(b > a),
        other => panic!("expected numeric identifiers, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_orders_by_school_then_name() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir).await;

    for (school, name) in [("B", "X"), ("A", "Y"), ("A", "X")] {
        repo.insert(&registration(school, name, "Mendongeng"))
            .await
            .unwrap();
    }

    let order: Vec<(String, String)> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|p| (p.school, p.participant_names))
        .collect();

    assert_eq!(
        order,
        vec![
            ("A".to_string(), "X".to_string()),
            ("A".to_string(), "Y".to_string()),
            ("B".to_string(), "X".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_insert_rejects_empty_required_fields() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir).await;

    let record = NewParticipant {
        school: "SDN PAGAK".to_string(),
        ..NewParticipant::default()
    };

    let err = repo.insert(&record).await.unwrap_err();
    assert!(err.is_validation());
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_replaces_every_mutable_field() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir).await;

    let mut original = registration("SDN PAGAK", "Citra", "Menyanyi Solo");
    original.file_url = Some("https://drive.example/lagu.mp3".to_string());
    original.file_name = Some("lagu.mp3".to_string());
    let id = repo.insert(&original).await.unwrap();

    let replacement = registration("SDN KENEP", "Dewi\nEka\nFajar", "Seni Tari");
    let affected = repo.update(&id.to_string(), &replacement).await.unwrap();
    assert_eq!(affected, 1);

    let stored = repo.list().await.unwrap().remove(0);
    assert_eq!(stored.id, id);
    assert_eq!(stored.school, "SDN KENEP");
    assert_eq!(stored.participant_names, "Dewi\nEka\nFajar");
    assert_eq!(stored.category, "Seni Tari");
    assert_eq!(stored.file_url, None);
    assert_eq!(stored.file_name, None);
}

#[tokio::test]
async fn test_update_rejects_empty_fields_without_mutation() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir).await;

    let id = repo
        .insert(&registration("SDN PAGAK", "Citra", "Mendongeng"))
        .await
        .unwrap();

    let mut incomplete = registration("SDN PAGAK", "Citra", "Mendongeng");
    incomplete.birth_details.clear();

    let err = repo.update(&id.to_string(), &incomplete).await.unwrap_err();
    assert!(matches!(err, StorageError::MissingFields(ref f) if f == &["tempat_tanggal_lahir"]));

    let stored = repo.list().await.unwrap().remove(0);
    assert_eq!(stored.birth_details, "Pasuruan, 12 Mei 2015");
}

#[tokio::test]
async fn test_non_numeric_identifier_matches_nothing() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir).await;

    repo.insert(&registration("SDN PAGAK", "Citra", "Mendongeng"))
        .await
        .unwrap();

    let replacement = registration("SDN KENEP", "Dewi", "Mendongeng");
    assert_eq!(repo.update("abc", &replacement).await.unwrap(), 0);
    assert_eq!(repo.delete("abc").await.unwrap(), 0);
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_missing_identifier_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir).await;

    let id = repo
        .insert(&registration("SDN PAGAK", "Citra", "Mendongeng"))
        .await
        .unwrap();

    assert_eq!(repo.delete("9999").await.unwrap(), 0);
    assert_eq!(repo.list().await.unwrap().len(), 1);

    assert_eq!(repo.delete(&id.to_string()).await.unwrap(), 1);
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_identifier_with_trailing_text_resolves_leading_integer() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir).await;

    let id = repo
        .insert(&registration("SDN PAGAK", "Citra", "Mendongeng"))
        .await
        .unwrap();
    repo.insert(&registration("SDN KENEP", "Dewi", "Mendongeng"))
        .await
        .unwrap();

    let replacement = registration("SDN PAGAK", "Citra Ayu", "Mendongeng");
    assert_eq!(repo.update(&format!("{}abc", id), &replacement).await.unwrap(), 1);
    assert_eq!(repo.delete(&format!("{}abc", id)).await.unwrap(), 1);

    let remaining = repo.list().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].participant_names, "Dewi");
}

#[tokio::test]
async fn test_export_sql_escapes_and_nulls() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir).await;

    repo.insert(&registration("O'Brien School", "Ani", "Mendongeng"))
        .await
        .unwrap();

    let dump = repo.export_sql().await.unwrap();
    assert!(dump.starts_with("-- SQLite Export\n"));
    assert!(dump.contains("id INTEGER PRIMARY KEY AUTOINCREMENT"));
    assert!(dump.contains(
        "VALUES ('O''Brien School', 'Ani', 'Pasuruan, 12 Mei 2015', 'Mendongeng', NULL, NULL);"
    ));
}

#[tokio::test]
async fn test_schema_heals_legacy_table() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("legacy.db");

    let repo = SqliteParticipantRepository::open(&path).await.unwrap();
    sqlx::query(
        "CREATE TABLE participants (id INTEGER PRIMARY KEY AUTOINCREMENT, nama_sekolah TEXT, nama_peserta TEXT)",
    )
    .execute(repo.pool())
    .await
    .unwrap();
    sqlx::query("INSERT INTO participants (nama_sekolah, nama_peserta) VALUES ('SDN KENEP', 'Lama')")
        .execute(repo.pool())
        .await
        .unwrap();

    let added = repo.ensure_schema().await.unwrap();
    assert_eq!(
        added,
        vec![
            "tempat_tanggal_lahir",
            "cabang_lomba",
            "file_url",
            "file_name",
            "created_at"
        ]
    );

    // Second run finds nothing to do.
    assert!(repo.ensure_schema().await.unwrap().is_empty());

    repo.insert(&registration("SDN BEJI I", "Baru", "Mendongeng"))
        .await
        .unwrap();

    let listed = repo.list().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].participant_names, "Baru");
    assert!(listed[0].created_at.is_some());
    assert_eq!(listed[1].participant_names, "Lama");
    assert_eq!(listed[1].category, "");
    assert_eq!(listed[1].created_at, None);
}

#[tokio::test]
async fn test_connect_without_remote_settings_uses_sqlite() {
    let dir = TempDir::new().unwrap();
    let settings = BackendSettings {
        sqlite_path: dir.path().join("connect.db"),
        ..BackendSettings::default()
    };

    let store = storage::connect(&settings).await.unwrap();
    assert_eq!(store.provider(), Provider::Sqlite);

    store
        .insert(&registration("SDN BEJI II", "Gita", "Kriya Anyam"))
        .await
        .unwrap();
    assert_eq!(store.list().await.unwrap().len(), 1);
}
