//! In-process stand-in for the slice of PostgREST the Supabase backend uses.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};

pub const API_KEY: &str = "test-anon-key";

#[derive(Debug, Default)]
pub struct FakeTable {
    pub rows: Vec<Value>,
    next_id: i64,
    /// Answer inserts with an empty representation.
    pub omit_representation: bool,
    /// Answer every request with a 500 carrying this message.
    pub fail_with: Option<String>,
}

type Shared = Arc<Mutex<FakeTable>>;

#[derive(Clone)]
pub struct FakePostgrest {
    table: Shared,
    pub base_url: String,
}

impl FakePostgrest {
    pub async fn start() -> Self {
        let table = Arc::new(Mutex::new(FakeTable {
            next_id: 1,
            ..FakeTable::default()
        }));

        let app = Router::new()
            .route(
                "/rest/v1/participants",
                get(list).post(insert).patch(update).delete(remove),
            )
            .with_state(table.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind fake PostgREST");
        let addr = listener.local_addr().expect("listener has no address");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("fake PostgREST stopped");
        });

        Self {
            table,
            base_url: format!("http://{}", addr),
        }
    }

    pub fn table(&self) -> MutexGuard<'_, FakeTable> {
        self.table.lock().expect("fake table poisoned")
    }

    pub fn seed(&self, row: Value) {
        self.table().rows.push(row);
    }
}

fn lock(table: &Shared) -> MutexGuard<'_, FakeTable> {
    table.lock().expect("fake table poisoned")
}

fn reject(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({ "code": "PGRST000", "message": message, "details": null })),
    )
        .into_response()
}

fn check(headers: &HeaderMap, table: &FakeTable) -> Option<Response> {
    let header = |name: &str| headers.get(name).and_then(|value| value.to_str().ok());

    if header("apikey") != Some(API_KEY)
        || header("authorization") != Some(format!("Bearer {}", API_KEY).as_str())
    {
        return Some(reject(StatusCode::UNAUTHORIZED, "Invalid API key"));
    }

    table
        .fail_with
        .as_deref()
        .map(|message| reject(StatusCode::INTERNAL_SERVER_ERROR, message))
}

fn text(row: &Value, column: &str) -> String {
    row[column].as_str().unwrap_or_default().to_string()
}

fn id_matches(row: &Value, target: &str) -> bool {
    match &row["id"] {
        Value::Number(number) => number.to_string() == target,
        Value::String(id) => id == target,
        _ => false,
    }
}

fn id_target(params: &HashMap<String, String>) -> Option<String> {
    params
        .get("id")
        .and_then(|filter| filter.strip_prefix("eq."))
        .map(str::to_string)
}

async fn list(
    State(table): State<Shared>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let table = lock(&table);
    if let Some(rejection) = check(&headers, &table) {
        return rejection;
    }

    let mut rows = table.rows.clone();
    if params.get("order").map(String::as_str) == Some("nama_sekolah.asc,nama_peserta.asc") {
        rows.sort_by_key(|row| (text(row, "nama_sekolah"), text(row, "nama_peserta")));
    }

    Json(rows).into_response()
}

async fn insert(
    State(table): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Vec<Value>>,
) -> Response {
    let mut table = lock(&table);
    if let Some(rejection) = check(&headers, &table) {
        return rejection;
    }

    let mut created = Vec::new();
    for mut row in body {
        row["id"] = json!(table.next_id);
        row["created_at"] = json!("2026-03-01T10:00:00.000000+00:00");
        table.next_id += 1;
        table.rows.push(row.clone());
        created.push(row);
    }

    if table.omit_representation {
        created.clear();
    }

    (StatusCode::CREATED, Json(created)).into_response()
}

async fn update(
    State(table): State<Shared>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
    Json(patch): Json<Value>,
) -> Response {
    let mut table = lock(&table);
    if let Some(rejection) = check(&headers, &table) {
        return rejection;
    }
    let Some(target) = id_target(&params) else {
        return reject(StatusCode::BAD_REQUEST, "UPDATE requires a WHERE clause");
    };

    let mut updated = Vec::new();
    for row in table.rows.iter_mut().filter(|row| id_matches(row, &target)) {
        if let (Some(fields), Some(changes)) = (row.as_object_mut(), patch.as_object()) {
            for (column, value) in changes {
                fields.insert(column.clone(), value.clone());
            }
        }
        updated.push(row.clone());
    }

    Json(updated).into_response()
}

async fn remove(
    State(table): State<Shared>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let mut table = lock(&table);
    if let Some(rejection) = check(&headers, &table) {
        return rejection;
    }
    let Some(target) = id_target(&params) else {
        return reject(StatusCode::BAD_REQUEST, "DELETE requires a WHERE clause");
    };

    let (removed, kept): (Vec<Value>, Vec<Value>) = table
        .rows
        .drain(..)
        .partition(|row| id_matches(row, &target));
    table.rows = kept;

    Json(removed).into_response()
}
