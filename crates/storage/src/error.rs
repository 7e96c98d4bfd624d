use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Supabase request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Supabase rejected the request ({status}): {message}")]
    Remote { status: u16, message: String },

    #[error("Required fields are empty: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Operation succeeded but no identifier was returned")]
    MissingIdentifier,

    #[error("Failed to render PDF: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// True for errors caused by the caller's input rather than the backend.
    pub fn is_validation(&self) -> bool {
        matches!(self, StorageError::MissingFields(_))
    }
}
