use thiserror::Error;
use validator::ValidationErrors;

use crate::services::rating::RatingError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Rating error: {0}")]
    Rating(#[from] RatingError),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// Errors caused by the caller's input rather than by the backing store
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            StorageError::InvalidId(_) | StorageError::Validation(_) | StorageError::Rating(_)
        )
    }
}
