use sqlx::Error as SqlxError;
use thiserror::Error;

/// Store failures. Missing rows are `Option::None` at the repository seam, not errors.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),
}
