use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Invalid product category: {0}")]
    InvalidCategory(String),

    #[error("Invalid sorting option: {0}")]
    InvalidOption(String),

    #[error("No products matched the request")]
    ProductEmpty,

    #[error("Not found: {0}")]
    NotFound(String),
}

impl ServiceError {
    /// Stable message code surfaced to API clients.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "INVALID_REQUEST",
            ServiceError::InvalidCategory(_) => "INVALID_PRODUCT_CATEGORY",
            ServiceError::InvalidOption(_) => "INVALID_OPTION",
            ServiceError::ProductEmpty => "PRODUCT_EMPTY",
            ServiceError::NotFound(_) => "NOT_FOUND",
            ServiceError::Repo(_) => "INTERNAL_ERROR",
        }
    }
}
