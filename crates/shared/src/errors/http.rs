use crate::errors::{error::ErrorResponse, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub enum HttpError {
    BadRequest { code: &'static str, message: String },
    NotFound { code: &'static str, message: String },
    Internal(String),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            HttpError::NotFound { .. } => StatusCode::NOT_FOUND,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        let code = err.code();

        match err {
            ServiceError::Validation(errors) => HttpError::BadRequest {
                code,
                message: format!("Validation failed: {}", errors.join("; ")),
            },

            ServiceError::InvalidCategory(token) => HttpError::BadRequest {
                code,
                message: format!("Unknown product category: {token}"),
            },

            ServiceError::InvalidOption(token) => HttpError::BadRequest {
                code,
                message: format!("Unknown sorting option: {token}"),
            },

            ServiceError::ProductEmpty => HttpError::NotFound {
                code,
                message: "No products found".into(),
            },

            ServiceError::NotFound(what) => HttpError::NotFound {
                code,
                message: format!("{what} not found"),
            },

            ServiceError::Repo(repo_err) => HttpError::Internal(repo_err.to_string()),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (code, message) = match self {
            HttpError::BadRequest { code, message } | HttpError::NotFound { code, message } => {
                (code, message)
            }
            HttpError::Internal(detail) => {
                error!("💥 Internal error surfaced to client: {detail}");
                ("INTERNAL_ERROR", "Internal server error".to_string())
            }
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            code: code.into(),
            message,
        });

        (status, body).into_response()
    }
}
