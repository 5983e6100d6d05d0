//! Error type shared by the profile store handlers.
//!
//! Every variant maps to an HTTP status through actix's `ResponseError`, so
//! handlers can return `Result<HttpResponse, StoreError>` and use `?`.

use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::{error, warn};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("webId must not be empty")]
    InvalidIdentity,

    #[error("invalid farm id `{0}`: expected a bare identifier")]
    InvalidFarmId(String),

    #[error("invalid document URI `{0}`: expected `/` followed by a bare identifier")]
    InvalidDocumentUri(String),

    #[error("farm `{0}` not found")]
    FarmNotFound(String),

    #[error("document URI `{0}` is already used by another record")]
    DocumentUriConflict(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("store task failed: {0}")]
    Blocking(#[from] BlockingError),
}

impl StoreError {
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::InvalidIdentity => "INVALID_IDENTITY",
            StoreError::InvalidFarmId(_) => "INVALID_FARM_ID",
            StoreError::InvalidDocumentUri(_) => "INVALID_DOCUMENT_URI",
            StoreError::FarmNotFound(_) => "FARM_NOT_FOUND",
            StoreError::DocumentUriConflict(_) => "DOCUMENT_URI_CONFLICT",
            StoreError::Database(_) => "DATABASE_ERROR",
            StoreError::Blocking(_) => "INTERNAL_ERROR",
        }
    }
}

impl ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            StoreError::InvalidIdentity
            | StoreError::InvalidFarmId(_)
            | StoreError::InvalidDocumentUri(_) => StatusCode::BAD_REQUEST,
            StoreError::FarmNotFound(_) => StatusCode::NOT_FOUND,
            StoreError::DocumentUriConflict(_) => StatusCode::CONFLICT,
            StoreError::Database(_) | StoreError::Blocking(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{}", self);
        } else {
            warn!("{}", self);
        }
        HttpResponse::build(status).json(json!({
            "error": self.code(),
            "message": self.to_string(),
        }))
    }
}
