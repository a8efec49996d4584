use axum::{Json, http::StatusCode, response::IntoResponse};
use ledger::{ExportError, LedgerError};

use api_types::error::{ErrorResponse, FieldErrorView};
pub use server::{ServerState, router, run, run_with_listener, spawn_with_listener};

mod exports;
mod guests;
mod server;
mod statistics;

pub enum ServerError {
    Ledger(LedgerError),
    Export(ExportError),
    NotFound(String),
    Unexpected(String),
}

fn status_for_error(err: &ServerError) -> StatusCode {
    match err {
        ServerError::Ledger(LedgerError::Validation(_)) => StatusCode::BAD_REQUEST,
        ServerError::NotFound(_) => StatusCode::NOT_FOUND,
        ServerError::Export(_) | ServerError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn payload_for_error(err: ServerError) -> ErrorResponse {
    match err {
        ServerError::Ledger(LedgerError::Validation(errors)) => ErrorResponse {
            message: "invalid guest data".to_string(),
            errors: Some(
                errors
                    .into_iter()
                    .map(|e| FieldErrorView {
                        field: e.field.to_string(),
                        message: e.message,
                    })
                    .collect(),
            ),
        },
        ServerError::NotFound(message) => ErrorResponse {
            message,
            errors: None,
        },
        ServerError::Export(err) => {
            tracing::error!("export failed: {err}");
            ErrorResponse {
                message: "failed to export the ledger".to_string(),
                errors: None,
            }
        }
        ServerError::Unexpected(err) => {
            tracing::error!("unexpected error: {err}");
            ErrorResponse {
                message: "internal server error".to_string(),
                errors: None,
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let status = status_for_error(&self);
        (status, Json(payload_for_error(self))).into_response()
    }
}

impl From<LedgerError> for ServerError {
    fn from(value: LedgerError) -> Self {
        Self::Ledger(value)
    }
}

impl From<ExportError> for ServerError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}
