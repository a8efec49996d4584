//! Export API endpoints
//!
//! Each handler encodes the full snapshot before sending anything, so a
//! failing encode never delivers a partial file.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use ledger::export::{self, ExportFormat};

use crate::{ServerError, server::ServerState};

pub async fn csv(State(state): State<ServerState>) -> Result<Response, ServerError> {
    let guests = state.ledger.read().await.guests();
    let bytes = export::csv_bytes(&guests)?;

    Ok(attachment(ExportFormat::Csv, Utc::now(), bytes))
}

pub async fn xlsx(State(state): State<ServerState>) -> Result<Response, ServerError> {
    let guests = state.ledger.read().await.guests();
    let bytes = export::xlsx_bytes(&guests)?;

    Ok(attachment(ExportFormat::Xlsx, Utc::now(), bytes))
}

fn attachment(format: ExportFormat, generated_at: DateTime<Utc>, bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", format.filename(generated_at)),
            ),
        ],
        bytes,
    )
        .into_response()
}
