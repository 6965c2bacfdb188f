use axum::Json;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use uuid::Uuid;

use screener_core::models::record::AssessmentRecord;
use screener_export::export_docx;
use screener_storage::records;

use crate::error::ApiError;
use crate::state::AppState;

const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub async fn list_records(
    State(state): State<AppState>,
) -> Result<Json<Vec<AssessmentRecord>>, ApiError> {
    Ok(Json(records::list_records(&state.data_dir).await?))
}

pub async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentRecord>, ApiError> {
    Ok(Json(records::load_record(&state.data_dir, id).await?))
}

/// Render the record as DOCX, keep a copy next to it, and return the bytes.
pub async fn export_record(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let record = records::load_record(&state.data_dir, id).await?;
    let bytes = export_docx(&record, &state.styles)?;
    records::save_report(&state.data_dir, id, &bytes).await?;

    let disposition = format!("attachment; filename=\"screening-report-{id}.docx\"");
    Ok((
        [
            (header::CONTENT_TYPE, DOCX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}
