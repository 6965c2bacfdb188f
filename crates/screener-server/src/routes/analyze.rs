use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde_json::Value;
use tracing::{info, warn};

use screener_core::models::intake::IntakeRecord;
use screener_core::models::record::AssessmentRecord;
use screener_core::validation::{IntakeRejection, validate_intake};
use screener_storage::records;

use crate::error::ApiError;
use crate::state::AppState;

/// Validate an intake, generate a recommendation and store the record.
///
/// The response is the recommendation plus `_input` (the body as sent) and
/// `_record_id` when the record was stored.
pub async fn analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let raw: Value = serde_json::from_slice(&body)
        .map_err(|_| ApiError::Intake(IntakeRejection::NotAnObject))?;
    validate_intake(&raw).map_err(ApiError::Intake)?;

    let record = IntakeRecord::from_json(raw.clone())?;
    if let Some(emotion) = &record.emotion_data {
        emotion.check_invariants()?;
    }

    let recommender = Arc::clone(&state.recommender);
    let input = record.clone();
    let generation = tokio::task::spawn_blocking(move || recommender.recommend(&input)).await?;

    let assessment = AssessmentRecord::new(record, generation.recommendation, generation.source);
    info!(
        record_id = %assessment.id,
        source = ?assessment.source,
        goals = assessment.output.therapy_goals.len(),
        "intake analyzed"
    );

    let stored = match records::save_record(&state.data_dir, &assessment).await {
        Ok(()) => true,
        Err(e) => {
            warn!(record_id = %assessment.id, error = %e, "failed to store assessment record");
            false
        }
    };

    let mut response =
        serde_json::to_value(&assessment.output).map_err(|e| ApiError::Internal(e.to_string()))?;
    if let Value::Object(fields) = &mut response {
        fields.insert("_input".to_string(), raw);
        if stored {
            fields.insert("_record_id".to_string(), Value::String(assessment.id.to_string()));
        }
    }

    Ok(Json(response))
}
