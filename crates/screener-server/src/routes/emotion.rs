use axum::Json;
use axum::body::Bytes;

use screener_core::models::emotion::EmotionEstimate;
use screener_engine::emotion::estimate_from_image;

use crate::error::ApiError;

/// Placeholder emotion estimate for an uploaded photo (raw bytes).
pub async fn estimate(body: Bytes) -> Result<Json<EmotionEstimate>, ApiError> {
    if body.is_empty() {
        return Err(ApiError::BadRequest("image body is required".to_string()));
    }
    Ok(Json(estimate_from_image(&body)))
}
