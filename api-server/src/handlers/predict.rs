//! Prediction handler

use axum::{extract::{rejection::JsonRejection, State}, Json};
use serde::{Deserialize, Serialize};
use veracity_core::{MessageRecord, RawMessage, Verdict};

use crate::{AppResult, AppState};

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    pub verdict: Verdict,
}

/// Classify one message
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<RawMessage>, JsonRejection>,
) -> AppResult<Json<PredictResponse>> {
    let Json(raw) = payload?;
    let record = MessageRecord::try_from(raw)?;

    let predictor = state.predictor.clone();
    let verdict = tokio::task::spawn_blocking(move || predictor.predict(&record))
        .await
        .map_err(|e| crate::AppError::InferenceError(e.to_string()))??;

    tracing::debug!("Prediction: {}", verdict);

    Ok(Json(PredictResponse { verdict }))
}
