//! Sentence analysis handler.

use axum::{extract::State, Json};
use senti_core::{AnalysisRequest, AnalysisResponse};
use tracing::debug;

use crate::error::{ApiError, ApiJson};
use crate::state::AppState;

/// POST /analyze - Score a sentence and label it.
///
/// The sentence is echoed back unchanged; empty text is accepted.
pub async fn analyze(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let scores = state.scorer.score(&req.sentence)?;
    let response = AnalysisResponse::new(req.sentence, scores);

    debug!(
        sentiment = %response.sentiment,
        compound = response.scores.compound,
        "Analyzed sentence"
    );

    Ok(Json(response))
}
