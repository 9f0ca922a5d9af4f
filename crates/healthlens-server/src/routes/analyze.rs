use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;

use healthlens_bedrock::analysis::require_symptoms;
use healthlens_core::models::report::ReportInput;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub symptoms: Option<String>,
}

/// Analyze free-text symptoms and return the structured report.
pub async fn analyze(
    State(state): State<AppState>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<ReportInput>, ApiError> {
    let Json(req) = body?;
    let symptoms = require_symptoms(req.symptoms.as_deref())?;

    let analysis = state.analyzer.analyze(symptoms).await?;

    Ok(Json(analysis.report))
}
