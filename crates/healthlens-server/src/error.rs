use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use healthlens_bedrock::error::AnalysisError;
use healthlens_export::RenderError;

/// Unified API error type for all route handlers.
///
/// Every variant renders as `{"error": "..."}`. Causes of analysis and
/// render failures are logged here and never sent to the client.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    AnalysisFailed(String),
    InvalidReport(String),
    RenderFailed(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::AnalysisFailed(cause) => {
                tracing::error!("symptom analysis failed: {cause}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to analyze symptoms. Please try again.".to_string(),
                )
            }
            ApiError::InvalidReport(cause) => {
                tracing::warn!("rejected report body: {cause}");
                (StatusCode::BAD_REQUEST, "Invalid report data.".to_string())
            }
            ApiError::RenderFailed(cause) => {
                tracing::error!("report rendering failed: {cause}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate report.".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<AnalysisError> for ApiError {
    fn from(e: AnalysisError) -> Self {
        match e {
            AnalysisError::InputMissing => ApiError::BadRequest("No input provided".to_string()),
            AnalysisError::Failed(cause) => ApiError::AnalysisFailed(cause.to_string()),
        }
    }
}

impl From<RenderError> for ApiError {
    fn from(e: RenderError) -> Self {
        match e {
            RenderError::InvalidInput(cause) => ApiError::InvalidReport(cause),
            other => ApiError::RenderFailed(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}
