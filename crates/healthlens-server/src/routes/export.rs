use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::header;
use axum::response::IntoResponse;

use crate::error::ApiError;
use crate::state::AppState;

const PDF_FILENAME: &str = "HealthReport.pdf";

/// Render a report body into a downloadable PDF.
pub async fn export_pdf(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(value) = body?;

    // Layout and serialization are CPU-bound; keep them off the async workers.
    let renderer = state.renderer.clone();
    let bytes = tokio::task::spawn_blocking(move || renderer.render_value(value))
        .await
        .map_err(|e| ApiError::RenderFailed(format!("render task failed: {e}")))??;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={PDF_FILENAME}"),
            ),
        ],
        bytes,
    ))
}
