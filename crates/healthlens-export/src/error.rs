use thiserror::Error;

use healthlens_core::error::CoreError;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("report input is not renderable: {0}")]
    InvalidInput(String),

    #[error("report layout is unusable: {0}")]
    Layout(String),

    #[error("PDF generation failed: {0}")]
    Pdf(#[from] lopdf::Error),
}

impl From<CoreError> for RenderError {
    fn from(e: CoreError) -> Self {
        RenderError::InvalidInput(e.to_string())
    }
}
