use tracing::debug;

use healthlens_core::models::report::ReportInput;

use crate::error::RenderError;
use crate::layout::{self, ContentFrame, DocumentLayout};
use crate::pdf;
use crate::styles::ReportLayout;

/// Renders a `ReportInput` into a paginated PDF.
///
/// The layout constants are validated once in [`ReportRenderer::new`] and
/// never change afterwards, so one renderer can be shared across requests.
#[derive(Debug, Clone, Default)]
pub struct ReportRenderer {
    layout: ReportLayout,
}

impl ReportRenderer {
    pub fn new(layout: ReportLayout) -> Result<Self, RenderError> {
        ContentFrame::for_layout(&layout)?;
        Ok(Self { layout })
    }

    pub fn layout(&self) -> &ReportLayout {
        &self.layout
    }

    /// Compute page placement without producing PDF bytes.
    pub fn lay_out(&self, input: &ReportInput) -> Result<DocumentLayout, RenderError> {
        layout::lay_out(input, &self.layout)
    }

    /// Render a report into PDF bytes.
    pub fn render(&self, input: &ReportInput) -> Result<Vec<u8>, RenderError> {
        let plan = self.lay_out(input)?;
        let bytes = pdf::write_pdf(&plan, &self.layout.labels.title)?;

        debug!(
            pages = plan.page_count(),
            bytes = bytes.len(),
            "rendered report"
        );

        Ok(bytes)
    }

    /// Render an untyped JSON body, rejecting non-textual entries.
    pub fn render_value(&self, value: serde_json::Value) -> Result<Vec<u8>, RenderError> {
        let input = ReportInput::from_value(value)?;
        self.render(&input)
    }
}
