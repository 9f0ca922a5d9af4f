use std::sync::Arc;

use healthlens_bedrock::analysis::SymptomAnalyzer;
use healthlens_export::ReportRenderer;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Built once at startup; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<dyn SymptomAnalyzer>,
    pub renderer: Arc<ReportRenderer>,
}

impl AppState {
    pub fn new(analyzer: Arc<dyn SymptomAnalyzer>, renderer: ReportRenderer) -> Self {
        Self {
            analyzer,
            renderer: Arc::new(renderer),
        }
    }
}
