use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use healthlens_bedrock::analysis::{Analysis, SymptomAnalyzer};
use healthlens_bedrock::error::{AnalysisError, BedrockError};
use healthlens_core::models::report::ReportInput;
use healthlens_export::ReportRenderer;
use healthlens_server::state::AppState;

/// Analyzer returning a fixed report and counting its calls.
#[derive(Default)]
struct StubAnalyzer {
    calls: AtomicUsize,
}

#[async_trait]
impl SymptomAnalyzer for StubAnalyzer {
    async fn analyze(&self, symptoms: &str) -> Result<Analysis, AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Analysis {
            id: Uuid::new_v4(),
            model_id: "stub".to_string(),
            tokens: None,
            report: ReportInput {
                summary: vec![format!("Reported: {symptoms}")],
                considerations: vec!["Common cold".to_string()],
                recommendations: vec!["Rest".to_string(), "Hydrate".to_string()],
            },
        })
    }
}

struct FailingAnalyzer;

#[async_trait]
impl SymptomAnalyzer for FailingAnalyzer {
    async fn analyze(&self, _symptoms: &str) -> Result<Analysis, AnalysisError> {
        Err(BedrockError::SchemaViolation("model returned prose".to_string()).into())
    }
}

fn router(analyzer: Arc<dyn SymptomAnalyzer>) -> Router {
    healthlens_server::app(AppState::new(analyzer, ReportRenderer::default()), None)
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

#[tokio::test]
async fn health_check_responds_ok() {
    let response = router(Arc::new(StubAnalyzer::default()))
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"ok");
}

#[tokio::test]
async fn analyze_returns_the_report() {
    let analyzer = Arc::new(StubAnalyzer::default());
    let response = router(analyzer.clone())
        .oneshot(post_json("/analyze", r#"{"symptoms": "sneezing"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["summary"], json!(["Reported: sneezing"]));
    assert_eq!(body["recommendations"], json!(["Rest", "Hydrate"]));
    assert_eq!(analyzer.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn missing_symptoms_never_reach_the_analyzer() {
    let analyzer = Arc::new(StubAnalyzer::default());

    for body in [r#"{}"#, r#"{"symptoms": ""}"#, r#"{"symptoms": "   "}"#] {
        let response = router(analyzer.clone())
            .oneshot(post_json("/analyze", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": "No input provided" }));
    }

    assert_eq!(analyzer.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn malformed_body_is_a_json_error() {
    let response = router(Arc::new(StubAnalyzer::default()))
        .oneshot(post_json("/analyze", "not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn analysis_failure_is_generic() {
    let response = router(Arc::new(FailingAnalyzer))
        .oneshot(post_json("/analyze", r#"{"symptoms": "chest pain"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({ "error": "Failed to analyze symptoms. Please try again." })
    );
    assert!(body.get("summary").is_none());
}

#[tokio::test]
async fn export_returns_a_pdf_attachment() {
    let body = json!({
        "summary": ["Mild headache"],
        "considerations": [],
        "recommendations": ["Rest", "Hydrate"],
    });
    let response = router(Arc::new(StubAnalyzer::default()))
        .oneshot(post_json("/export_pdf", &body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=HealthReport.pdf"
    );

    let bytes = body_bytes(response).await;
    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}

#[tokio::test]
async fn export_matches_direct_rendering() {
    let input = ReportInput {
        summary: vec!["Cough".to_string()],
        ..Default::default()
    };
    let response = router(Arc::new(StubAnalyzer::default()))
        .oneshot(post_json("/export_pdf", &serde_json::to_string(&input).unwrap()))
        .await
        .unwrap();

    let expected = ReportRenderer::default().render(&input).unwrap();
    assert_eq!(body_bytes(response).await, expected);
}

#[tokio::test]
async fn export_rejects_non_string_entries() {
    let body = json!({
        "summary": ["Cough"],
        "recommendations": [{ "nested": "object" }],
    });
    let response = router(Arc::new(StubAnalyzer::default()))
        .oneshot(post_json("/export_pdf", &body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_ne!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );
    assert_eq!(body_json(response).await, json!({ "error": "Invalid report data." }));
}

#[tokio::test]
async fn large_export_renders_many_pages() {
    let summary: Vec<String> = (0..500).map(|i| format!("Recurring symptom {i}")).collect();
    let body = json!({ "summary": summary });
    let response = router(Arc::new(StubAnalyzer::default()))
        .oneshot(post_json("/export_pdf", &body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let doc = lopdf::Document::load_mem(&body_bytes(response).await).unwrap();
    assert!(doc.get_pages().len() > 5);
}

fn router_with_front_end() -> Router {
    let static_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("static");
    healthlens_server::app(
        AppState::new(Arc::new(StubAnalyzer::default()), ReportRenderer::default()),
        Some(&static_dir),
    )
}

#[tokio::test]
async fn bundled_front_end_is_served_at_root() {
    let response = router_with_front_end()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(html.contains("analyze-btn"));
    assert!(html.contains("export-pdf-btn"));

    let response = router_with_front_end()
        .oneshot(Request::get("/script.js").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let script = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(script.contains("/analyze"));
    assert!(script.contains("/export_pdf"));
}

#[tokio::test]
async fn api_routes_take_precedence_over_static_files() {
    let response = router_with_front_end()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(body_bytes(response).await, b"ok");
}
