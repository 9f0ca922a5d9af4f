use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, Message, SystemContentBlock};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use healthlens_core::models::report::ReportInput;
use healthlens_core::models::token_count::TokenCount;

use crate::error::{AnalysisError, BedrockError};
use crate::prompt::{ANALYSIS_SYSTEM_PROMPT, user_message};
use crate::reply::parse_report_reply;
use crate::tokens;

/// A completed symptom analysis.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub id: Uuid,
    pub model_id: String,
    pub tokens: Option<TokenCount>,
    pub report: ReportInput,
}

/// Turns free-text symptoms into a structured report.
#[async_trait]
pub trait SymptomAnalyzer: Send + Sync {
    async fn analyze(&self, symptoms: &str) -> Result<Analysis, AnalysisError>;
}

/// Reject missing or blank symptom text before any model call.
pub fn require_symptoms(symptoms: Option<&str>) -> Result<&str, AnalysisError> {
    match symptoms.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(AnalysisError::InputMissing),
    }
}

/// [`SymptomAnalyzer`] backed by a Bedrock model through the Converse API.
#[derive(Debug, Clone)]
pub struct BedrockAnalyzer {
    client: Client,
    model_id: String,
}

impl BedrockAnalyzer {
    pub fn new(client: Client, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

#[async_trait]
impl SymptomAnalyzer for BedrockAnalyzer {
    async fn analyze(&self, symptoms: &str) -> Result<Analysis, AnalysisError> {
        let symptoms = require_symptoms(Some(symptoms))?;

        let id = Uuid::new_v4();
        info!(transaction_id = %id, model = %self.model_id, "starting symptom analysis");

        let (response_text, tokens) = invoke_converse(
            &self.client,
            &self.model_id,
            ANALYSIS_SYSTEM_PROMPT,
            &user_message(symptoms),
        )
        .await?;

        let report = parse_report_reply(&response_text)?;

        info!(
            transaction_id = %id,
            input_tokens = tokens.map(|t| t.input),
            output_tokens = tokens.map(|t| t.output),
            total_tokens = tokens.map(|t| t.total()),
            "symptom analysis complete"
        );

        Ok(Analysis {
            id,
            model_id: self.model_id.clone(),
            tokens,
            report,
        })
    }
}

/// Core invocation using the Bedrock Converse API.
/// Returns the response text and token counts, when reported.
async fn invoke_converse(
    client: &Client,
    model_id: &str,
    system_prompt: &str,
    user_message: &str,
) -> Result<(String, Option<TokenCount>), BedrockError> {
    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .messages(
            Message::builder()
                .role(ConversationRole::User)
                .content(ContentBlock::Text(user_message.to_string()))
                .build()
                .map_err(|e| BedrockError::Invocation(e.to_string()))?,
        )
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let response_text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    let tokens = response.usage().map(tokens::extract_token_usage);

    Ok((response_text, tokens))
}
