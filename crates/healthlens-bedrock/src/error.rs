use thiserror::Error;

#[derive(Debug, Error)]
pub enum BedrockError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("response did not conform to expected schema: {0}")]
    SchemaViolation(String),
}

/// Outcome of a failed analysis, as seen by callers.
///
/// Callers branch on the variant: missing input is the caller's fault and no
/// model call was made; everything else is an opaque analysis failure.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no symptoms provided")]
    InputMissing,

    #[error("analysis failed: {0}")]
    Failed(#[from] BedrockError),
}
