use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid report: {0}")]
    InvalidReport(String),
}
