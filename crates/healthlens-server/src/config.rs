use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use healthlens_export::styles::PageSize;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

/// Process configuration, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub region: String,
    pub model_id: String,
    /// Directory with the browser front end, served for unmatched paths.
    pub static_dir: Option<PathBuf>,
    pub page_size: PageSize,
    /// Whether the process runs inside the AWS Lambda runtime.
    pub lambda: bool,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = var("HEALTHLENS_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| eyre::eyre!("invalid HEALTHLENS_BIND_ADDR: {e}"))?;

        let page_size = match var("HEALTHLENS_PAGE_SIZE") {
            Some(value) => value
                .parse::<PageSize>()
                .map_err(|e| eyre::eyre!("invalid HEALTHLENS_PAGE_SIZE: {e}"))?,
            None => PageSize::default(),
        };

        Ok(Self {
            bind_addr,
            region: var("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            model_id: var("HEALTHLENS_MODEL_ID").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            static_dir: var("HEALTHLENS_STATIC_DIR").map(PathBuf::from),
            page_size,
            lambda: var("AWS_LAMBDA_RUNTIME_API").is_some(),
        })
    }
}
