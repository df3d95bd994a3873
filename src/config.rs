use crate::error::{Result, RoundUpError};

pub const DEFAULT_BASE_URL: &str = "https://api-sandbox.starlingbank.com/api/v2";

/// Settings for reaching the upstream bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root of the banking API; request paths are appended to it.
    pub base_url: String,
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let parsed = reqwest::Url::parse(&base_url)
            .map_err(|e| RoundUpError::Config(format!("invalid base url '{base_url}': {e}")))?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(RoundUpError::Config(format!(
                "base url '{base_url}' must be an http(s) url"
            )));
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
