use std::time::Duration;

use crate::error::EmbedError;

pub const API_KEY_ENV: &str = "JINAAI_API_KEY";
pub const MODEL_ENV: &str = "JINAAI_EMBED_MODEL";
pub const ENDPOINT_ENV: &str = "JINAAI_EMBED_ENDPOINT";
pub const DIMENSIONS_ENV: &str = "JINAAI_EMBED_DIMENSIONS";

pub const DEFAULT_MODEL: &str = "jina-embeddings-v3";
pub const DEFAULT_ENDPOINT: &str = "https://api.jina.ai/v1/embeddings";

#[derive(Debug, Clone)]
pub struct JinaConfig {
    pub model: String,
    /// When `None`, the key is read from `JINAAI_API_KEY` at construction.
    pub api_key: Option<String>,
    pub dimensions: Option<usize>,
    pub endpoint: String,
    /// No timeout beyond the HTTP client's defaults unless set.
    pub timeout: Option<Duration>,
}

impl JinaConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            api_key: None,
            dimensions: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Reads the optional `JINAAI_EMBED_*` overrides from the process environment.
    pub fn from_env() -> Result<Self, EmbedError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, EmbedError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut cfg = Self::new(present(MODEL_ENV).unwrap_or_else(|| DEFAULT_MODEL.to_string()));
        if let Some(endpoint) = present(ENDPOINT_ENV) {
            cfg.endpoint = endpoint;
        }
        if let Some(raw) = present(DIMENSIONS_ENV) {
            let dims = raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|d| *d > 0)
                .ok_or_else(|| {
                    EmbedError::Config(format!(
                        "{DIMENSIONS_ENV} must be a positive integer, got {raw:?}"
                    ))
                })?;
            cfg.dimensions = Some(dims);
        }
        Ok(cfg)
    }
}

impl Default for JinaConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}

/// Picks the explicit key if given, else the `JINAAI_API_KEY` value from `lookup`.
pub fn resolve_api_key<F>(explicit: Option<&str>, lookup: F) -> Result<String, EmbedError>
where
    F: FnOnce(&str) -> Option<String>,
{
    let key = match explicit {
        Some(key) => Some(key.to_string()),
        None => lookup(API_KEY_ENV),
    };
    key.filter(|k| !k.trim().is_empty()).ok_or_else(|| {
        EmbedError::Config(format!(
            "missing credential: set the `{API_KEY_ENV}` environment variable or pass `api_key`"
        ))
    })
}
