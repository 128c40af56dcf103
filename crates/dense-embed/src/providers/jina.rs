use reqwest::Client;
use reqwest::header::{ACCEPT_ENCODING, AUTHORIZATION, HeaderMap, HeaderValue};
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::config::{JinaConfig, resolve_api_key};
use crate::error::EmbedError;
use crate::traits::EmbeddingFunction;
use crate::types::{EmbeddingRequest, EmbeddingResponseBody, EmbeddingVector};

/// Embedding function backed by the Jina AI embeddings endpoint.
///
/// Holds a single HTTP client for its whole lifetime, so connections are
/// pooled across calls. Cheap to share behind an `Arc`.
#[derive(Debug, Clone)]
pub struct JinaEmbeddingFunction {
    model: String,
    endpoint: String,
    dimensions: Option<usize>,
    client: Client,
    dim: OnceCell<usize>,
}

impl JinaEmbeddingFunction {
    /// Builds the client, reading `JINAAI_API_KEY` if the config has no key.
    pub fn new(config: JinaConfig) -> Result<Self, EmbedError> {
        Self::with_key_lookup(config, |name| std::env::var(name).ok())
    }

    pub fn with_key_lookup<F>(config: JinaConfig, lookup: F) -> Result<Self, EmbedError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let api_key = resolve_api_key(config.api_key.as_deref(), lookup)?;

        let mut builder = Client::builder().default_headers(default_headers(&api_key)?);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| EmbedError::Config(format!("failed to build http client: {e}")))?;

        Ok(Self {
            model: config.model,
            endpoint: config.endpoint,
            dimensions: config.dimensions,
            client,
            dim: OnceCell::new_with(config.dimensions),
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model
    }

    pub fn configured_dimensions(&self) -> Option<usize> {
        self.dimensions
    }

    async fn request(
        &self,
        texts: &[String],
        task_type: Option<&str>,
    ) -> Result<Vec<EmbeddingVector>, EmbedError> {
        let payload = EmbeddingRequest {
            input: texts,
            model: &self.model,
            dimensions: self.dimensions,
            task_type,
        };
        debug!(
            model = %self.model,
            inputs = texts.len(),
            task_type = task_type.unwrap_or("none"),
            "jina embedding request"
        );

        let res = self.client.post(&self.endpoint).json(&payload).send().await?;
        let status = res.status();
        let body = res.text().await?;

        // Rejections arrive as 4xx with a JSON `detail` body.
        let parsed: EmbeddingResponseBody = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) if status.is_success() => return Err(e.into()),
            Err(_) => {
                return Err(EmbedError::Api {
                    status: status.as_u16(),
                    body,
                });
            }
        };

        parsed.into_vectors().inspect_err(|e| {
            if let EmbedError::Remote(detail) = e {
                warn!(
                    model = %self.model,
                    status = status.as_u16(),
                    detail = %detail,
                    "jina embedding request rejected"
                );
            }
        })
    }
}

fn default_headers(api_key: &str) -> Result<HeaderMap, EmbedError> {
    let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|_| {
        EmbedError::Config("api key contains characters not allowed in a header".to_string())
    })?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("identity"));
    Ok(headers)
}

#[async_trait::async_trait]
impl EmbeddingFunction for JinaEmbeddingFunction {
    fn name(&self) -> &'static str {
        "jina"
    }

    async fn dim(&self) -> Result<usize, EmbedError> {
        self.dim
            .get_or_try_init(|| async {
                let probe = [String::new()];
                let dim = self
                    .request(&probe, None)
                    .await?
                    .first()
                    .map(Vec::len)
                    .filter(|d| *d > 0)
                    .ok_or_else(|| {
                        EmbedError::InvalidResponse(
                            "dimension probe returned no vector".to_string(),
                        )
                    })?;
                debug!(model = %self.model, dim, "resolved embedding dimension");
                Ok::<_, EmbedError>(dim)
            })
            .await
            .copied()
    }

    async fn embed(
        &self,
        texts: &[String],
        task_type: Option<&str>,
    ) -> Result<Vec<EmbeddingVector>, EmbedError> {
        self.request(texts, task_type).await
    }
}
