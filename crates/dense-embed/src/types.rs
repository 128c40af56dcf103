use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EmbedError;

/// One embedding, aligned with the input text at the same position.
pub type EmbeddingVector = Vec<f32>;

/// Task hints understood by the Jina embedding models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingTask {
    RetrievalQuery,
    RetrievalPassage,
    TextMatching,
    Classification,
    Separation,
}

impl EmbeddingTask {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RetrievalQuery => "retrieval.query",
            Self::RetrievalPassage => "retrieval.passage",
            Self::TextMatching => "text-matching",
            Self::Classification => "classification",
            Self::Separation => "separation",
        }
    }
}

impl fmt::Display for EmbeddingTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmbeddingTask {
    type Err = EmbedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "retrieval.query" => Ok(Self::RetrievalQuery),
            "retrieval.passage" => Ok(Self::RetrievalPassage),
            "text-matching" => Ok(Self::TextMatching),
            "classification" => Ok(Self::Classification),
            "separation" => Ok(Self::Separation),
            other => Err(EmbedError::Config(format!("unknown task type: {other}"))),
        }
    }
}

/// JSON body posted to the embeddings endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct EmbeddingRequest<'a> {
    pub input: &'a [String],
    pub model: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_type: Option<&'a str>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingResult {
    pub index: usize,
    pub embedding: EmbeddingVector,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EmbeddingResponseBody {
    #[serde(default)]
    data: Option<Vec<EmbeddingResult>>,
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl EmbeddingResponseBody {
    /// Vectors in request order. The service may return entries out of order,
    /// so they are sorted by `index` before being unwrapped.
    pub(crate) fn into_vectors(self) -> Result<Vec<EmbeddingVector>, EmbedError> {
        let Some(mut data) = self.data else {
            return Err(match self.detail {
                Some(serde_json::Value::String(detail)) => EmbedError::Remote(detail),
                Some(other) => EmbedError::Remote(other.to_string()),
                None => EmbedError::InvalidResponse(
                    "response carries neither data nor detail".to_string(),
                ),
            });
        };
        data.sort_by_key(|r| r.index);
        Ok(data.into_iter().map(|r| r.embedding).collect())
    }
}
