use async_trait::async_trait;

use crate::error::EmbedError;
use crate::types::{EmbeddingTask, EmbeddingVector};

/// A text-to-vector function used by retrieval pipelines.
///
/// Every method returns one vector per input text, in input order.
#[async_trait]
pub trait EmbeddingFunction: Send + Sync {
    fn name(&self) -> &'static str;

    /// Length of the vectors this function produces.
    async fn dim(&self) -> Result<usize, EmbedError>;

    async fn encode_queries(&self, queries: &[String]) -> Result<Vec<EmbeddingVector>, EmbedError> {
        self.embed(queries, Some(EmbeddingTask::RetrievalQuery.as_str()))
            .await
    }

    async fn encode_documents(
        &self,
        documents: &[String],
    ) -> Result<Vec<EmbeddingVector>, EmbedError> {
        self.embed(documents, Some(EmbeddingTask::RetrievalPassage.as_str()))
            .await
    }

    async fn embed(
        &self,
        texts: &[String],
        task_type: Option<&str>,
    ) -> Result<Vec<EmbeddingVector>, EmbedError>;
}
