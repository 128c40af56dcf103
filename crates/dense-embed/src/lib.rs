//! Dense text embeddings backed by the Jina AI embeddings API.
//!
//! ```no_run
//! use dense_embed::{EmbeddingFunction, JinaConfig, JinaEmbeddingFunction};
//!
//! # async fn run() -> Result<(), dense_embed::EmbedError> {
//! // Falls back to `JINAAI_API_KEY` when no key is set on the config.
//! let ef = JinaEmbeddingFunction::new(JinaConfig::default())?;
//! let docs = ef
//!     .encode_documents(&["Rust has no garbage collector.".to_string()])
//!     .await?;
//! assert_eq!(docs.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod providers;
pub mod traits;
pub mod types;

pub use config::*;
pub use error::EmbedError;
pub use providers::JinaEmbeddingFunction;
pub use traits::*;
pub use types::*;
