pub mod jina;

pub use jina::JinaEmbeddingFunction;
