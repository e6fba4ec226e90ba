use async_trait::async_trait;
use serde_json::Value as Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Port to the realtime record store. Paths address maps of records; `push`
/// appends under a fresh time-ordered id, the way the hosted store does.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn push(&self, path: &str, record: Json) -> Result<String, StoreError>;

    /// The map of records at `path`, or `None` when the path was never
    /// written to.
    async fn fetch(&self, path: &str) -> Result<Option<Json>, StoreError>;

    /// Shallow-merge `fields` into the map at `path`.
    async fn update(&self, path: &str, fields: Json) -> Result<(), StoreError>;
}

pub mod in_memory;
