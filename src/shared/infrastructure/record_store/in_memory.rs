use crate::shared::infrastructure::record_store::{RecordStore, StoreError};
use async_trait::async_trait;
use serde_json::Value as Json;
use std::collections::BTreeMap;
use tokio::sync::Mutex;
use uuid::Uuid;

/// In-memory stand-in for the hosted realtime store. Push ids are UUID v7,
/// so key order doubles as insertion order.
#[derive(Default)]
pub struct InMemoryRecordStore {
    paths: Mutex<BTreeMap<String, BTreeMap<String, Json>>>,
    offline: bool,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail, for failure-path tests.
    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline {
            return Err(StoreError::Backend("Record store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn push(&self, path: &str, record: Json) -> Result<String, StoreError> {
        self.check_online()?;
        let id = Uuid::now_v7().to_string();
        let mut paths = self.paths.lock().await;
        paths
            .entry(path.to_string())
            .or_default()
            .insert(id.clone(), record);
        Ok(id)
    }

    async fn fetch(&self, path: &str) -> Result<Option<Json>, StoreError> {
        self.check_online()?;
        let paths = self.paths.lock().await;
        Ok(paths.get(path).map(|records| {
            Json::Object(
                records
                    .iter()
                    .map(|(id, record)| (id.clone(), record.clone()))
                    .collect(),
            )
        }))
    }

    async fn update(&self, path: &str, fields: Json) -> Result<(), StoreError> {
        self.check_online()?;
        let Json::Object(fields) = fields else {
            return Err(StoreError::Backend(
                "update payload must be an object".into(),
            ));
        };
        let mut paths = self.paths.lock().await;
        let records = paths.entry(path.to_string()).or_default();
        for (key, value) in fields {
            records.insert(key, value);
        }
        Ok(())
    }
}
