use crate::modules::trip_progress::use_cases::register_trip_progress::command::RegisterTripProgress;
use crate::modules::trip_progress::use_cases::register_trip_progress::decide::{
    DecideError, decide_register_progress,
};
use crate::shared::infrastructure::record_store::{RecordStore, StoreError};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Store path shared with the earlier clients of this database.
pub const TRIP_PROGRESS_PATH: &str = "progresso_viagem";

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),

    #[error("could not encode record: {0}")]
    Encode(String),
}

pub struct RegisterTripProgressHandler {
    store: Arc<dyn RecordStore>,
}

impl RegisterTripProgressHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: RegisterTripProgress) -> Result<String, ApplicationError> {
        let entry = decide_register_progress(command)?;
        let record =
            serde_json::to_value(&entry).map_err(|e| ApplicationError::Encode(e.to_string()))?;
        let entry_id = self.store.push(TRIP_PROGRESS_PATH, record).await?;
        info!(entry_id = %entry_id, "trip progress recorded");
        Ok(entry_id)
    }
}
