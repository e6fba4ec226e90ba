use crate::modules::route::use_cases::add_location::command::AddLocation;
use crate::modules::route::use_cases::add_location::decide::{DecideError, decide_add_location};
use crate::shared::infrastructure::record_store::{RecordStore, StoreError};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Store path shared with the earlier clients of this database.
pub const LOCATIONS_PATH: &str = "locations";

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),

    #[error("could not encode record: {0}")]
    Encode(String),
}

pub struct AddLocationHandler {
    store: Arc<dyn RecordStore>,
}

impl AddLocationHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: AddLocation) -> Result<String, ApplicationError> {
        let location = decide_add_location(command)?;
        let record =
            serde_json::to_value(&location).map_err(|e| ApplicationError::Encode(e.to_string()))?;
        let location_id = self.store.push(LOCATIONS_PATH, record).await?;
        info!(location_id = %location_id, city = location.city.as_deref(), "waypoint pinned");
        Ok(location_id)
    }
}
