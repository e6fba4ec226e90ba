use crate::modules::trip_progress::core::aggregate::{AggregateError, aggregate, summarize};
use crate::modules::trip_progress::use_cases::register_trip_progress::handler::TRIP_PROGRESS_PATH;
use crate::modules::trip_progress::use_cases::trip_progress_report::report::TripProgressReport;
use crate::shared::infrastructure::record_store::{RecordStore, StoreError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}

pub struct TripProgressReportHandler {
    store: Arc<dyn RecordStore>,
}

impl TripProgressReportHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<TripProgressReport, ApplicationError> {
        let data = self.store.fetch(TRIP_PROGRESS_PATH).await?;
        let rows = aggregate(data.as_ref())?;
        let summary = summarize(&rows);
        Ok(TripProgressReport { rows, summary })
    }
}
