use crate::modules::route::use_cases::add_location::handler::LOCATIONS_PATH;
use crate::modules::route::use_cases::route_map::report::{
    ReportDataError, RouteMap, build_route_map,
};
use crate::shared::infrastructure::record_store::{RecordStore, StoreError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Data(#[from] ReportDataError),
}

pub struct RouteMapHandler {
    store: Arc<dyn RecordStore>,
}

impl RouteMapHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<RouteMap, ApplicationError> {
        let data = self.store.fetch(LOCATIONS_PATH).await?;
        Ok(build_route_map(data.as_ref())?)
    }
}
