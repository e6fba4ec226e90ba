use crate::modules::expenses::use_cases::expense_report::handler::ExpenseReportHandler;
use crate::modules::expenses::use_cases::register_expense::handler::RegisterExpenseHandler;
use crate::modules::route::use_cases::add_location::handler::AddLocationHandler;
use crate::modules::route::use_cases::route_map::handler::RouteMapHandler;
use crate::modules::trip_progress::use_cases::register_trip_progress::handler::RegisterTripProgressHandler;
use crate::modules::trip_progress::use_cases::trip_progress_report::handler::TripProgressReportHandler;
use crate::shared::infrastructure::record_store::RecordStore;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub register_trip_progress: Arc<RegisterTripProgressHandler>,
    pub trip_progress_report: Arc<TripProgressReportHandler>,
    pub register_expense: Arc<RegisterExpenseHandler>,
    pub expense_report: Arc<ExpenseReportHandler>,
    pub add_location: Arc<AddLocationHandler>,
    pub route_map: Arc<RouteMapHandler>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            register_trip_progress: Arc::new(RegisterTripProgressHandler::new(store.clone())),
            trip_progress_report: Arc::new(TripProgressReportHandler::new(store.clone())),
            register_expense: Arc::new(RegisterExpenseHandler::new(store.clone())),
            expense_report: Arc::new(ExpenseReportHandler::new(store.clone())),
            add_location: Arc::new(AddLocationHandler::new(store.clone())),
            route_map: Arc::new(RouteMapHandler::new(store.clone())),
            store,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryRecordStore::new()))
    }
}
