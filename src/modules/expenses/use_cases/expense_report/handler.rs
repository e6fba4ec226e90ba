use crate::modules::expenses::use_cases::expense_report::report::{
    ExpenseReport, ReportDataError, build_expense_report,
};
use crate::modules::expenses::use_cases::register_expense::handler::EXPENSES_PATH;
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

pub struct ExpenseReportHandler {
    store: Arc<dyn RecordStore>,
}

impl ExpenseReportHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<ExpenseReport, ApplicationError> {
        let data = self.store.fetch(EXPENSES_PATH).await?;
        Ok(build_expense_report(data.as_ref())?)
    }
}
