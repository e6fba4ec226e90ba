use crate::modules::expenses::use_cases::register_expense::command::RegisterExpense;
use crate::modules::expenses::use_cases::register_expense::decide::{
    DecideError, decide_register_expense,
};
use crate::shared::infrastructure::record_store::{RecordStore, StoreError};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Store path shared with the earlier clients of this database.
pub const EXPENSES_PATH: &str = "gastos";

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),

    #[error("could not encode record: {0}")]
    Encode(String),
}

pub struct RegisterExpenseHandler {
    store: Arc<dyn RecordStore>,
}

impl RegisterExpenseHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: RegisterExpense) -> Result<String, ApplicationError> {
        let expense = decide_register_expense(command)?;
        let record =
            serde_json::to_value(&expense).map_err(|e| ApplicationError::Encode(e.to_string()))?;
        let expense_id = self.store.push(EXPENSES_PATH, record).await?;
        info!(expense_id = %expense_id, "expense recorded");
        Ok(expense_id)
    }
}
