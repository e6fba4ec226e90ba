use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::expenses::core::expense::ExpenseCategory;
use crate::modules::expenses::use_cases::register_expense::command::RegisterExpense;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ExpensesMutation;

#[Object]
impl ExpensesMutation {
    async fn register_expense(
        &self,
        context: &Context<'_>,
        description: String,
        category: String,
        amount: f64,
        spent_on: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let command = RegisterExpense {
            description,
            category: ExpenseCategory::from_label(&category),
            amount,
            spent_on,
            recorded_at: Utc::now().naive_utc(),
        };
        let expense_id = state
            .register_expense
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(expense_id)
    }
}
