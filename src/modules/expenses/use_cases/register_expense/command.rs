// Command data type for recording one expense.

use crate::modules::expenses::core::expense::ExpenseCategory;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct RegisterExpense {
    pub description: String,
    pub category: ExpenseCategory,
    pub amount: f64,
    /// Day the money was spent, `YYYY-MM-DD`.
    pub spent_on: String,
    pub recorded_at: NaiveDateTime,
}
