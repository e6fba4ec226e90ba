// Pure decision function for recording an expense.
//
// Rules
// - Description must be filled in and the amount must be strictly positive,
//   as on the submission form.
// - The spent-on day must parse as YYYY-MM-DD.

use crate::modules::expenses::core::expense::Expense;
use crate::modules::expenses::use_cases::register_expense::command::RegisterExpense;
use crate::shared::core::dates::{DATE_FORMAT, TIMESTAMP_FORMAT, parse_date};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("description must be filled in")]
    MissingDescription,
    #[error("amount must be a positive number")]
    InvalidAmount,
    #[error("spent-on day must be a YYYY-MM-DD date")]
    InvalidDate,
}

pub fn decide_register_expense(command: RegisterExpense) -> Result<Expense, DecideError> {
    let description = command.description.trim();
    if description.is_empty() {
        return Err(DecideError::MissingDescription);
    }
    if !command.amount.is_finite() || command.amount <= 0.0 {
        return Err(DecideError::InvalidAmount);
    }
    let spent_on = parse_date(&command.spent_on).ok_or(DecideError::InvalidDate)?;
    Ok(Expense {
        description: Some(description.to_string()),
        category: command.category,
        amount: Some(command.amount),
        spent_on: Some(spent_on.format(DATE_FORMAT).to_string()),
        timestamp: Some(command.recorded_at.format(TIMESTAMP_FORMAT).to_string()),
    })
}
