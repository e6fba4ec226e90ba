use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::expenses::core::expense::ExpenseCategory;
use crate::modules::expenses::use_cases::register_expense::command::RegisterExpense;
use crate::modules::expenses::use_cases::register_expense::handler::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RegisterExpenseBody {
    pub description: String,
    /// Legacy category label; anything unknown counts as "Outros".
    pub category: String,
    pub amount: f64,
    pub spent_on: String,
}

#[derive(Serialize)]
pub struct RegisterExpenseResponse {
    pub expense_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterExpenseBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RegisterExpense {
        description: body.description,
        category: ExpenseCategory::from_label(&body.category),
        amount: body.amount,
        spent_on: body.spent_on,
        recorded_at: Utc::now().naive_utc(),
    };

    match state.register_expense.handle(command).await {
        Ok(expense_id) => (
            StatusCode::CREATED,
            Json(RegisterExpenseResponse { expense_id }),
        )
            .into_response(),
        Err(ApplicationError::Domain(_)) => StatusCode::UNPROCESSABLE_ENTITY.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
