use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::error;

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.trip_progress_report.handle().await {
        Ok(report) => Json(report).into_response(),
        Err(e) => {
            error!(error = %e, "trip progress report failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
