use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::error;

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.route_map.handle().await {
        Ok(map) => Json(map).into_response(),
        Err(e) => {
            error!(error = %e, "route map failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
