use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::trip_progress::use_cases::register_trip_progress::command::RegisterTripProgress;
use crate::modules::trip_progress::use_cases::register_trip_progress::handler::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RegisterTripProgressBody {
    pub distance_km: f64,
    pub elevation_m: f64,
    pub duration: String,
}

#[derive(Serialize)]
pub struct RegisterTripProgressResponse {
    pub entry_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterTripProgressBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RegisterTripProgress {
        distance_km: body.distance_km,
        elevation_m: body.elevation_m,
        duration: body.duration,
        recorded_at: Utc::now().naive_utc(),
    };

    match state.register_trip_progress.handle(command).await {
        Ok(entry_id) => (
            StatusCode::CREATED,
            Json(RegisterTripProgressResponse { entry_id }),
        )
            .into_response(),
        Err(ApplicationError::Domain(_)) => StatusCode::UNPROCESSABLE_ENTITY.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
