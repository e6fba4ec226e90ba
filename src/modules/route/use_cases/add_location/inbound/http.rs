use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::route::use_cases::add_location::command::AddLocation;
use crate::modules::route::use_cases::add_location::handler::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddLocationBody {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Serialize)]
pub struct AddLocationResponse {
    pub location_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<AddLocationBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = AddLocation {
        city: body.city,
        latitude: body.latitude,
        longitude: body.longitude,
        recorded_at: Utc::now().naive_utc(),
    };

    match state.add_location.handle(command).await {
        Ok(location_id) => (
            StatusCode::CREATED,
            Json(AddLocationResponse { location_id }),
        )
            .into_response(),
        Err(ApplicationError::Domain(_)) => StatusCode::UNPROCESSABLE_ENTITY.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
