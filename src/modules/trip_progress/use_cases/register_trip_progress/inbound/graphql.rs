use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::trip_progress::use_cases::register_trip_progress::command::RegisterTripProgress;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct TripProgressMutation;

#[Object]
impl TripProgressMutation {
    async fn register_trip_progress(
        &self,
        context: &Context<'_>,
        distance_km: f64,
        elevation_m: f64,
        duration: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let command = RegisterTripProgress {
            distance_km,
            elevation_m,
            duration,
            recorded_at: Utc::now().naive_utc(),
        };
        let entry_id = state
            .register_trip_progress
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(entry_id)
    }
}
