use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::route::use_cases::add_location::command::AddLocation;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RouteMutation;

#[Object]
impl RouteMutation {
    async fn add_location(
        &self,
        context: &Context<'_>,
        city: String,
        latitude: f64,
        longitude: f64,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let command = AddLocation {
            city,
            latitude,
            longitude,
            recorded_at: Utc::now().naive_utc(),
        };
        let location_id = state
            .add_location
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(location_id)
    }
}
