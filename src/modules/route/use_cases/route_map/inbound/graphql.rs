use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::route::use_cases::route_map::report::{MapCenter, RouteMap, RoutePoint};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlRoutePoint {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<RoutePoint> for GqlRoutePoint {
    fn from(point: RoutePoint) -> Self {
        Self {
            city: point.city,
            latitude: point.latitude,
            longitude: point.longitude,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlMapCenter {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<MapCenter> for GqlMapCenter {
    fn from(center: MapCenter) -> Self {
        Self {
            latitude: center.latitude,
            longitude: center.longitude,
        }
    }
}

#[derive(SimpleObject)]
pub struct GqlRouteMap {
    pub points: Vec<GqlRoutePoint>,
    pub center: Option<GqlMapCenter>,
}

impl From<RouteMap> for GqlRouteMap {
    fn from(map: RouteMap) -> Self {
        Self {
            points: map.points.into_iter().map(Into::into).collect(),
            center: map.center.map(Into::into),
        }
    }
}

#[derive(Default)]
pub struct RouteQuery;

#[Object]
impl RouteQuery {
    async fn route_map(&self, context: &Context<'_>) -> GqlResult<GqlRouteMap> {
        let state = context.data_unchecked::<AppState>();
        let map = state
            .route_map
            .handle()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(map.into())
    }
}
