// Read-side assembly of the route map data.
//
// Waypoints without usable coordinates are dropped (they cannot be plotted);
// the rest keep store-key order, which is insertion order for pushed ids.
// The map centers on the mean of the plotted coordinates.

use crate::modules::route::core::location::{
    Location, UNKNOWN_CITY, valid_latitude, valid_longitude,
};
use serde::Serialize;
use serde_json::Value as Json;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportDataError {
    #[error("location data is not a map of records")]
    InvalidInput,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePoint {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapCenter {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteMap {
    pub points: Vec<RoutePoint>,
    pub center: Option<MapCenter>,
}

pub fn build_route_map(data: Option<&Json>) -> Result<RouteMap, ReportDataError> {
    let records = match data {
        None | Some(Json::Null) => {
            return Ok(RouteMap {
                points: Vec::new(),
                center: None,
            });
        }
        Some(Json::Object(records)) => records,
        Some(_) => return Err(ReportDataError::InvalidInput),
    };

    let points: Vec<RoutePoint> = records
        .values()
        .map(Location::from_record)
        .filter_map(|location| {
            let latitude = location.latitude.filter(|v| valid_latitude(*v))?;
            let longitude = location.longitude.filter(|v| valid_longitude(*v))?;
            Some(RoutePoint {
                city: location.city.unwrap_or_else(|| UNKNOWN_CITY.to_string()),
                latitude,
                longitude,
            })
        })
        .collect();

    let center = if points.is_empty() {
        None
    } else {
        let count = points.len() as f64;
        Some(MapCenter {
            latitude: points.iter().map(|p| p.latitude).sum::<f64>() / count,
            longitude: points.iter().map(|p| p.longitude).sum::<f64>() / count,
        })
    };

    Ok(RouteMap { points, center })
}
