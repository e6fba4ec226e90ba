// Pure decision function for pinning a waypoint.

use crate::modules::route::core::location::{Location, valid_latitude, valid_longitude};
use crate::modules::route::use_cases::add_location::command::AddLocation;
use crate::shared::core::dates::TIMESTAMP_FORMAT;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("city must be filled in")]
    MissingCity,
    #[error("latitude must be between -90 and 90")]
    LatitudeOutOfRange,
    #[error("longitude must be between -180 and 180")]
    LongitudeOutOfRange,
}

pub fn decide_add_location(command: AddLocation) -> Result<Location, DecideError> {
    let city = command.city.trim();
    if city.is_empty() {
        return Err(DecideError::MissingCity);
    }
    if !valid_latitude(command.latitude) {
        return Err(DecideError::LatitudeOutOfRange);
    }
    if !valid_longitude(command.longitude) {
        return Err(DecideError::LongitudeOutOfRange);
    }
    Ok(Location {
        city: Some(city.to_string()),
        latitude: Some(command.latitude),
        longitude: Some(command.longitude),
        timestamp: Some(command.recorded_at.format(TIMESTAMP_FORMAT).to_string()),
    })
}
