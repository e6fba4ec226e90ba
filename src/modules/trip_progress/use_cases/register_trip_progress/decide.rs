// Pure decision function for logging trip progress.
//
// Rules
// - Riding time must be filled in and parse as H:MM; the read side tolerates
//   malformed legacy rows, but new records are kept clean at the boundary.
// - Distance and elevation gain must be finite and non-negative.
// - Never perform input or output.

use crate::modules::trip_progress::core::aggregate::parse_duration_minutes;
use crate::modules::trip_progress::core::entry::TripLogEntry;
use crate::modules::trip_progress::use_cases::register_trip_progress::command::RegisterTripProgress;
use crate::shared::core::dates::TIMESTAMP_FORMAT;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("riding time must be filled in")]
    MissingDuration,
    #[error("riding time must be in H:MM form")]
    MalformedDuration,
    #[error("distance must be a non-negative number")]
    InvalidDistance,
    #[error("elevation gain must be a non-negative number")]
    InvalidElevation,
}

pub fn decide_register_progress(
    command: RegisterTripProgress,
) -> Result<TripLogEntry, DecideError> {
    let duration = command.duration.trim();
    if duration.is_empty() {
        return Err(DecideError::MissingDuration);
    }
    if parse_duration_minutes(duration).is_none() {
        return Err(DecideError::MalformedDuration);
    }
    if !command.distance_km.is_finite() || command.distance_km < 0.0 {
        return Err(DecideError::InvalidDistance);
    }
    if !command.elevation_m.is_finite() || command.elevation_m < 0.0 {
        return Err(DecideError::InvalidElevation);
    }
    Ok(TripLogEntry {
        timestamp: Some(command.recorded_at.format(TIMESTAMP_FORMAT).to_string()),
        distance_km: Some(command.distance_km),
        elevation_m: Some(command.elevation_m),
        duration: Some(duration.to_string()),
    })
}
