// Command data type for logging one trip progress record.
//
// Purpose
// - Express user intent to log distance, elevation gain and riding time.
//
// Responsibilities
// - Carry input data for the decider to validate and turn into a store record.
// - Be independent of transport layer details (not tied to HTTP or GraphQL).

use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct RegisterTripProgress {
    pub distance_km: f64,
    pub elevation_m: f64,
    pub duration: String,
    pub recorded_at: NaiveDateTime,
}
