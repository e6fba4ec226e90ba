// Command data type for pinning one waypoint on the route.

use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct AddLocation {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub recorded_at: NaiveDateTime,
}
