// Wire shape of one stored waypoint.

use crate::shared::core::coerce::{lenient_f64, lenient_string};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

/// City shown when a waypoint record carries none.
pub const UNKNOWN_CITY: &str = "unknown";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "cidade", default, deserialize_with = "lenient_string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub timestamp: Option<String>,
}

impl Location {
    /// Read one store record; a non-object member degrades to defaults.
    pub fn from_record(record: &Json) -> Self {
        serde_json::from_value(record.clone()).unwrap_or_default()
    }
}

pub fn valid_latitude(value: f64) -> bool {
    value.is_finite() && (-90.0..=90.0).contains(&value)
}

pub fn valid_longitude(value: f64) -> bool {
    value.is_finite() && (-180.0..=180.0).contains(&value)
}
