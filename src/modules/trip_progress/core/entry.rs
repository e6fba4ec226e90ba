// Wire shape of one raw trip progress record.
//
// Field keys follow the records already in the shared realtime database, so
// rows written by earlier clients aggregate identically to new ones. Every
// field is optional and leniently coerced; a record is never rejected for a
// single bad field.

use crate::shared::core::coerce::{lenient_f64, lenient_string};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripLogEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub timestamp: Option<String>,
    #[serde(rename = "distancia", default, deserialize_with = "lenient_f64")]
    pub distance_km: Option<f64>,
    #[serde(rename = "altimetria", default, deserialize_with = "lenient_f64")]
    pub elevation_m: Option<f64>,
    #[serde(rename = "tempo", default, deserialize_with = "lenient_string")]
    pub duration: Option<String>,
}

impl TripLogEntry {
    /// Read one store record. A member that is not an object degrades to a
    /// record with every field defaulted.
    pub fn from_record(record: &Json) -> Self {
        serde_json::from_value(record.clone()).unwrap_or_default()
    }
}
