// Running-total aggregation over raw trip progress records.
//
// Purpose
// - Turn the loosely-typed map of records read from the store into an ordered
//   sequence of cumulative rows for tables and charts, plus one summary.
//
// Responsibilities
// - Define a deterministic processing order: parsed timestamp ascending,
//   undated records first, store key as tiebreak.
// - Degrade malformed per-record fields to defaults; one bad record must
//   never discard the batch.
// - Stay pure: no I/O, no state between calls.

use crate::modules::trip_progress::core::entry::TripLogEntry;
use crate::shared::core::coerce::non_negative_or_zero;
use crate::shared::core::dates::{display_date, parse_timestamp};
use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value as Json;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregateError {
    #[error("trip progress data is not a map of records")]
    InvalidInput,
}

/// One output row per stored record, carrying the running totals as of that
/// record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedRow {
    pub cumulative_distance_km: f64,
    pub cumulative_elevation_m: f64,
    pub cumulative_minutes: i64,
    pub cumulative_duration: String,
    pub display_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripSummary {
    pub total_distance_km: f64,
    pub total_elevation_m: f64,
    pub total_minutes: i64,
    pub total_duration: String,
    pub entry_count: usize,
    pub hours_traveled: f64,
}

/// Aggregate the raw record map into ordered running-total rows.
///
/// Absent data and JSON `null` mean "nothing logged yet" and yield an empty
/// vector; any other non-object shape is a caller error.
pub fn aggregate(data: Option<&Json>) -> Result<Vec<AggregatedRow>, AggregateError> {
    let records = match data {
        None | Some(Json::Null) => return Ok(Vec::new()),
        Some(Json::Object(records)) => records,
        Some(_) => return Err(AggregateError::InvalidInput),
    };

    let mut entries: Vec<(&String, Option<NaiveDateTime>, TripLogEntry)> = records
        .iter()
        .map(|(key, record)| {
            let entry = TripLogEntry::from_record(record);
            let parsed = entry.timestamp.as_deref().and_then(parse_timestamp);
            (key, parsed, entry)
        })
        .collect();
    entries.sort_by(|(key_a, ts_a, _), (key_b, ts_b, _)| {
        ts_a.cmp(ts_b).then_with(|| key_a.cmp(key_b))
    });

    let mut rows = Vec::with_capacity(entries.len());
    let mut distance_km = 0.0;
    let mut elevation_m = 0.0;
    let mut minutes = 0i64;
    for (_, parsed, entry) in entries {
        distance_km += non_negative_or_zero(entry.distance_km);
        elevation_m += non_negative_or_zero(entry.elevation_m);
        minutes += entry
            .duration
            .as_deref()
            .and_then(parse_duration_minutes)
            .unwrap_or(0);
        rows.push(AggregatedRow {
            cumulative_distance_km: distance_km,
            cumulative_elevation_m: elevation_m,
            cumulative_minutes: minutes,
            cumulative_duration: format_duration(minutes),
            display_date: display_date(parsed.map(|ts| ts.date())),
        });
    }
    Ok(rows)
}

/// Totals for the header tiles, from the last row's cumulative values.
///
/// Hours traveled derive from the accumulated riding time, not from the row
/// count.
pub fn summarize(rows: &[AggregatedRow]) -> TripSummary {
    let last = rows.last();
    let total_minutes = last.map_or(0, |row| row.cumulative_minutes);
    TripSummary {
        total_distance_km: last.map_or(0.0, |row| row.cumulative_distance_km),
        total_elevation_m: last.map_or(0.0, |row| row.cumulative_elevation_m),
        total_minutes,
        total_duration: format_duration(total_minutes),
        entry_count: rows.len(),
        hours_traveled: total_minutes as f64 / 60.0,
    }
}

/// Minutes in an `H:MM` or `HH:MM` string; `None` when malformed.
pub fn parse_duration_minutes(raw: &str) -> Option<i64> {
    let (hours, minutes) = raw.trim().split_once(':')?;
    let hours: i64 = hours.trim().parse().ok()?;
    let minutes: i64 = minutes.trim().parse().ok()?;
    if hours < 0 || !(0..60).contains(&minutes) {
        return None;
    }
    Some(hours * 60 + minutes)
}

pub fn format_duration(total_minutes: i64) -> String {
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}
