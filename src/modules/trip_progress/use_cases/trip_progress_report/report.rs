use crate::modules::trip_progress::core::aggregate::{AggregatedRow, TripSummary};
use serde::Serialize;

/// What the table and chart renderers consume: ordered running-total rows
/// plus the header totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripProgressReport {
    pub rows: Vec<AggregatedRow>,
    pub summary: TripSummary,
}
