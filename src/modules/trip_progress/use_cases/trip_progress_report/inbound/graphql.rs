use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::trip_progress::core::aggregate::{AggregatedRow, TripSummary};
use crate::modules::trip_progress::use_cases::trip_progress_report::report::TripProgressReport;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlAggregatedRow {
    pub cumulative_distance_km: f64,
    pub cumulative_elevation_m: f64,
    pub cumulative_minutes: i64,
    pub cumulative_duration: String,
    pub display_date: String,
}

impl From<AggregatedRow> for GqlAggregatedRow {
    fn from(row: AggregatedRow) -> Self {
        Self {
            cumulative_distance_km: row.cumulative_distance_km,
            cumulative_elevation_m: row.cumulative_elevation_m,
            cumulative_minutes: row.cumulative_minutes,
            cumulative_duration: row.cumulative_duration,
            display_date: row.display_date,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlTripSummary {
    pub total_distance_km: f64,
    pub total_elevation_m: f64,
    pub total_minutes: i64,
    pub total_duration: String,
    pub entry_count: u64,
    pub hours_traveled: f64,
}

impl From<TripSummary> for GqlTripSummary {
    fn from(summary: TripSummary) -> Self {
        Self {
            total_distance_km: summary.total_distance_km,
            total_elevation_m: summary.total_elevation_m,
            total_minutes: summary.total_minutes,
            total_duration: summary.total_duration,
            entry_count: summary.entry_count as u64,
            hours_traveled: summary.hours_traveled,
        }
    }
}

#[derive(SimpleObject)]
pub struct GqlTripProgressReport {
    pub rows: Vec<GqlAggregatedRow>,
    pub summary: GqlTripSummary,
}

impl From<TripProgressReport> for GqlTripProgressReport {
    fn from(report: TripProgressReport) -> Self {
        Self {
            rows: report.rows.into_iter().map(Into::into).collect(),
            summary: report.summary.into(),
        }
    }
}

#[derive(Default)]
pub struct TripProgressQuery;

#[Object]
impl TripProgressQuery {
    async fn trip_progress(&self, context: &Context<'_>) -> GqlResult<GqlTripProgressReport> {
        let state = context.data_unchecked::<AppState>();
        let report = state
            .trip_progress_report
            .handle()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(report.into())
    }
}
