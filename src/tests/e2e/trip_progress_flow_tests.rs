// End to end flow over the real router: log progress, then read the report.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value as Json;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::shell::state::AppState;

async fn post_json(state: &AppState, uri: &str, body: &str) -> StatusCode {
    router(state.clone())
        .oneshot(
            Request::post(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
        .status()
}

async fn get_json(state: &AppState, uri: &str) -> (StatusCode, Json) {
    let response = router(state.clone())
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn it_should_accumulate_logged_progress_into_the_report() {
    let state = AppState::in_memory();

    let created = post_json(
        &state,
        "/trip-progress",
        r#"{"distance_km":10,"elevation_m":100,"duration":"1:00"}"#,
    )
    .await;
    assert_eq!(created, StatusCode::CREATED);
    let created = post_json(
        &state,
        "/trip-progress",
        r#"{"distance_km":5,"elevation_m":50,"duration":"0:30"}"#,
    )
    .await;
    assert_eq!(created, StatusCode::CREATED);

    let (status, report) = get_json(&state, "/trip-progress").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["rows"].as_array().unwrap().len(), 2);
    assert_eq!(report["summary"]["entry_count"], 2);
    assert_eq!(report["summary"]["total_distance_km"], 15.0);
    assert_eq!(report["summary"]["total_elevation_m"], 150.0);
    assert_eq!(report["summary"]["total_minutes"], 90);
    assert_eq!(report["summary"]["total_duration"], "01:30");
    assert_eq!(report["summary"]["hours_traveled"], 1.5);

    let rows = report["rows"].as_array().unwrap();
    let mut last = 0.0;
    for row in rows {
        let cumulative = row["cumulative_distance_km"].as_f64().unwrap();
        assert!(cumulative >= last, "running totals must never decrease");
        last = cumulative;
    }
}

#[tokio::test]
async fn it_should_not_let_a_rejected_entry_reach_the_report() {
    let state = AppState::in_memory();

    let rejected = post_json(
        &state,
        "/trip-progress",
        r#"{"distance_km":10,"elevation_m":100,"duration":"soon"}"#,
    )
    .await;
    assert_eq!(rejected, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, report) = get_json(&state, "/trip-progress").await;
    assert_eq!(report["summary"]["entry_count"], 0);
    assert_eq!(report["rows"], serde_json::json!([]));
}
