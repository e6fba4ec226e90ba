// End to end flow over the real router: pin waypoints, then read the map data.

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
async fn it_should_plot_pinned_waypoints_and_the_route_center() {
    let state = AppState::in_memory();

    let created = post_json(
        &state,
        "/locations",
        r#"{"city":"Curitiba","latitude":-25.0,"longitude":-49.0}"#,
    )
    .await;
    assert_eq!(created, StatusCode::CREATED);
    let created = post_json(
        &state,
        "/locations",
        r#"{"city":"Lages","latitude":-27.0,"longitude":-51.0}"#,
    )
    .await;
    assert_eq!(created, StatusCode::CREATED);

    let (status, map) = get_json(&state, "/route-map").await;
    assert_eq!(status, StatusCode::OK);

    let points = map["points"].as_array().unwrap();
    assert_eq!(points.len(), 2);
    let mut cities: Vec<&str> = points.iter().map(|p| p["city"].as_str().unwrap()).collect();
    cities.sort_unstable();
    assert_eq!(cities, vec!["Curitiba", "Lages"]);
    assert_eq!(map["center"]["latitude"], -26.0);
    assert_eq!(map["center"]["longitude"], -50.0);
}

#[tokio::test]
async fn it_should_reject_a_waypoint_outside_coordinate_bounds() {
    let state = AppState::in_memory();

    let rejected = post_json(
        &state,
        "/locations",
        r#"{"city":"Nowhere","latitude":-95.0,"longitude":-49.0}"#,
    )
    .await;
    assert_eq!(rejected, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, map) = get_json(&state, "/route-map").await;
    assert_eq!(map["points"], serde_json::json!([]));
    assert_eq!(map["center"], Json::Null);
}
