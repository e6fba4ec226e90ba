// GraphQL surface exercised directly through the schema.

use serde_json::json;

use crate::modules::trip_progress::use_cases::register_trip_progress::handler::TRIP_PROGRESS_PATH;
use crate::shell::graphql::schema;
use crate::shell::state::AppState;
use crate::tests::fixtures::records::progress_record;

#[tokio::test]
async fn it_should_register_progress_through_the_mutation_root() {
    let state = AppState::in_memory();
    let schema = schema(state.clone());

    let response = schema
        .execute(
            r#"mutation {
                registerTripProgress(distanceKm: 10.0, elevationM: 100.0, duration: "1:00")
            }"#,
        )
        .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = state.store.fetch(TRIP_PROGRESS_PATH).await.unwrap().unwrap();
    assert_eq!(data.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn it_should_report_progress_through_the_query_root() {
    let state = AppState::in_memory();
    state
        .store
        .push(
            TRIP_PROGRESS_PATH,
            progress_record("2024-01-01 08:00:00", 10.0, 100.0, "1:00"),
        )
        .await
        .unwrap();
    state
        .store
        .push(
            TRIP_PROGRESS_PATH,
            progress_record("2024-01-01 09:00:00", 5.0, 50.0, "0:30"),
        )
        .await
        .unwrap();

    let schema = schema(state);
    let response = schema
        .execute(
            r#"{
                tripProgress {
                    rows { cumulativeDistanceKm cumulativeDuration displayDate }
                    summary { totalDistanceKm totalDuration entryCount hoursTraveled }
                }
            }"#,
        )
        .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    assert_eq!(
        data["tripProgress"]["rows"],
        json!([
            {
                "cumulativeDistanceKm": 10.0,
                "cumulativeDuration": "01:00",
                "displayDate": "01/01/2024",
            },
            {
                "cumulativeDistanceKm": 15.0,
                "cumulativeDuration": "01:30",
                "displayDate": "01/01/2024",
            },
        ])
    );
    assert_eq!(data["tripProgress"]["summary"]["entryCount"], 2);
    assert_eq!(data["tripProgress"]["summary"]["hoursTraveled"], 1.5);
}

#[tokio::test]
async fn it_should_surface_a_domain_rejection_as_a_graphql_error() {
    let schema = schema(AppState::in_memory());
    let response = schema
        .execute(
            r#"mutation {
                registerTripProgress(distanceKm: 10.0, elevationM: 100.0, duration: "soon")
            }"#,
        )
        .await;
    assert_eq!(response.errors.len(), 1);
    assert!(response.errors[0].message.contains("riding time"));
}
