// End to end flow over the real router: record expenses, then read the ledger.

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
async fn it_should_total_recorded_expenses_by_category() {
    let state = AppState::in_memory();

    let created = post_json(
        &state,
        "/expenses",
        r#"{"description":"Camping","category":"Hospedagem","amount":35.5,"spent_on":"2024-05-10"}"#,
    )
    .await;
    assert_eq!(created, StatusCode::CREATED);
    let created = post_json(
        &state,
        "/expenses",
        r#"{"description":"Mercado","category":"Alimentação","amount":52.0,"spent_on":"2024-05-11"}"#,
    )
    .await;
    assert_eq!(created, StatusCode::CREATED);

    let (status, report) = get_json(&state, "/expenses").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["rows"].as_array().unwrap().len(), 2);
    assert_eq!(report["total_amount"], 87.5);
    assert_eq!(report["rows"][0]["display_date"], "10/05/2024");

    let by_category = report["by_category"].as_array().unwrap();
    assert_eq!(by_category.len(), 2);
    assert_eq!(by_category[0]["category"], "Alimentação");
    assert_eq!(by_category[0]["amount"], 52.0);
    assert_eq!(by_category[1]["category"], "Hospedagem");
    assert_eq!(by_category[1]["amount"], 35.5);
}

#[tokio::test]
async fn it_should_file_an_unknown_category_label_under_other() {
    let state = AppState::in_memory();

    post_json(
        &state,
        "/expenses",
        r#"{"description":"Imprevisto","category":"???","amount":10.0,"spent_on":"2024-05-10"}"#,
    )
    .await;

    let (_, report) = get_json(&state, "/expenses").await;
    assert_eq!(report["rows"][0]["category"], "Outros");
}

#[tokio::test]
async fn it_should_reject_an_expense_without_a_positive_amount() {
    let state = AppState::in_memory();

    let rejected = post_json(
        &state,
        "/expenses",
        r#"{"description":"Nada","category":"Outros","amount":0.0,"spent_on":"2024-05-10"}"#,
    )
    .await;
    assert_eq!(rejected, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, report) = get_json(&state, "/expenses").await;
    assert_eq!(report["rows"], serde_json::json!([]));
}
