use axum::{
    Router,
    routing::{get, post, post_service},
};
use async_graphql_axum::GraphQL;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::expenses::use_cases::expense_report::inbound::http as expense_report_http;
use crate::modules::expenses::use_cases::register_expense::inbound::http as register_expense_http;
use crate::modules::route::use_cases::add_location::inbound::http as add_location_http;
use crate::modules::route::use_cases::route_map::inbound::http as route_map_http;
use crate::modules::trip_progress::use_cases::register_trip_progress::inbound::http as register_progress_http;
use crate::modules::trip_progress::use_cases::trip_progress_report::inbound::http as progress_report_http;
use crate::shell::graphql;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = graphql::schema(state.clone());

    Router::new()
        .route(
            "/trip-progress",
            post(register_progress_http::handle).get(progress_report_http::handle),
        )
        .route(
            "/expenses",
            post(register_expense_http::handle).get(expense_report_http::handle),
        )
        .route("/locations", post(add_location_http::handle))
        .route("/route-map", get(route_map_http::handle))
        .route("/graphql", post_service(GraphQL::new(schema)))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
