use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::expenses::use_cases::expense_report::inbound::graphql::ExpensesQuery;
use crate::modules::expenses::use_cases::register_expense::inbound::graphql::ExpensesMutation;
use crate::modules::route::use_cases::add_location::inbound::graphql::RouteMutation;
use crate::modules::route::use_cases::route_map::inbound::graphql::RouteQuery;
use crate::modules::trip_progress::use_cases::register_trip_progress::inbound::graphql::TripProgressMutation;
use crate::modules::trip_progress::use_cases::trip_progress_report::inbound::graphql::TripProgressQuery;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(TripProgressQuery, ExpensesQuery, RouteQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(TripProgressMutation, ExpensesMutation, RouteMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}
