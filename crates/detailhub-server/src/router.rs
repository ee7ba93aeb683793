//! Axum router wiring.

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::{app_state::AppState, ops, services};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/v1/users/me", post(services::users::me))
        .route("/v1/orgs/:org_id", get(services::organizations::get))
        .route("/v1/orgs/:org_id/calls", get(services::calls::list))
        .route(
            "/v1/orgs/:org_id/clients",
            get(services::clients::list).post(services::clients::create),
        )
        .route("/v1/calls/:call_id", get(services::calls::get))
        .route("/v1/calls/:call_id/summary", post(services::calls::generate_summary))
        .route(
            "/v1/calls/:call_id/tasks",
            get(services::tasks::list_by_call).post(services::tasks::create),
        )
        .route("/v1/tasks/:task_id", patch(services::tasks::update_status))
        .with_state(state)
}
