use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{MethodRouter, get},
};

use crate::web::{AppState, reviews};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", review_routes())
        .route("/healthz", get(healthz))
        // The review surface ignores the request path; unsupported methods
        // get the method router's 405.
        .route("/*path", review_routes())
        .with_state(state)
}

fn review_routes() -> MethodRouter<AppState> {
    get(reviews::list_reviews).post(reviews::create_review)
}

async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}
