use axum::{
    Form, Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, info};

use crate::{
    reviews::{self, CreateReviewForm, Review, ReviewQuery, ScoredReview},
    web::{AppState, json_error},
};

/// GET: snapshot the store, filter by the query parameters, rank by
/// descending compound sentiment.
pub async fn list_reviews(
    State(state): State<AppState>,
    Query(query): Query<ReviewQuery>,
) -> Json<Vec<ScoredReview>> {
    let snapshot = state.store().snapshot().await;
    let filtered = reviews::filter_reviews(snapshot, &query);
    let ranked = reviews::rank_reviews(state.scorer(), filtered);

    debug!(count = ranked.len(), "serving filtered reviews");
    Json(ranked)
}

/// POST: validate the submission, build the record server-side, append it,
/// and echo it back with its sentiment.
pub async fn create_review(
    State(state): State<AppState>,
    Form(form): Form<CreateReviewForm>,
) -> Response {
    let (body, location) = match reviews::validate_submission(&form) {
        Ok(fields) => fields,
        Err(err) => {
            debug!(%err, "rejected review submission");
            return json_error(StatusCode::BAD_REQUEST, err.to_string()).into_response();
        }
    };

    let review = Review::create(body, location);
    let sentiment = state.scorer().score(&review.body);
    state.store().append(review.clone()).await;
    info!(id = ?review.id, location = %review.location, "stored new review");

    (StatusCode::CREATED, Json(ScoredReview { review, sentiment })).into_response()
}
