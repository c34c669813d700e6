use std::cmp::Ordering;

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::{
    config,
    sentiment::{SentimentScorer, SentimentScores},
};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A stored customer review. Seeded records may lack an id; created records
/// always carry one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "ReviewId", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "ReviewBody")]
    pub body: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Timestamp", with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
}

impl Review {
    /// Builds a validated submission into a full record: fresh v4 id and a
    /// server-side timestamp, never client-supplied.
    pub fn create(body: String, location: String) -> Self {
        Self {
            id: Some(Uuid::new_v4().to_string()),
            body,
            location,
            timestamp: Local::now().naive_local(),
        }
    }
}

/// A review with its transient sentiment attachment, the response shape for
/// both queries and creations. Sentiment is recomputed on every read, never
/// cached.
#[derive(Clone, Debug, Serialize)]
pub struct ScoredReview {
    #[serde(flatten)]
    pub review: Review,
    pub sentiment: SentimentScores,
}

pub mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&timestamp.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(de::Error::custom)
    }
}

/// Raw query-string parameters for the review listing.
#[derive(Debug, Deserialize)]
pub struct ReviewQuery {
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Narrows a snapshot by location equality, then by inclusive date range.
/// Pure; never reorders the input.
pub fn filter_reviews(reviews: Vec<Review>, query: &ReviewQuery) -> Vec<Review> {
    // A blank `location=` parameter counts as absent, like blank form values.
    let location = query
        .location
        .as_deref()
        .filter(|location| !location.is_empty());
    let reviews = match location {
        // A location outside the allow-list yields no results even when the
        // store holds literal matches seeded past the list.
        Some(location) if !config::is_allowed_location(location) => Vec::new(),
        Some(location) => reviews
            .into_iter()
            .filter(|review| review.location == location)
            .collect(),
        None => reviews,
    };

    filter_by_date_range(reviews, query)
}

fn filter_by_date_range(reviews: Vec<Review>, query: &ReviewQuery) -> Vec<Review> {
    let start = query.start_date.as_deref().and_then(parse_date_bound);
    let end = query.end_date.as_deref().and_then(parse_date_bound);
    if start.is_none() && end.is_none() {
        return reviews;
    }

    reviews
        .into_iter()
        .filter(|review| {
            start.is_none_or(|bound| review.timestamp >= bound)
                && end.is_none_or(|bound| review.timestamp <= bound)
        })
        .collect()
}

/// Both bounds resolve to midnight of the named day, so an end bound excludes
/// reviews later on that date. An unparseable date drops the bound entirely
/// (fail-open).
fn parse_date_bound(raw: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()?;
    date.and_hms_opt(0, 0, 0)
}

/// Attaches a sentiment score to each review and orders by descending
/// compound score. The sort is stable: ties keep their filtered order.
pub fn rank_reviews(scorer: &SentimentScorer, reviews: Vec<Review>) -> Vec<ScoredReview> {
    let mut scored: Vec<ScoredReview> = reviews
        .into_iter()
        .map(|review| {
            let sentiment = scorer.score(&review.body);
            ScoredReview { review, sentiment }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.sentiment
            .compound
            .partial_cmp(&a.sentiment.compound)
            .unwrap_or(Ordering::Equal)
    });
    scored
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ReviewBody and Location are required")]
    MissingField,
    #[error("Invalid location provided")]
    InvalidLocation,
}

/// Form-encoded fields of a review submission.
#[derive(Debug, Deserialize)]
pub struct CreateReviewForm {
    #[serde(rename = "ReviewBody")]
    pub body: Option<String>,
    #[serde(rename = "Location")]
    pub location: Option<String>,
}

/// Checks required fields and the location allow-list. Accepted text passes
/// through unchanged; empty values count as absent.
pub fn validate_submission(form: &CreateReviewForm) -> Result<(String, String), ValidationError> {
    let body = form
        .body
        .as_deref()
        .filter(|body| !body.is_empty())
        .ok_or(ValidationError::MissingField)?;
    let location = form
        .location
        .as_deref()
        .filter(|location| !location.is_empty())
        .ok_or(ValidationError::MissingField)?;

    if !config::is_allowed_location(location) {
        return Err(ValidationError::InvalidLocation);
    }

    Ok((body.to_owned(), location.to_owned()))
}
