pub mod config;
pub mod reviews;
pub mod seed;
pub mod sentiment;
pub mod store;
pub mod web;

pub use sentiment::{SentimentScorer, SentimentScores};
pub use store::ReviewStore;
pub use web::AppState;
