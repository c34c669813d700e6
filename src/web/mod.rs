pub mod responses;
pub mod reviews;
pub mod router;
pub mod state;

pub use responses::{ApiError, json_error};
pub use state::AppState;
