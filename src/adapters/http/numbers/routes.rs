//! Route configuration for number endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{show_form, submit_form, submit_json, NumbersAppState};

/// Creates the number router.
///
/// Routes:
/// - `GET /` - Empty form page
/// - `POST /` - Form submission, answered with the result page
/// - `POST /api/numbers` - JSON submission, answered with the JSON view
pub fn numbers_router() -> Router<NumbersAppState> {
    Router::new()
        .route("/", get(show_form).post(submit_form))
        .route("/api/numbers", post(submit_json))
}
