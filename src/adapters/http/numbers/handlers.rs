//! HTTP handlers for the number form and JSON endpoint.
//!
//! These handlers connect Axum routes to the submission handler. Both the
//! HTML and the JSON flow share the same view; only the rendering differs.

use std::sync::Arc;

use axum::extract::{Form, Json, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::application::{NumbersView, SubmitNumbersCommand, SubmitNumbersHandler};
use crate::domain::numbers::NumberForm;
use crate::ports::ResultStore;

use super::dto::{SubmitNumbersRequest, SubmitNumbersResponse};
use super::page::render_page;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct NumbersAppState {
    pub result_store: Arc<dyn ResultStore>,
}

impl NumbersAppState {
    pub fn new(result_store: Arc<dyn ResultStore>) -> Self {
        Self { result_store }
    }

    pub fn submit_numbers_handler(&self) -> SubmitNumbersHandler {
        SubmitNumbersHandler::new(self.result_store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// HTML form
// ════════════════════════════════════════════════════════════════════════════════

/// GET / - Empty form
pub async fn show_form() -> Html<String> {
    Html(render_page(&NumbersView::empty()))
}

/// POST / - Submit the form
///
/// Always answers 200; validation and store errors are shown in the page.
pub async fn submit_form(
    State(state): State<NumbersAppState>,
    Form(form): Form<NumberForm>,
) -> Html<String> {
    let view = state
        .submit_numbers_handler()
        .handle(SubmitNumbersCommand { form })
        .await;

    Html(render_page(&view))
}

// ════════════════════════════════════════════════════════════════════════════════
// JSON API
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/numbers - Submit numbers as JSON
pub async fn submit_json(
    State(state): State<NumbersAppState>,
    Json(request): Json<SubmitNumbersRequest>,
) -> Response {
    let view = state
        .submit_numbers_handler()
        .handle(SubmitNumbersCommand {
            form: request.into(),
        })
        .await;

    let status = if view.is_invalid() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::OK
    };

    (status, Json(SubmitNumbersResponse::from(view))).into_response()
}
